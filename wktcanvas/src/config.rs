use crate::error::{Result, WktError};
use crate::normalize::{CanvasMapping, DEFAULT_CANVAS_SIZE};
use serde::{Deserialize, Serialize};

/// What a load does when one geometry fails to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Fail the whole load with the first decode error.
    #[default]
    Abort,
    /// Drop the failing geometry and keep going.
    SkipMalformed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas_size: u32,
    pub decode_policy: DecodePolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            canvas_size: DEFAULT_CANVAS_SIZE,
            decode_policy: DecodePolicy::default(),
        }
    }
}

impl SceneConfig {
    pub fn new(canvas_size: u32) -> Result<SceneConfig> {
        let cfg = SceneConfig {
            canvas_size,
            ..SceneConfig::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_policy(mut self, decode_policy: DecodePolicy) -> SceneConfig {
        self.decode_policy = decode_policy;
        self
    }

    /// Parses a JSON object; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<SceneConfig> {
        let cfg: SceneConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(WktError::InvalidCanvasSize(self.canvas_size));
        }
        Ok(())
    }

    pub fn canvas(&self) -> CanvasMapping {
        CanvasMapping::new(self.canvas_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.canvas_size, 600);
        assert_eq!(cfg.decode_policy, DecodePolicy::Abort);
    }

    #[test]
    fn zero_canvas_is_rejected() {
        assert!(matches!(SceneConfig::new(0), Err(WktError::InvalidCanvasSize(0))));
        assert!(matches!(
            SceneConfig::from_json_str(r#"{"canvas_size": 0}"#),
            Err(WktError::InvalidCanvasSize(0))
        ));
    }

    #[test]
    fn json_fills_missing_fields() {
        let cfg = SceneConfig::from_json_str(r#"{"decode_policy": "skip_malformed"}"#).unwrap();
        assert_eq!(cfg.canvas_size, 600);
        assert_eq!(cfg.decode_policy, DecodePolicy::SkipMalformed);
        let cfg = SceneConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SceneConfig::from_json_str("{canvas_size").unwrap_err();
        assert_eq!(err.code(), "json");
    }
}
