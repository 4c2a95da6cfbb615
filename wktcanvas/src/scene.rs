//! Whole-document pipeline: extract, decode, normalize.

use crate::config::{DecodePolicy, SceneConfig};
use crate::decode::decode_literal;
use crate::error::Result;
use crate::extract::Literals;
use crate::model::{partition_shapes, GeometryKind, PointSequence, Shape};
use crate::normalize::normalize;
use serde::Serialize;
use tracing::{debug, warn};

/// A geometry dropped under [`DecodePolicy::SkipMalformed`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub offset: usize,
    pub kind: GeometryKind,
    pub code: &'static str,
    pub message: String,
}

/// Pixel-space output of one load, ready for a canvas of `canvas_size` pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub canvas_size: u32,
    pub polygons: Vec<PointSequence>,
    pub lines: Vec<PointSequence>,
    pub rejected: Vec<Rejection>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty() && self.lines.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.polygons.iter().chain(&self.lines).map(Vec::len).sum()
    }
}

/// Decoded shapes of a document in source order, plus any rejections the
/// policy allowed.
pub fn decode_document(text: &str, policy: DecodePolicy) -> Result<(Vec<Shape>, Vec<Rejection>)> {
    let mut shapes = Vec::new();
    let mut rejected = Vec::new();
    let mut literals = 0usize;
    for lit in Literals::new(text) {
        literals += 1;
        match decode_literal(&lit) {
            Ok(mut s) => shapes.append(&mut s),
            Err(e) if policy == DecodePolicy::SkipMalformed && e.is_geometry_error() => {
                warn!(offset = lit.offset, kind = %lit.kind, error = %e, "dropping malformed geometry");
                rejected.push(Rejection {
                    offset: lit.offset,
                    kind: lit.kind,
                    code: e.code(),
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
    debug!(literals, shapes = shapes.len(), rejected = rejected.len(), "decoded document");
    Ok((shapes, rejected))
}

/// Runs the full pipeline over `text`.
pub fn load_scene(text: &str, config: &SceneConfig) -> Result<Scene> {
    config.validate()?;
    let (shapes, rejected) = decode_document(text, config.decode_policy)?;
    let (polygons, lines) = partition_shapes(shapes);
    let (polygons, lines) = normalize(&polygons, &lines, config.canvas())?;
    Ok(Scene {
        canvas_size: config.canvas_size,
        polygons,
        lines,
        rejected,
    })
}
