//! Defines [`WktError`], representing all errors returned by this crate.

use crate::model::GeometryKind;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WktError {
    /// A coordinate token is not a finite number. The whole literal is rejected.
    #[error("invalid coordinate '{token}' in {kind} literal")]
    Parse { kind: GeometryKind, token: String },

    /// Ring/path nesting does not match the shape expected for the keyword.
    #[error("malformed {kind} literal: {reason}")]
    MalformedGeometry { kind: GeometryKind, reason: &'static str },

    /// Every point collapses to one location; the scale divisor would be zero.
    #[error("bounding extent is degenerate (all points coincide)")]
    DegenerateExtent,

    /// The bounding span overflows to a non-finite value.
    #[error("bounding extent is not finite")]
    ExtentOverflow,

    #[error("canvas size must be a positive number of pixels, got {0}")]
    InvalidCanvasSize(u32),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WktError {
    /// Stable machine-readable code for each variant.
    pub fn code(&self) -> &'static str {
        match self {
            WktError::Parse { .. } => "parse_error",
            WktError::MalformedGeometry { .. } => "malformed_geometry",
            WktError::DegenerateExtent => "degenerate_extent",
            WktError::ExtentOverflow => "extent_overflow",
            WktError::InvalidCanvasSize(_) => "invalid_canvas_size",
            WktError::Json(_) => "json",
        }
    }

    /// True for errors that reject a single geometry rather than the whole load.
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, WktError::Parse { .. } | WktError::MalformedGeometry { .. })
    }

    pub(crate) fn malformed(kind: GeometryKind, reason: &'static str) -> WktError {
        WktError::MalformedGeometry { kind, reason }
    }
}

pub type Result<T> = std::result::Result<T, WktError>;
