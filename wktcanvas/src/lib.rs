//! Extracts WKT polygons and line strings from free-form text and projects
//! them onto a fixed-size canvas.
//!
//! ```
//! use wktcanvas::{load_scene, SceneConfig};
//!
//! let scene = load_scene("POLYGON ((0 0, 2 0, 2 2, 0 2, 0 0))", &SceneConfig::default()).unwrap();
//! assert_eq!(scene.polygons[0].len(), 5);
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod scene;
mod json;
mod svg;

pub use config::{DecodePolicy, SceneConfig};
pub use error::{Result, WktError};
pub use model::{GeometryKind, GeometryLiteral, Point, PointSequence, Shape};
pub use normalize::{CanvasMapping, NormalizationFrame, DEFAULT_CANVAS_SIZE};
pub use scene::{load_scene, Rejection, Scene};
