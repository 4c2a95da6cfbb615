use crate::error::Result;
use crate::model::PointSequence;
use crate::scene::{Rejection, Scene};
use serde::Serialize;
use serde_json::Value;

pub const DOC_VERSION: u32 = 1;

#[derive(Serialize)]
struct Doc<'a> {
    version: u32,
    canvas_size: u32,
    polygons: &'a [PointSequence],
    lines: &'a [PointSequence],
    #[serde(skip_serializing_if = "is_empty")]
    rejected: &'a [Rejection],
}

fn is_empty<T>(s: &&[T]) -> bool {
    s.is_empty()
}

fn doc(scene: &Scene) -> Doc<'_> {
    Doc {
        version: DOC_VERSION,
        canvas_size: scene.canvas_size,
        polygons: &scene.polygons,
        lines: &scene.lines,
        rejected: &scene.rejected,
    }
}

pub fn to_json_impl(scene: &Scene) -> Result<Value> {
    Ok(serde_json::to_value(doc(scene))?)
}

impl Scene {
    /// `{"version":1,"canvas_size":..,"polygons":[[[x,y],..],..],"lines":[..]}`
    pub fn to_json(&self) -> Result<Value> {
        to_json_impl(self)
    }

    pub fn to_json_string(&self) -> Result<String> {
        // serialized straight from the document struct to keep field order
        Ok(serde_json::to_string(&doc(self))?)
    }
}
