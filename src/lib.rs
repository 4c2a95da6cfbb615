use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{load_scene, load_scene_res, set_panic_hook};

/// A loaded document in canvas pixel space.
#[wasm_bindgen]
pub struct Scene { pub(crate) inner: wktcanvas::Scene }

impl Scene {
    pub fn rs_inner(&self) -> &wktcanvas::Scene { &self.inner }
}

impl From<wktcanvas::Scene> for Scene {
    fn from(inner: wktcanvas::Scene) -> Scene { Scene { inner } }
}
