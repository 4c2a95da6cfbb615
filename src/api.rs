use crate::error;
use crate::interop::sequence_data;
use crate::Scene;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;
use wktcanvas::SceneConfig;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn run(text: &str, cfg: &SceneConfig) -> wktcanvas::Result<Scene> {
    let scene = wktcanvas::load_scene(text, cfg)?;
    for r in &scene.rejected {
        console::warn_1(&JsValue::from_str(&format!(
            "wktcanvas: dropped {} at offset {}: {}",
            r.kind, r.offset, r.message
        )));
    }
    Ok(Scene::from(scene))
}

/// Loads `text` onto a `canvas_size` canvas, aborting on the first bad
/// geometry. Returns `undefined` on any error; use [`load_scene_res`] for details.
#[wasm_bindgen]
pub fn load_scene(text: &str, canvas_size: u32) -> Option<Scene> {
    let cfg = SceneConfig::new(canvas_size).ok()?;
    run(text, &cfg).ok()
}

/// Result-envelope variant. `config` is `{canvas_size?, decode_policy?}` or
/// `undefined`/`null` for defaults.
#[wasm_bindgen]
pub fn load_scene_res(text: &str, config: JsValue) -> JsValue {
    let cfg = if config.is_undefined() || config.is_null() {
        SceneConfig::default()
    } else {
        match serde_wasm_bindgen::from_value::<SceneConfig>(config) {
            Ok(c) => c,
            Err(e) => return error::invalid_config(e.to_string()),
        }
    };
    match run(text, &cfg) {
        Ok(scene) => error::ok(scene.into()),
        Err(e) => error::from_wkt(&e),
    }
}

#[wasm_bindgen]
impl Scene {
    pub fn canvas_size(&self) -> u32 {
        self.rs_inner().canvas_size
    }
    pub fn polygon_count(&self) -> u32 {
        self.rs_inner().polygons.len() as u32
    }
    pub fn line_count(&self) -> u32 {
        self.rs_inner().lines.len() as u32
    }
    pub fn rejected_count(&self) -> u32 {
        self.rs_inner().rejected.len() as u32
    }

    // Typed arrays getters
    pub fn get_polygon_data(&self) -> JsValue {
        sequence_data(&self.rs_inner().polygons)
    }
    pub fn get_line_data(&self) -> JsValue {
        sequence_data(&self.rs_inner().lines)
    }
    pub fn get_rejected(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.rs_inner().rejected).unwrap_or(JsValue::NULL)
    }

    // JSON + SVG
    pub fn to_json(&self) -> JsValue {
        let ser = serde_wasm_bindgen::Serializer::json_compatible();
        match self.rs_inner().to_json() {
            Ok(v) => v.serialize(&ser).unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn to_svg_paths(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.rs_inner().to_svg_paths()).unwrap_or(JsValue::NULL)
    }
    pub fn to_svg_document(&self) -> String {
        self.rs_inner().to_svg_document()
    }
}
