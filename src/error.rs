use crate::interop::{new_obj, set_kv};
use wasm_bindgen::prelude::*;
use wktcanvas::WktError;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Envelope for a core error; `data` carries the fields a caller can act on.
pub fn from_wkt(e: &WktError) -> JsValue {
    let data = match e {
        WktError::Parse { kind, token } => {
            let d = new_obj();
            set_kv(&d, "kind", &JsValue::from_str(kind.keyword()));
            set_kv(&d, "token", &JsValue::from_str(token));
            Some(d.into())
        }
        WktError::MalformedGeometry { kind, .. } => {
            let d = new_obj();
            set_kv(&d, "kind", &JsValue::from_str(kind.keyword()));
            Some(d.into())
        }
        WktError::InvalidCanvasSize(got) => {
            let d = new_obj();
            set_kv(&d, "param", &JsValue::from_str("canvas_size"));
            set_kv(&d, "got", &JsValue::from_f64(f64::from(*got)));
            Some(d.into())
        }
        _ => None,
    };
    err(e.code(), e.to_string(), data)
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}
