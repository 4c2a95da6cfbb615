use js_sys::{Float64Array, Object, Reflect, Uint32Array};
use wasm_bindgen::JsValue;
use wktcanvas::PointSequence;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_u32(data: &[u32]) -> Uint32Array { Uint32Array::from(data) }
pub fn arr_f64(data: &[f64]) -> Float64Array { Float64Array::from(data) }

/// `{ offsets, positions }`: sequence `i` owns points `offsets[i]..offsets[i+1]`
/// of the interleaved `[x0, y0, x1, y1, ..]` positions.
pub fn sequence_data(seqs: &[PointSequence]) -> JsValue {
    let mut offsets = Vec::with_capacity(seqs.len() + 1);
    let mut positions = Vec::new();
    offsets.push(0u32);
    for s in seqs {
        for p in s {
            positions.push(p.x);
            positions.push(p.y);
        }
        offsets.push((positions.len() / 2) as u32);
    }
    let obj = new_obj();
    set_kv(&obj, "offsets", &arr_u32(&offsets).into());
    set_kv(&obj, "positions", &arr_f64(&positions).into());
    obj.into()
}
