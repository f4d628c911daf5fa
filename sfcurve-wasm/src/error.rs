use crate::interop::{new_obj, set_kv};
use sfcurve::CurveError;
use wasm_bindgen::prelude::*;

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

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}

/// Maps a core error onto the envelope, carrying its fields as `data`.
pub fn curve(e: &CurveError) -> JsValue {
    let d = new_obj();
    match e {
        CurveError::InvalidIterationCount { got } => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
        }
        CurveError::TooManyIterations { got, max } => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
        CurveError::InvalidSegment { index, .. } => {
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
        }
        CurveError::SegmentLimitExceeded { predicted, limit } => {
            let p = predicted.map_or(JsValue::NULL, |n| JsValue::from_f64(n as f64));
            set_kv(&d, "predicted", &p);
            set_kv(&d, "limit", &JsValue::from_f64(*limit as f64));
        }
        CurveError::UnknownTemplate(name) => {
            set_kv(&d, "name", &JsValue::from_str(name));
        }
        CurveError::InvalidTemplate { .. } | CurveError::Json(_) => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}
