use crate::error;
use crate::Curve;
use js_sys::Float32Array;
use serde::Serialize;
use sfcurve::geometry::limits;
use sfcurve::{bounding_box, json, library, points, render_svg, RenderConfig};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn template_names() -> JsValue {
    serde_wasm_bindgen::to_value(library::names()).unwrap_or(JsValue::NULL)
}

#[derive(Serialize)]
struct CurveInfo<'a> {
    name: Option<&'a str>,
    iterations: i32,
    segments: usize,
    template_segments: usize,
    span: f64,
    net_rotation: f64,
}

#[wasm_bindgen]
impl Curve {
    /// Koch curve at zero iterations.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Curve {
        Curve::rs_new(Some("koch".into()), sfcurve::Template::new(library::koch()).unwrap_throw())
    }

    pub fn from_name_res(name: &str) -> JsValue {
        match library::by_name(name) {
            Ok(t) => error::ok(Curve::rs_new(Some(name.to_string()), t).into()),
            Err(e) => error::curve(&e),
        }
    }

    pub fn from_json_res(doc: &str) -> JsValue {
        match json::template_from_json_str(doc) {
            Ok((name, t)) => error::ok(Curve::rs_new(name, t).into()),
            Err(e) => error::curve(&e),
        }
    }

    pub fn iterations(&self) -> i32 {
        self.iterations
    }

    /// Slider binding: re-expands at `n`, leaving the curve unchanged on error.
    pub fn set_iterations_res(&mut self, n: i32) -> JsValue {
        if !(0..=limits::MAX_ITERATIONS).contains(&n) {
            return error::out_of_range("iterations", 0.0, limits::MAX_ITERATIONS as f64, n as f64);
        }
        match self.rs_set_iterations(n) {
            Ok(()) => error::ok(JsValue::from_f64(self.lines.len() as f64)),
            Err(e) => error::curve(&e),
        }
    }

    pub fn max_segments(&self) -> u32 {
        self.max_segments.min(u32::MAX as usize) as u32
    }

    pub fn set_max_segments(&mut self, n: u32) {
        self.max_segments = n as usize;
    }

    pub fn segment_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Packed `[rotation, length, reverse, flip]` per segment.
    pub fn lines(&self) -> Float32Array {
        let mut data = Vec::with_capacity(self.lines.len() * 4);
        for l in self.rs_lines() {
            data.push(l.rotation as f32);
            data.push(l.length as f32);
            data.push(if l.mirror_reverse { 1.0 } else { 0.0 });
            data.push(if l.mirror_flip { 1.0 } else { 0.0 });
        }
        crate::interop::arr_f32(&data)
    }

    /// Packed `[x, y]` cursor positions, origin first.
    pub fn points(&self) -> Float32Array {
        let pts = points(&self.lines);
        let mut data = Vec::with_capacity(pts.len() * 2);
        for p in pts {
            data.push(p.x as f32);
            data.push(p.y as f32);
        }
        crate::interop::arr_f32(&data)
    }

    pub fn bounding_box(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&bounding_box(&self.lines)).unwrap_or(JsValue::NULL)
    }

    pub fn info(&self) -> JsValue {
        let info = CurveInfo {
            name: self.name.as_deref(),
            iterations: self.iterations,
            segments: self.lines.len(),
            template_segments: self.template.len(),
            span: self.template.span(),
            net_rotation: self.template.net_rotation(),
        };
        serde_wasm_bindgen::to_value(&info).unwrap_or(JsValue::NULL)
    }

    /// Renders the current expansion; `config` is an optional JSON
    /// `RenderConfig`, missing fields take their defaults.
    pub fn to_svg_res(&self, config: Option<String>) -> JsValue {
        let cfg = match config.as_deref() {
            None | Some("") => RenderConfig::default(),
            Some(s) => match serde_json::from_str::<RenderConfig>(s) {
                Ok(c) => c,
                Err(e) => return error::invalid_config(e.to_string()),
            },
        };
        if !cfg.size.is_finite() || cfg.size <= 0.0 {
            return error::out_of_range("size", 0.0, f64::MAX, cfg.size);
        }
        error::ok(JsValue::from_str(&render_svg(&self.lines, &cfg)))
    }

    pub fn template_json(&self) -> String {
        json::template_to_json_string(self.name.as_deref(), &self.template)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Curve::new()
    }
}
