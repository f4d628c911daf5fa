use js_sys::Reflect;
use sfcurve_wasm::Curve;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

#[wasm_bindgen_test]
fn iteration_errors_leave_curve_unchanged() {
    let mut c = Curve::new();
    assert!(is_err(&c.set_iterations_res(-1), "out_of_range"));
    assert!(is_err(&c.set_iterations_res(1000), "out_of_range"));
    assert_eq!(c.iterations(), 0);
    c.set_max_segments(100);
    assert!(is_err(&c.set_iterations_res(4), "too_many_segments"));
    assert_eq!(c.iterations(), 0);
    assert_eq!(c.segment_count(), 4);
}

#[wasm_bindgen_test]
fn template_errors_are_typed() {
    assert!(is_err(&Curve::from_name_res("hilbert"), "unknown_template"));
    assert!(is_err(&Curve::from_json_res("{"), "invalid_json"));
    let degenerate = r#"{"version":1,"lines":[{"rotation":0,"length":1},{"rotation":180,"length":1}]}"#;
    assert!(is_err(&Curve::from_json_res(degenerate), "invalid_template"));
    let negative = r#"{"version":1,"lines":[{"rotation":0,"length":-1}]}"#;
    assert!(is_err(&Curve::from_json_res(negative), "invalid_segment"));
}

#[wasm_bindgen_test]
fn render_config_errors() {
    let c = Curve::new();
    assert!(is_err(&c.to_svg_res(Some("{\"style\":\"dots\"}".into())), "invalid_config"));
    assert!(is_err(&c.to_svg_res(Some("{\"size\":-5}".into())), "out_of_range"));
}
