use sfcurve::svg::to_svg_path_data;
use sfcurve::{expand_template, library, render_svg, Color, Line, RenderConfig, RenderStyle};

fn attr<'a>(svg: &'a str, name: &str) -> &'a str {
    let key = format!("{}=\"", name);
    let start = svg.find(&key).unwrap() + key.len();
    let end = start + svg[start..].find('"').unwrap();
    &svg[start..end]
}

#[test]
fn document_is_framed_by_bounding_box() {
    // 2 x 1 box, longer side scaled to 200 px, 10 px padding
    let lines = [Line::straight(0.0, 2.0), Line::straight(90.0, 1.0)];
    let cfg = RenderConfig { size: 200.0, padding: 10.0, ..RenderConfig::default() };
    let svg = render_svg(&lines, &cfg);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(attr(&svg, "width"), "220");
    assert_eq!(attr(&svg, "height"), "120");
    assert_eq!(attr(&svg, "viewBox"), "0 0 220 120");
    assert!(svg.contains("translate(10 110) scale(100 -100)"));
}

#[test]
fn stroke_and_background_come_from_config() {
    let cfg = RenderConfig {
        stroke: Color::rgb(0xaa, 0x00, 0x11),
        background: None,
        ..RenderConfig::default()
    };
    let svg = render_svg(&[Line::straight(0.0, 1.0)], &cfg);
    assert!(svg.contains("stroke=\"#aa0011\""));
    assert!(!svg.contains("<rect"));

    let with_bg = render_svg(&[Line::straight(0.0, 1.0)], &RenderConfig::default());
    assert!(with_bg.contains("<rect"));
}

#[test]
fn path_style_emits_one_path() {
    let t = library::by_name("koch").unwrap();
    let lines = expand_template(&t, 2).unwrap();
    let svg = render_svg(&lines, &RenderConfig::default());
    assert_eq!(svg.matches("<path").count(), 1);
    let d = to_svg_path_data(&lines);
    assert_eq!(d.matches(" L ").count(), lines.len());
    assert!(d.starts_with("M 0 0"));
}

#[test]
fn glyph_style_emits_one_glyph_per_segment() {
    let t = library::by_name("right_angle").unwrap();
    let lines = expand_template(&t, 3).unwrap();
    let cfg = RenderConfig { style: RenderStyle::Glyph, ..RenderConfig::default() };
    let svg = render_svg(&lines, &cfg);
    assert_eq!(svg.matches("<path").count(), lines.len());
}

#[test]
fn empty_curve_still_renders() {
    let svg = render_svg(&[], &RenderConfig::default());
    assert!(svg.contains("<path d=\"M 0 0\""));
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: RenderConfig = serde_json::from_str(r#"{"style":"glyph","size":100}"#).unwrap();
    assert_eq!(cfg.style, RenderStyle::Glyph);
    assert_eq!(cfg.size, 100.0);
    assert_eq!(cfg.stroke, RenderConfig::default().stroke);
}
