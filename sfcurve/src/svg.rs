//! SVG rendering of finished segment sequences.
//!
//! The walk starts at the origin; the document frames it with
//! [`bounding_box`](crate::geometry::math::bounding_box) and maps model space
//! (y up) onto SVG space (y down) with a single group transform.

use crate::geometry::math::{bounding_box, points};
use crate::geometry::tolerance::EPS_BOX;
use crate::model::{Color, Line};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One polyline through every cursor position.
    Path,
    /// One half-arrow per segment showing its direction and mirror flags.
    Glyph,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub stroke: Color,
    pub background: Option<Color>,
    /// Stroke width in output pixels.
    pub stroke_width: f64,
    pub padding: f64,
    /// Length in pixels of the longer side of the curve's bounding box.
    pub size: f64,
    pub style: RenderStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            stroke: Color::rgb(0x1f, 0x4e, 0x8c),
            background: Some(Color::rgb(0xff, 0xff, 0xff)),
            stroke_width: 1.5,
            padding: 10.0,
            size: 600.0,
            style: RenderStyle::Path,
        }
    }
}

// Unit glyph along +x; the barb sits on the +y side at the head.
const GLYPH_FORWARD: &str = "M 0 0 L 1 0 L 0.8 0.2";
const GLYPH_REVERSED: &str = "M 1 0 L 0 0 L 0.2 0.2";

fn num(v: f64) -> String {
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() { "0".to_string() } else { s.to_string() }
}

/// Path data (`M`/`L` commands) in model coordinates.
pub fn to_svg_path_data(lines: &[Line]) -> String {
    let pts = points(lines);
    let mut d = String::with_capacity(pts.len() * 16);
    for (i, p) in pts.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{} {} {}", cmd, num(p.x), num(p.y));
    }
    d
}

pub fn render_svg(lines: &[Line], cfg: &RenderConfig) -> String {
    let bb = bounding_box(lines);
    let extent = bb.width.max(bb.height);
    let ppu = if extent <= EPS_BOX { 1.0 } else { cfg.size / extent };
    let pad = cfg.padding.max(0.0);
    let w = bb.width * ppu + 2.0 * pad;
    let h = bb.height * ppu + 2.0 * pad;
    // model (x, y) -> screen (pad + (x - min_x) * ppu, pad + (max_y - y) * ppu)
    let tx = pad - bb.min_x * ppu;
    let ty = pad + bb.max_y() * ppu;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(w),
        h = num(h)
    );
    if let Some(bg) = cfg.background {
        let _ = writeln!(
            out,
            r#"<rect width="100%" height="100%" fill="{}" fill-opacity="{}"/>"#,
            bg.to_hex(),
            num(bg.opacity())
        );
    }
    let _ = writeln!(
        out,
        r#"<g transform="translate({} {}) scale({} {})" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round">"#,
        num(tx),
        num(ty),
        num(ppu),
        num(-ppu),
        cfg.stroke.to_hex(),
        num(cfg.stroke.opacity()),
        num(cfg.stroke_width)
    );
    match cfg.style {
        RenderStyle::Path => {
            let _ = writeln!(
                out,
                r#"<path d="{}" vector-effect="non-scaling-stroke"/>"#,
                to_svg_path_data(lines)
            );
        }
        RenderStyle::Glyph => write_glyphs(&mut out, lines),
    }
    out.push_str("</g>\n</svg>\n");
    out
}

fn write_glyphs(out: &mut String, lines: &[Line]) {
    let pts = points(lines);
    for (l, p) in lines.iter().zip(pts.iter()) {
        let d = if l.mirror_reverse { GLYPH_REVERSED } else { GLYPH_FORWARD };
        let sy = if l.mirror_flip { -l.length } else { l.length };
        let _ = writeln!(
            out,
            r#"<path d="{}" transform="translate({} {}) rotate({}) scale({} {})" vector-effect="non-scaling-stroke"/>"#,
            d,
            num(p.x),
            num(p.y),
            num(l.rotation),
            num(l.length),
            num(sy)
        );
    }
}
