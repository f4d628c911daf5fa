//! Named example templates.

use crate::error::{CurveError, Result};
use crate::model::Line;
use crate::template::Template;

const NAMES: [&str; 7] = [
    "koch",
    "right_angle",
    "holiday_tree",
    "quadratic_koch",
    "levy_c",
    "sierpinski_arrowhead",
    "peano",
];

pub fn names() -> &'static [&'static str] { &NAMES }

/// Looks a template up by name. Case is ignored and `-` matches `_`.
pub fn by_name(name: &str) -> Result<Template> {
    let key = name.trim().to_ascii_lowercase().replace('-', "_");
    let lines = match key.as_str() {
        "koch" => koch(),
        "right_angle" => right_angle(),
        "holiday_tree" => holiday_tree(),
        "quadratic_koch" => quadratic_koch(),
        "levy_c" => levy_c(),
        "sierpinski_arrowhead" => sierpinski_arrowhead(),
        "peano" => peano(),
        _ => return Err(CurveError::UnknownTemplate(name.to_string())),
    };
    Template::new(lines)
}

pub fn koch() -> Vec<Line> {
    vec![
        Line::straight(0.0, 1.0),
        Line::straight(60.0, 1.0),
        Line::straight(-60.0, 1.0),
        Line::straight(0.0, 1.0),
    ]
}

/// Two unit segments at a right angle, the first traversed reversed.
pub fn right_angle() -> Vec<Line> {
    vec![Line::new(0.0, 1.0, true, false), Line::straight(90.0, 1.0)]
}

/// Koch-like spike with steep, flipped flanks. Illustrative only: the shape
/// is a stand-in, not a reference definition of the holiday-tree curve.
pub fn holiday_tree() -> Vec<Line> {
    vec![
        Line::straight(0.0, 1.0),
        Line::new(80.0, 1.0, false, true),
        Line::new(-80.0, 1.0, false, true),
        Line::straight(0.0, 1.0),
    ]
}

pub fn quadratic_koch() -> Vec<Line> {
    vec![
        Line::straight(0.0, 1.0),
        Line::straight(90.0, 1.0),
        Line::straight(0.0, 1.0),
        Line::straight(-90.0, 1.0),
        Line::straight(-90.0, 1.0),
        Line::straight(0.0, 1.0),
        Line::straight(90.0, 1.0),
        Line::straight(0.0, 1.0),
    ]
}

pub fn levy_c() -> Vec<Line> {
    vec![Line::straight(45.0, 1.0), Line::straight(-45.0, 1.0)]
}

pub fn sierpinski_arrowhead() -> Vec<Line> {
    vec![
        Line::new(60.0, 1.0, false, true),
        Line::straight(0.0, 1.0),
        Line::new(-60.0, 1.0, false, true),
    ]
}

pub fn peano() -> Vec<Line> {
    [0.0, 90.0, 0.0, -90.0, 180.0, -90.0, 0.0, 90.0, 0.0]
        .into_iter()
        .map(|r| Line::straight(r, 1.0))
        .collect()
}
