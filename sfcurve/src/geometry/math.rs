//! Pure reductions over a sequence of segments walked head to tail from the
//! origin.

use crate::model::{Line, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned box enclosing every cursor position of a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn max_x(&self) -> f64 { self.min_x + self.width }
    pub fn max_y(&self) -> f64 { self.min_y + self.height }
}

/// Where the walk ends: the sum of every segment's displacement.
pub fn endpoint(lines: &[Line]) -> Vec2 {
    lines
        .iter()
        .fold(Vec2::ZERO, |acc, l| acc + l.displacement())
}

pub fn bounding_box(lines: &[Line]) -> BoundingBox {
    // (cursor, min_x, min_y, max_x, max_y); the origin is always a candidate
    let init = (Vec2::ZERO, 0.0f64, 0.0f64, 0.0f64, 0.0f64);
    let (_, min_x, min_y, max_x, max_y) =
        lines.iter().fold(init, |(mut p, min_x, min_y, max_x, max_y), l| {
            p += l.displacement();
            (p, min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        });
    BoundingBox {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Cursor positions visited by the walk, origin first (`lines.len() + 1` points).
pub fn points(lines: &[Line]) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(lines.len() + 1);
    let mut p = Vec2::ZERO;
    out.push(p);
    for l in lines {
        p += l.displacement();
        out.push(p);
    }
    out
}

pub fn total_length(lines: &[Line]) -> f64 {
    lines.iter().map(|l| l.length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_walk() {
        assert_eq!(endpoint(&[]), Vec2::ZERO);
        assert_eq!(bounding_box(&[]), BoundingBox::default());
        assert_eq!(points(&[]), vec![Vec2::ZERO]);
    }

    #[test]
    fn square_walk_box() {
        let lines = [
            Line::straight(0.0, 2.0),
            Line::straight(90.0, 1.0),
            Line::straight(180.0, 2.0),
            Line::straight(270.0, 1.0),
        ];
        let e = endpoint(&lines);
        assert!(e.norm() < 1e-9);
        let b = bounding_box(&lines);
        assert!(b.min_x.abs() < 1e-9 && b.min_y.abs() < 1e-9);
        assert!((b.width - 2.0).abs() < 1e-9);
        assert!((b.height - 1.0).abs() < 1e-9);
        assert!((total_length(&lines) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn box_includes_origin_when_walk_moves_away() {
        let lines = [Line::straight(180.0, 3.0), Line::straight(-90.0, 2.0)];
        let b = bounding_box(&lines);
        assert!((b.min_x + 3.0).abs() < 1e-9);
        assert!((b.min_y + 2.0).abs() < 1e-9);
        assert!((b.max_x()).abs() < 1e-9);
        assert!((b.max_y()).abs() < 1e-9);
    }

    #[test]
    fn points_follow_cursor() {
        let pts = points(&[Line::straight(0.0, 1.0), Line::straight(90.0, 1.0)]);
        assert_eq!(pts.len(), 3);
        assert!((pts[2].x - 1.0).abs() < 1e-9);
        assert!((pts[2].y - 1.0).abs() < 1e-9);
    }
}
