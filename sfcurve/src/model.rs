use serde::{Deserialize, Serialize};

/// One straight segment of a curve.
///
/// Inside a [`Template`](crate::template::Template) the rotation and length
/// are template-local (relative); in the output of an expansion they are
/// absolute directions (degrees) and absolute lengths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub rotation: f64,
    pub length: f64,
    #[serde(default, rename = "reverse")]
    pub mirror_reverse: bool,
    #[serde(default, rename = "flip")]
    pub mirror_flip: bool,
}

impl Line {
    pub const fn new(rotation: f64, length: f64, reverse: bool, flip: bool) -> Line {
        Line {
            rotation,
            length,
            mirror_reverse: reverse,
            mirror_flip: flip,
        }
    }

    /// Segment without mirror flags.
    pub const fn straight(rotation: f64, length: f64) -> Line {
        Line::new(rotation, length, false, false)
    }

    /// Displacement of this segment when walked from any point.
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        let r = self.rotation.to_radians();
        Vec2 {
            x: self.length * r.cos(),
            y: self.length * r.sin(),
        }
    }

    /// Same segment with its length multiplied by `k`.
    pub fn scaled(self, k: f64) -> Line {
        Line {
            length: self.length * k,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle of the vector from the +x axis, in degrees.
    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, o: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + o.x,
            y: self.y + o.y,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, o: Vec2) {
        self.x += o.x;
        self.y += o.y;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_uses_degrees() {
        let d = Line::straight(90.0, 2.0).displacement();
        assert!(d.x.abs() < 1e-12);
        assert!((d.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("00000080").map(|c| c.a), Some(128));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::rgb(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn line_deserializes_with_default_flags() {
        let l: Line = serde_json::from_str(r#"{"rotation":60,"length":1}"#).unwrap();
        assert_eq!(l, Line::straight(60.0, 1.0));
        let m: Line =
            serde_json::from_str(r#"{"rotation":0,"length":1,"reverse":true,"flip":true}"#)
                .unwrap();
        assert!(m.mirror_reverse && m.mirror_flip);
    }
}
