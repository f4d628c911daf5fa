// Centralized tolerances for curve geometry

pub const EPS_SPAN: f64 = 1e-9; // span / total segment length at or below this is degenerate
pub const EPS_BOX: f64 = 1e-9; // bounding box extent treated as flat

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }

/// Normalizes an angle in degrees to (-180, 180].
#[inline]
pub fn wrap_deg(a: f64) -> f64 {
    let r = a.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}
