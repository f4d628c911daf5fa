// Centralized limits on expansion output and untrusted template input (JSON)

// Expansion output
pub const WARN_SEGMENTS: usize = 1_000_000; // logged, not enforced
pub const DEFAULT_MAX_SEGMENTS: usize = 4_000_000; // cap used by CLI and wasm binding

// Template documents
pub const MAX_TEMPLATE_LINES: usize = 4_096;
pub const MAX_ITERATIONS: i32 = 64;

// Numeric bounds
pub const LENGTH_MAX: f64 = 1.0e12;
pub const ROTATION_MAX: f64 = 1.0e9;

#[inline]
pub fn in_length_bounds(l: f64) -> bool { l.is_finite() && l >= 0.0 && l <= LENGTH_MAX }

#[inline]
pub fn in_rotation_bounds(r: f64) -> bool { r.is_finite() && r.abs() <= ROTATION_MAX }
