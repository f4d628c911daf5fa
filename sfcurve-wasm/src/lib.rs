use sfcurve::geometry::limits;
use sfcurve::{expand_with_limit, CurveError, Line, Template};
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// A template, its seed and the expansion at the current iteration count.
#[wasm_bindgen]
pub struct Curve {
    pub(crate) name: Option<String>,
    pub(crate) template: Template,
    pub(crate) seed: Vec<Line>,
    pub(crate) iterations: i32,
    pub(crate) max_segments: usize,
    pub(crate) lines: Vec<Line>,
}

impl Curve {
    pub fn rs_new(name: Option<String>, template: Template) -> Curve {
        let seed = template.lines().to_vec();
        Curve { name, template, lines: seed.clone(), seed, iterations: 0, max_segments: limits::DEFAULT_MAX_SEGMENTS }
    }

    /// Re-expands at `iterations`; leaves the curve untouched on error.
    pub fn rs_set_iterations(&mut self, iterations: i32) -> Result<(), CurveError> {
        let lines = expand_with_limit(&self.seed, &self.template, iterations, self.max_segments)?;
        self.iterations = iterations;
        self.lines = lines;
        Ok(())
    }

    pub fn rs_lines(&self) -> &[Line] { &self.lines }
}
