use crate::error::{CurveError, Result};
use crate::geometry::limits;
use crate::geometry::math;
use crate::geometry::tolerance::{near_zero, EPS_SPAN};
use crate::model::{Line, Vec2};

/// A substitution rule: an ordered list of template-local segments and the
/// net geometry of walking them once.
///
/// `endpoint`, `span` and `net_rotation` are derived in [`Template::new`] and
/// never recomputed; the fields are private so they cannot drift from `lines`.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    lines: Vec<Line>,
    endpoint: Vec2,
    span: f64,
    net_rotation: f64,
}

impl Template {
    /// Builds a template, rejecting invalid segments and degenerate
    /// templates whose net displacement is zero.
    pub fn new(lines: Vec<Line>) -> Result<Template> {
        if lines.is_empty() {
            return Err(CurveError::InvalidTemplate {
                reason: "template has no segments".into(),
            });
        }
        validate_lines(&lines)?;
        let endpoint = math::endpoint(&lines);
        let span = endpoint.norm();
        // relative to the template's own scale
        let scale = math::total_length(&lines);
        if near_zero(span, EPS_SPAN * scale) || !span.is_finite() {
            return Err(CurveError::InvalidTemplate {
                reason: format!(
                    "net span is zero (span {:.3e} over total segment length {:.3e})",
                    span, scale
                ),
            });
        }
        let net_rotation = endpoint.angle_deg();
        log::debug!(
            "template: {} segments, span {:.6}, net rotation {:.4}°",
            lines.len(),
            span,
            net_rotation
        );
        Ok(Template {
            lines,
            endpoint,
            span,
            net_rotation,
        })
    }

    pub fn lines(&self) -> &[Line] { &self.lines }
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
    pub fn endpoint(&self) -> Vec2 { self.endpoint }
    pub fn span(&self) -> f64 { self.span }
    pub fn net_rotation(&self) -> f64 { self.net_rotation }
}

/// Rejects segments with a negative or non-finite length or a non-finite
/// rotation.
pub fn validate_lines(lines: &[Line]) -> Result<()> {
    for (index, l) in lines.iter().enumerate() {
        if !limits::in_length_bounds(l.length) {
            return Err(CurveError::InvalidSegment {
                index,
                reason: format!("length {} must be finite and non-negative", l.length),
            });
        }
        if !limits::in_rotation_bounds(l.rotation) {
            return Err(CurveError::InvalidSegment {
                index,
                reason: format!("rotation {} must be finite", l.rotation),
            });
        }
    }
    Ok(())
}
