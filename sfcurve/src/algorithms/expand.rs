//! Recursive template substitution.
//!
//! Each round replaces every segment with a scaled, rotated and possibly
//! mirrored copy of the whole template. The output has
//! `seed.len() * template.len().pow(iterations)` segments, so it grows
//! exponentially: the Koch template at 10 iterations already yields about
//! four million segments. Recursion depth equals the iteration count, which
//! is capped at [`MAX_ITERATIONS`](crate::geometry::limits::MAX_ITERATIONS)
//! even when the output stays small. `expand` only warns past
//! [`WARN_SEGMENTS`](crate::geometry::limits::WARN_SEGMENTS); callers that
//! take the iteration count from users should go through
//! [`expand_with_limit`].

use crate::error::{CurveError, Result};
use crate::geometry::limits;
use crate::model::Line;
use crate::template::{validate_lines, Template};

/// Number of segments `iterations` rounds produce, or `None` if it does not
/// fit in `usize`.
pub fn expanded_len(seed_len: usize, template_len: usize, iterations: u32) -> Option<usize> {
    if seed_len == 0 {
        return Some(0);
    }
    template_len
        .checked_pow(iterations)
        .and_then(|n| n.checked_mul(seed_len))
}

/// Expands `seed` by `iterations` rounds of substitution with `template`.
///
/// `iterations == 0` returns the seed unchanged; more than
/// `limits::MAX_ITERATIONS` rounds is `TooManyIterations`.
pub fn expand(seed: &[Line], template: &Template, iterations: i32) -> Result<Vec<Line>> {
    expand_inner(seed, template, iterations, None)
}

/// Like [`expand`], but fails with `SegmentLimitExceeded` before doing any
/// work when the output would have more than `max_segments` segments.
pub fn expand_with_limit(
    seed: &[Line],
    template: &Template,
    iterations: i32,
    max_segments: usize,
) -> Result<Vec<Line>> {
    expand_inner(seed, template, iterations, Some(max_segments))
}

/// Expands the template's own segments.
pub fn expand_template(template: &Template, iterations: i32) -> Result<Vec<Line>> {
    expand(template.lines(), template, iterations)
}

fn expand_inner(
    seed: &[Line],
    template: &Template,
    iterations: i32,
    limit: Option<usize>,
) -> Result<Vec<Line>> {
    if iterations < 0 {
        return Err(CurveError::InvalidIterationCount { got: iterations });
    }
    if iterations > limits::MAX_ITERATIONS {
        return Err(CurveError::TooManyIterations {
            got: iterations,
            max: limits::MAX_ITERATIONS,
        });
    }
    validate_lines(seed)?;
    let rounds = iterations as u32;
    let predicted = expanded_len(seed.len(), template.len(), rounds);
    match (predicted, limit) {
        (Some(n), Some(max)) if n > max => {
            return Err(CurveError::SegmentLimitExceeded { predicted: Some(n), limit: max })
        }
        (None, max) => {
            return Err(CurveError::SegmentLimitExceeded {
                predicted: None,
                limit: max.unwrap_or(usize::MAX),
            })
        }
        _ => {}
    }
    let total = predicted.unwrap_or(0);
    if total > limits::WARN_SEGMENTS {
        log::warn!(
            "expanding {} seed segments by {} rounds yields {} segments",
            seed.len(),
            rounds,
            total
        );
    }
    if rounds == 0 {
        return Ok(seed.to_vec());
    }
    let mut out = Vec::with_capacity(total);
    for s in seed {
        substitute(s, template, rounds - 1, &mut out);
    }
    log::debug!("expanded {} -> {} segments in {} rounds", seed.len(), out.len(), rounds);
    Ok(out)
}

/// Replaces `source` with a copy of `template`, recursing `depth` more levels.
fn substitute(source: &Line, template: &Template, depth: u32, out: &mut Vec<Line>) {
    let children = template.lines();
    if source.mirror_reverse {
        for t in children.iter().rev() {
            emit(source, t, template, depth, out);
        }
    } else {
        for t in children {
            emit(source, t, template, depth, out);
        }
    }
}

#[inline]
fn emit(source: &Line, t: &Line, template: &Template, depth: u32, out: &mut Vec<Line>) {
    let line = place(source, t, template);
    if depth > 0 {
        substitute(&line, template, depth - 1, out);
    } else {
        out.push(line);
    }
}

/// Places a copy of template segment `t` in the frame of `source`.
///
/// When both mirror flags are set the rotation is negated twice, so its sign
/// is unchanged while both flags still toggle.
#[inline]
fn place(source: &Line, t: &Line, template: &Template) -> Line {
    let mut line = *t;
    let scale = t.length / template.span();
    line.length = scale * source.length;
    line.rotation -= template.net_rotation();
    if source.mirror_flip {
        line.mirror_flip = !line.mirror_flip;
        line.rotation = -line.rotation;
    }
    if source.mirror_reverse {
        line.mirror_reverse = !line.mirror_reverse;
        line.rotation = -line.rotation;
    }
    line.rotation += source.rotation;
    line
}
