//! Error types for template construction and curve expansion.

#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("iteration count must be non-negative, got {got}")]
    InvalidIterationCount { got: i32 },

    #[error("iteration count {got} exceeds the maximum of {max}")]
    TooManyIterations { got: i32, max: i32 },

    #[error("invalid template: {reason}")]
    InvalidTemplate { reason: String },

    #[error("invalid segment at index {index}: {reason}")]
    InvalidSegment { index: usize, reason: String },

    #[error("expansion would produce {} segments, limit is {limit}", fmt_predicted(.predicted))]
    SegmentLimitExceeded { predicted: Option<usize>, limit: usize },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("template document error: {0}")]
    Json(String),
}

fn fmt_predicted(p: &Option<usize>) -> String {
    match p {
        Some(n) => n.to_string(),
        None => "more than usize::MAX".to_string(),
    }
}

impl From<serde_json::Error> for CurveError {
    fn from(e: serde_json::Error) -> Self {
        CurveError::Json(e.to_string())
    }
}

impl CurveError {
    /// Stable machine-readable code, used by host bindings.
    pub fn code(&self) -> &'static str {
        match self {
            CurveError::InvalidIterationCount { .. } => "invalid_iteration_count",
            CurveError::TooManyIterations { .. } => "too_many_iterations",
            CurveError::InvalidTemplate { .. } => "invalid_template",
            CurveError::InvalidSegment { .. } => "invalid_segment",
            CurveError::SegmentLimitExceeded { .. } => "too_many_segments",
            CurveError::UnknownTemplate(_) => "unknown_template",
            CurveError::Json(_) => "invalid_json",
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
