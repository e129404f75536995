use thiserror::Error;

/// Validation failures rejected at the solver's entry point. Zero container
/// dimensions and a zero count are not errors; they produce a degenerate
/// layout instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid aspect ratio {input:?}: {reason}")]
    InvalidAspectRatio { input: String, reason: String },
    #[error("container {axis} must be a non-negative finite number, got {value}")]
    NegativeDimension { axis: &'static str, value: f64 },
    #[error("gap must be a non-negative finite number, got {value}")]
    NegativeGap { value: f64 },
}

impl LayoutError {
    pub(crate) fn invalid_aspect_ratio(
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAspectRatio {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
