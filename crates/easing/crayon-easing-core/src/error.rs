//! Error types for easing selection and curve construction.

/// Errors raised while building curves or resolving easing names.
///
/// Sampling itself never fails: once a curve is constructed every
/// evaluation returns a number.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EasingError {
    /// Control-point string is not exactly four finite numbers.
    #[error("invalid cubic-bezier spec {input:?}: {reason}")]
    InvalidCurveSpec { input: String, reason: String },

    /// Easing name does not match any known member.
    #[error("unknown easing: {name}")]
    UnknownEasing { name: String },

    /// Solver or tween settings outside their usable range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl EasingError {
    pub(crate) fn curve_spec(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCurveSpec {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCurveSpec { .. } => "curve",
            Self::UnknownEasing { .. } => "easing",
            Self::InvalidConfig { .. } => "config",
        }
    }
}
