//! Error types for surface computation and rendering.

/// Errors that can occur while computing or rendering an enrichment surface.
///
/// All errors are raised synchronously at the offending call; the computation
/// is pure, so there is never partial state to clean up or retry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SurfaceError {
    /// Bad `samples` / `percent_min` combination.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input arrays are not positionally aligned.
    #[error("shape mismatch: {what} has length {got}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// At least one observation is required.
    #[error("empty input: at least one (true, predicted) observation is required")]
    EmptyInput,

    /// A stratification group resolved to zero observations.
    #[error("empty group: stratum {label} has no observations")]
    EmptyGroup { label: String },

    /// `plot` was requested before any successful `compute`.
    #[error("no surface computed: call compute() before plot()")]
    NoSurfaceComputed,

    /// The plotting backend failed to produce the output file.
    #[error("failed to render plot: {0}")]
    Render(String),
}

impl SurfaceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
