//! Surface computation parameters with builder pattern.
//!
//! [`SurfaceParams`] bundles the knobs of the threshold sweep and uses the
//! `bon` crate for builder generation. Validation happens once, when a
//! [`ThresholdGrid`](crate::ThresholdGrid) or a handle is constructed from
//! the parameters.
//!
//! # Example
//!
//! ```
//! use resurf::{GroupWeighting, SurfaceParams};
//!
//! // All defaults: percent_min = -3, samples = 30, equal group weighting
//! let params = SurfaceParams::default();
//!
//! // Customize the sweep
//! let params = SurfaceParams::builder()
//!     .percent_min(-2.0)
//!     .samples(50)
//!     .weighting(GroupWeighting::BySize)
//!     .build();
//! assert!(params.validate().is_ok());
//! ```

use bon::Builder;

use crate::error::SurfaceError;

// =============================================================================
// GroupWeighting
// =============================================================================

/// How per-group curves are combined in stratified mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupWeighting {
    /// Unweighted arithmetic mean: every group contributes equally regardless
    /// of its size. Prevents large strata from dominating the curve.
    #[default]
    Equal,
    /// Mean weighted by group observation count.
    BySize,
}

// =============================================================================
// SurfaceParams
// =============================================================================

/// Parameters of the enrichment sweep.
///
/// `percent_min` is the exponent of the smallest threshold: the grid spans
/// `[10^percent_min, 100]` percent, log-uniformly, with `samples` points.
#[derive(Debug, Clone, Builder)]
pub struct SurfaceParams {
    /// Exponent of the lower threshold bound, `10^percent_min` percent.
    /// Must be below 2 so the lower bound stays under 100%.
    #[builder(default = -3.0)]
    pub percent_min: f64,

    /// Number of thresholds in the grid. Must be at least 2.
    #[builder(default = 30)]
    pub samples: usize,

    /// Cross-group aggregation policy for stratified computation.
    #[builder(default)]
    pub weighting: GroupWeighting,
}

impl SurfaceParams {
    /// Validate the parameter combination.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.samples < 2 {
            return Err(SurfaceError::invalid(format!(
                "samples must be at least 2, got {}",
                self.samples
            )));
        }
        if !self.percent_min.is_finite() {
            return Err(SurfaceError::invalid(format!(
                "percent_min must be finite, got {}",
                self.percent_min
            )));
        }
        if self.percent_min >= 2.0 {
            return Err(SurfaceError::invalid(format!(
                "percent_min must be < 2 so the lower bound stays below 100%, got {}",
                self.percent_min
            )));
        }
        Ok(())
    }
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = SurfaceParams::default();
        assert_eq!(params.percent_min, -3.0);
        assert_eq!(params.samples, 30);
        assert_eq!(params.weighting, GroupWeighting::Equal);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn single_sample_rejected() {
        let params = SurfaceParams::builder().samples(1).build();
        assert!(matches!(
            params.validate(),
            Err(SurfaceError::InvalidParameter(_))
        ));
    }

    #[test]
    fn percent_min_above_upper_bound_rejected() {
        let params = SurfaceParams::builder().percent_min(2.0).build();
        assert!(matches!(
            params.validate(),
            Err(SurfaceError::InvalidParameter(_))
        ));
    }

    #[test]
    fn non_finite_percent_min_rejected() {
        let params = SurfaceParams::builder().percent_min(f64::NAN).build();
        assert!(params.validate().is_err());
    }
}
