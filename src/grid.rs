//! Log-spaced percentile threshold grid.
//!
//! Enrichment at the 0.01%-top tier and at the 50%-top tier are both
//! meaningful but differ by orders of magnitude in item count, so the sweep
//! is spaced logarithmically; linear spacing would starve the top-performer
//! region of resolution.

use ndarray::Array1;

use crate::error::SurfaceError;
use crate::params::SurfaceParams;

/// Ordered, strictly increasing thresholds in `(0, 100]` percent.
///
/// Built fresh per computation call and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ThresholdGrid {
    thresholds: Vec<f64>,
}

impl ThresholdGrid {
    /// Build `samples` thresholds log-uniformly spaced over
    /// `[10^percent_min, 100]`, both endpoints included.
    pub fn new(percent_min: f64, samples: usize) -> Result<Self, SurfaceError> {
        let params = SurfaceParams::builder()
            .percent_min(percent_min)
            .samples(samples)
            .build();
        Self::from_params(&params)
    }

    /// Build a grid from validated sweep parameters.
    pub fn from_params(params: &SurfaceParams) -> Result<Self, SurfaceError> {
        params.validate()?;

        // 10^percent_min .. 10^2 == 100%.
        let thresholds = Array1::logspace(10.0, params.percent_min, 2.0, params.samples).to_vec();

        // logspace with start < end and samples >= 2 is strictly increasing
        // and positive; guard against degenerate float spacing anyway.
        let lower = thresholds[0];
        if lower <= 0.0 {
            return Err(SurfaceError::invalid(format!(
                "threshold lower bound 10^{} underflows to {lower}",
                params.percent_min
            )));
        }
        if thresholds.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SurfaceError::invalid(format!(
                "grid of {} samples over [10^{}, 100] collapses under float spacing",
                params.samples, params.percent_min
            )));
        }

        Ok(Self { thresholds })
    }

    /// Thresholds in ascending order, in percent.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of thresholds in the grid.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Top-item count at threshold `p` for a stratum of `n` observations:
    /// `ceil(p/100 * n)` clamped to `[1, n]`.
    pub fn top_k(p: f64, n: usize) -> usize {
        debug_assert!(n > 0);
        let k = (p / 100.0 * n as f64).ceil() as usize;
        k.clamp(1, n)
    }
}

// =============================================================================
// Tests
// =============================================================================
