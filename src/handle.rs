//! Stateful convenience handle.
//!
//! The pure entry points in [`engine`](crate::engine) return the surface as a
//! value; this wrapper restores the configure-then-compute-then-plot
//! ergonomics for callers that want them. It holds at most one current
//! surface, replaced on every successful compute.

use std::fmt::Debug;
use std::path::PathBuf;

use ndarray::ArrayView1;

use crate::engine::{compute_stratified, compute_surface};
use crate::error::SurfaceError;
use crate::params::SurfaceParams;
use crate::plot::{render_surface, PlotConfig};
use crate::surface::Surface;

/// A configured enrichment-surface computation with its latest result.
#[derive(Debug, Clone)]
pub struct RegressionEnrichmentSurface {
    params: SurfaceParams,
    surface: Option<Surface>,
}

impl RegressionEnrichmentSurface {
    /// Construct a handle, validating the parameters up front.
    pub fn new(params: SurfaceParams) -> Result<Self, SurfaceError> {
        params.validate()?;
        Ok(Self { params, surface: None })
    }

    /// Compute the pooled (unstratified) surface and store it on the handle.
    pub fn compute(
        &mut self,
        true_values: ArrayView1<'_, f64>,
        predicted_values: ArrayView1<'_, f64>,
    ) -> Result<&Surface, SurfaceError> {
        let surface = compute_surface(true_values, predicted_values, &self.params)?;
        Ok(self.surface.insert(surface))
    }

    /// Compute the group-averaged surface and store it on the handle.
    pub fn compute_stratified<L>(
        &mut self,
        true_values: ArrayView1<'_, f64>,
        predicted_values: ArrayView1<'_, f64>,
        group_labels: &[L],
    ) -> Result<&Surface, SurfaceError>
    where
        L: Ord + Debug + Sync,
    {
        let surface =
            compute_stratified(true_values, predicted_values, group_labels, &self.params)?;
        Ok(self.surface.insert(surface))
    }

    /// The most recently computed surface, if any.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Render the most recently computed surface to a PNG file.
    pub fn plot(
        &self,
        save_file: impl Into<PathBuf>,
        title: impl Into<String>,
    ) -> Result<(), SurfaceError> {
        let surface = self.surface.as_ref().ok_or(SurfaceError::NoSurfaceComputed)?;
        let config = PlotConfig::builder()
            .save_file(save_file.into())
            .title(title.into())
            .build();
        render_surface(surface, &config)
    }
}

impl Default for RegressionEnrichmentSurface {
    fn default() -> Self {
        Self { params: SurfaceParams::default(), surface: None }
    }
}

// =============================================================================
// Tests
// =============================================================================
