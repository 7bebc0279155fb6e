//! resurf: regression enrichment surfaces for Rust.
//!
//! A diagnostic for regression models where ranking quality matters more
//! than absolute error: across a log-spaced sweep of "top X%" percentile
//! thresholds, each threshold's score compares the predicted top-k selection
//! against the true top-k selection, normalized by the overlap a random
//! ranking would achieve.
//!
//! # Key Types
//!
//! - [`compute_surface`] / [`compute_stratified`] - Pure computation entry points
//! - [`Surface`] / [`EnrichmentPoint`] - The computed threshold-vs-score curve
//! - [`SurfaceParams`] - Sweep configuration builder
//! - [`RegressionEnrichmentSurface`] - Stateful compute/plot convenience handle
//! - [`render_surface`] / [`PlotConfig`] - PNG rendering of a surface
//!
//! # Example
//!
//! ```
//! use ndarray::aview1;
//! use resurf::{compute_surface, SurfaceParams};
//!
//! let trues = [0.1, 0.9, 0.3, 0.7, 0.5];
//! let preds = [0.2, 0.8, 0.4, 0.6, 0.5];
//!
//! let params = SurfaceParams::builder().percent_min(-2.0).samples(10).build();
//! let surface = compute_surface(aview1(&trues), aview1(&preds), &params).unwrap();
//! assert_eq!(surface.len(), 10);
//! ```
//!
//! # Stratification
//!
//! With group labels, one curve is computed per group (each group's `k`
//! derives from its own size) and the curves are averaged per threshold,
//! equal-weighted by default so large strata cannot dominate.

pub mod engine;
pub mod error;
pub mod grid;
pub mod handle;
pub mod params;
pub mod plot;
pub mod surface;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use engine::{compute_stratified, compute_surface};
pub use error::SurfaceError;
pub use grid::ThresholdGrid;
pub use handle::RegressionEnrichmentSurface;
pub use params::{GroupWeighting, SurfaceParams};
pub use plot::{render_surface, PlotConfig};
pub use surface::{EnrichmentPoint, Surface};
