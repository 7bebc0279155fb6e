//! Surface rendering.
//!
//! A thin wrapper over `plotters`: threshold on a log-scaled x-axis, score on
//! a linear y-axis, drawn as a line with point markers and written to a PNG
//! file. No algorithmic content lives here.

use std::path::PathBuf;

use bon::Builder;
use plotters::prelude::*;

use crate::error::SurfaceError;
use crate::surface::Surface;

/// Rendering configuration.
#[derive(Debug, Clone, Builder)]
pub struct PlotConfig {
    /// Output PNG path.
    #[builder(into)]
    pub save_file: PathBuf,

    /// Plot title.
    #[builder(into, default = "RES".to_string())]
    pub title: String,

    /// Image width in pixels.
    #[builder(default = 800)]
    pub width: u32,

    /// Image height in pixels.
    #[builder(default = 500)]
    pub height: u32,
}

/// Render a computed surface to `config.save_file`.
pub fn render_surface(surface: &Surface, config: &PlotConfig) -> Result<(), SurfaceError> {
    if surface.is_empty() {
        return Err(SurfaceError::NoSurfaceComputed);
    }

    let x_min = surface.points()[0].threshold;
    let x_max = surface.points()[surface.len() - 1].threshold;
    let y_max = surface
        .scores()
        .fold(1.0f64, f64::max);

    let root =
        BitMapBackend::new(&config.save_file, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..y_max * 1.05)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Top x% threshold")
        .y_desc("Enrichment score")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            surface.points().iter().map(|p| (p.threshold, p.score)),
            &BLUE,
        ))
        .map_err(render_err)?;
    chart
        .draw_series(
            surface
                .points()
                .iter()
                .map(|p| Circle::new((p.threshold, p.score), 3, BLUE.filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::fmt::Display>(err: E) -> SurfaceError {
    SurfaceError::Render(err.to_string())
}
