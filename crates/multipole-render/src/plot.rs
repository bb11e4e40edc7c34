// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Plot
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rasterized field-line plot.
//!
//! Draws the filled body disk and, for every traced line, its four
//! mirror-quadrant polylines. Masked samples split a polyline into
//! separate runs so gaps stay gaps. Axes are symmetric and sized to the
//! drawn extent; the title carries the active pole name.

use multipole_core::trace::build_geometry;
use multipole_types::config::RenderConfig;
use multipole_types::error::{TracerError, TracerResult};
use multipole_types::state::{split_segments, PlotGeometry, PoleOrder};
use plotters::prelude::*;

use crate::palette::{body_fill, line_color};

/// Margin factor applied to the drawn extent when sizing the axes.
const EXTENT_MARGIN: f64 = 1.05;

/// A finished plot: tightly packed RGB8 rows, no padding.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RenderedPlot {
    /// RGB triple at pixel (x, y), row-major from the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let offset = ((y * self.width + x) * 3) as usize;
        (
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        )
    }

    /// Whether any pixel matches the given RGB triple exactly.
    pub fn contains_color(&self, rgb: (u8, u8, u8)) -> bool {
        self.pixels
            .chunks_exact(3)
            .any(|c| (c[0], c[1], c[2]) == rgb)
    }
}

fn draw_error<E: std::fmt::Display>(err: E) -> TracerError {
    TracerError::Render(err.to_string())
}

/// Validate, trace and rasterize in one call.
///
/// This is the whole render contract: pole order, starting colatitudes
/// in degrees, configuration in; finished canvas or a validation error
/// out. Validation failures abort before anything is drawn.
pub fn render_field_lines(
    order: PoleOrder,
    theta0_deg: &[f64],
    config: &RenderConfig,
) -> TracerResult<RenderedPlot> {
    let geometry = build_geometry(order, config, theta0_deg)?;
    render(&geometry, config)
}

/// Rasterize already-built geometry into an RGB buffer.
pub fn render(geometry: &PlotGeometry, config: &RenderConfig) -> TracerResult<RenderedPlot> {
    config.validate()?;

    let (width, height) = (config.width, config.height);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let extent = geometry.extent() * EXTENT_MARGIN;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} field lines", geometry.order.name()),
                ("sans-serif", 40),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-extent..extent, -extent..extent)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_desc("Earth radii")
            .y_desc("Earth radii")
            .x_labels(10)
            .draw()
            .map_err(draw_error)?;

        // Body disk under the lines
        chart
            .draw_series(std::iter::once(Polygon::new(
                geometry.body.clone(),
                body_fill().filled(),
            )))
            .map_err(draw_error)?;

        for line in &geometry.lines {
            let color = line_color(line.color_index);
            for quadrant in line.quadrants() {
                for segment in split_segments(&quadrant) {
                    if segment.len() < 2 {
                        continue;
                    }
                    chart
                        .draw_series(LineSeries::new(segment, &color))
                        .map_err(draw_error)?;
                }
            }
        }

        root.present().map_err(draw_error)?;
    }

    Ok(RenderedPlot {
        width,
        height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use multipole_types::constants::BODY_FILL;

    fn test_config() -> RenderConfig {
        RenderConfig {
            width: 400,
            height: 400,
            line_samples: 200,
            outline_samples: 200,
            reference_radius: 1.0,
        }
    }

    #[test]
    fn test_render_buffer_dimensions() {
        let plot = render_field_lines(PoleOrder::Dipole, &[30.0], &test_config()).unwrap();
        assert_eq!(plot.width, 400);
        assert_eq!(plot.height, 400);
        assert_eq!(plot.pixels.len(), 400 * 400 * 3);
    }

    #[test]
    fn test_render_draws_body_and_lines() {
        let plot =
            render_field_lines(PoleOrder::Dipole, &[30.0, 40.0], &test_config()).unwrap();
        // Filled disk in light grey
        assert!(plot.contains_color(BODY_FILL), "body fill missing");
        // First line red, second blue
        assert!(plot.contains_color((255, 0, 0)), "first line color missing");
        assert!(plot.contains_color((0, 0, 255)), "second line color missing");
        // Background still white somewhere
        assert!(plot.contains_color((255, 255, 255)));
    }

    #[test]
    fn test_validation_aborts_render() {
        let err =
            render_field_lines(PoleOrder::Dipole, &[5.0, 10.0, -3.0], &test_config()).unwrap_err();
        match err {
            TracerError::ColatitudeOutOfRange { values } => assert_eq!(values, vec![-3.0]),
            other => panic!("expected ColatitudeOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_line_renders_without_lines() {
        // theta_0 = 0 drives the dipole normalization to infinity: every
        // sample is non-finite, the whole line masks away, and only the
        // body disk remains.
        let plot = render_field_lines(PoleOrder::Dipole, &[0.0], &test_config()).unwrap();
        assert!(plot.contains_color(BODY_FILL));
        assert!(
            !plot.contains_color((255, 0, 0)),
            "fully masked line still produced pixels"
        );
    }

    #[test]
    fn test_render_deterministic() {
        let a = render_field_lines(PoleOrder::Octupole, &[10.0, 25.0], &test_config()).unwrap();
        let b = render_field_lines(PoleOrder::Octupole, &[10.0, 25.0], &test_config()).unwrap();
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn test_titles_follow_pole_order() {
        // Geometry carries the order through to the caption; the four
        // renders must all succeed with their own titles.
        for order in PoleOrder::all() {
            let plot = render_field_lines(order, &[20.0], &test_config());
            assert!(plot.is_ok(), "{} render failed", order.name());
        }
    }
}
