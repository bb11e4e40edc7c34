// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Line Tracing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field-line sampling, masking and geometry assembly.
//!
//! A line is sampled on an even colatitude grid from theta_0 to the
//! equator, converted to Cartesian coordinates (x = r·sin th,
//! y = r·cos th), and masked wherever the radius falls below the body
//! surface or comes out non-finite from a degenerate theta_0. The
//! renderer draws the mirror images; only the first quadrant is traced.

use multipole_types::config::RenderConfig;
use multipole_types::constants::LINE_PALETTE;
use multipole_types::error::TracerResult;
use multipole_types::state::{FieldLine, PlotGeometry, PoleOrder};
use ndarray::Array1;

use crate::input::validate_colatitudes;
use crate::profiles;

/// Relative slack on the sub-surface mask. The anchor sample computes
/// r0 as (r0/P(theta_0))·P(theta_0), which can land one ulp below r0;
/// a strict `r < r0` test would mask the surface crossing itself.
const MASK_REL_TOL: f64 = 1e-12;

/// Even colatitude grid from theta_0 (degrees) to the equator, in radians.
pub fn angular_grid(theta0_deg: f64, samples: usize) -> Array1<f64> {
    Array1::linspace(theta0_deg.to_radians(), 90f64.to_radians(), samples)
}

/// Body outline: `samples` points around the full circle at radius r0.
pub fn body_outline(r0: f64, samples: usize) -> Vec<(f64, f64)> {
    let the = Array1::linspace(0.0, 360f64.to_radians(), samples);
    the.iter().map(|&t| (r0 * t.sin(), r0 * t.cos())).collect()
}

/// Trace one field line in the first quadrant.
///
/// Samples with radius < r0 are inside the body and masked; so are
/// non-finite radii from degenerate starting colatitudes.
pub fn trace_field_line(
    order: PoleOrder,
    r0: f64,
    theta0_deg: f64,
    samples: usize,
    color_index: usize,
) -> FieldLine {
    let theta_0 = theta0_deg.to_radians();
    let th = angular_grid(theta0_deg, samples);
    let rad = profiles::radius_profile(order, r0, theta_0, &th);

    let points = th
        .iter()
        .zip(rad.iter())
        .map(|(&t, &r)| {
            if r.is_finite() && r >= r0 * (1.0 - MASK_REL_TOL) {
                Some((r * t.sin(), r * t.cos()))
            } else {
                None
            }
        })
        .collect();

    FieldLine {
        order,
        theta0_deg,
        color_index,
        points,
    }
}

/// Build the complete geometry for one render call.
///
/// Validates the configuration and every starting colatitude before any
/// tracing happens; a single out-of-range value aborts the build. Lines
/// keep their input order and take palette slots cyclically.
pub fn build_geometry(
    order: PoleOrder,
    config: &RenderConfig,
    theta0_deg: &[f64],
) -> TracerResult<PlotGeometry> {
    config.validate()?;
    validate_colatitudes(theta0_deg)?;

    let r0 = config.reference_radius;
    let body = body_outline(r0, config.outline_samples);
    let lines = theta0_deg
        .iter()
        .enumerate()
        .map(|(index, &theta0)| {
            trace_field_line(
                order,
                r0,
                theta0,
                config.line_samples,
                index % LINE_PALETTE.len(),
            )
        })
        .collect();

    Ok(PlotGeometry {
        order,
        reference_radius: r0,
        body,
        lines,
    })
}
