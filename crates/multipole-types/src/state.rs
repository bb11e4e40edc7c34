// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Domain types for traced field-line geometry.
//!
//! All geometry is built once per render call and never mutated after
//! construction. Masked samples (radius below the body surface, or
//! non-finite from a degenerate starting colatitude) are `None` and are
//! absent from the plot rather than drawn at zero or clipped.

use serde::{Deserialize, Serialize};

/// Axisymmetric multipole order of the field expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoleOrder {
    Dipole,
    Quadrupole,
    Octupole,
    Hexadecapole,
}

impl PoleOrder {
    /// Expansion degree n = 1..4.
    pub fn degree(&self) -> u32 {
        match self {
            PoleOrder::Dipole => 1,
            PoleOrder::Quadrupole => 2,
            PoleOrder::Octupole => 3,
            PoleOrder::Hexadecapole => 4,
        }
    }

    /// Display name used in the plot title.
    pub fn name(&self) -> &'static str {
        match self {
            PoleOrder::Dipole => "Dipole",
            PoleOrder::Quadrupole => "Quadrupole",
            PoleOrder::Octupole => "Octupole",
            PoleOrder::Hexadecapole => "Hexadecapole",
        }
    }

    pub fn all() -> [PoleOrder; 4] {
        [
            PoleOrder::Dipole,
            PoleOrder::Quadrupole,
            PoleOrder::Octupole,
            PoleOrder::Hexadecapole,
        ]
    }
}

/// Sign pairs for the four mirror quadrants: (+x,+y), (+x,-y), (-x,+y), (-x,-y).
pub const QUADRANT_SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// One traced field line in the first quadrant.
///
/// `points` holds the Cartesian samples in colatitude order from theta_0
/// to the equator; masked samples are `None`.
#[derive(Debug, Clone)]
pub struct FieldLine {
    pub order: PoleOrder,
    pub theta0_deg: f64,
    /// Palette slot, already reduced modulo the palette length.
    pub color_index: usize,
    pub points: Vec<Option<(f64, f64)>>,
}

impl FieldLine {
    /// The four mirror images of this line, first quadrant included.
    /// Masking carries over unchanged; nothing is recomputed.
    pub fn quadrants(&self) -> [Vec<Option<(f64, f64)>>; 4] {
        QUADRANT_SIGNS.map(|(sx, sy)| {
            self.points
                .iter()
                .map(|p| p.map(|(x, y)| (sx * x, sy * y)))
                .collect()
        })
    }

    /// Number of unmasked samples.
    pub fn drawn_len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}

/// Split a masked point sequence into contiguous drawable runs.
///
/// Each gap of one or more `None` samples ends the current run, so a
/// polyline drawn per run shows the gap instead of bridging it.
pub fn split_segments(points: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for point in points {
        match point {
            Some(p) => current.push(*p),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Everything the renderer needs for one plot: the body outline and one
/// traced line per requested starting colatitude, in input order.
#[derive(Debug, Clone)]
pub struct PlotGeometry {
    pub order: PoleOrder,
    pub reference_radius: f64,
    pub body: Vec<(f64, f64)>,
    pub lines: Vec<FieldLine>,
}

impl PlotGeometry {
    /// Largest |coordinate| over the body and all drawn samples.
    /// The renderer sizes its symmetric axes from this.
    pub fn extent(&self) -> f64 {
        let mut extent = self.reference_radius;
        for line in &self.lines {
            for &(x, y) in line.points.iter().flatten() {
                extent = extent.max(x.abs()).max(y.abs());
            }
        }
        extent
    }
}
