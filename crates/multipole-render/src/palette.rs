// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Palette
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Line-color cycling.
//!
//! A pure mapping from line index to color; lines beyond the tenth
//! share colors with earlier ones.

use multipole_types::constants::{BODY_FILL, LINE_PALETTE};
use plotters::style::RGBColor;

/// Color for the line at `index`, cycling through the fixed palette.
pub fn line_color(index: usize) -> RGBColor {
    let (r, g, b) = LINE_PALETTE[index % LINE_PALETTE.len()];
    RGBColor(r, g, b)
}

/// Fill color of the body disk.
pub fn body_fill() -> RGBColor {
    let (r, g, b) = BODY_FILL;
    RGBColor(r, g, b)
}
