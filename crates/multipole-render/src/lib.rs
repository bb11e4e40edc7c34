// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Renderer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rasterization of traced field-line geometry.
//!
//! The renderer draws into an in-memory RGB buffer and returns it; it
//! never touches the filesystem. Encoding or displaying the buffer is
//! the presentation shell's concern.

pub mod palette;
pub mod plot;

pub use plot::{render, render_field_lines, RenderedPlot};
