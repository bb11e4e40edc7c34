// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Body surface radius, which doubles as the normalization radius of
/// every profile formula. The plot is in units of this radius.
pub const REFERENCE_RADIUS: f64 = 1.0;

/// Colatitude samples per field line, from theta_0 to the equator.
pub const LINE_SAMPLES: usize = 1000;

/// Angular samples for the body outline over the full circle.
pub const OUTLINE_SAMPLES: usize = 1000;

/// Rendered image edge length in pixels.
pub const PLOT_SIZE_PX: u32 = 1500;

/// Line colors, cycled by line index modulo the palette length.
/// Purple appears twice (indices 3 and 5).
pub const LINE_PALETTE: [(u8, u8, u8); 10] = [
    (255, 0, 0),     // red
    (0, 0, 255),     // blue
    (128, 128, 128), // grey
    (128, 0, 128),   // purple
    (165, 42, 42),   // brown
    (128, 0, 128),   // purple
    (255, 192, 203), // pink
    (255, 165, 0),   // orange
    (255, 0, 255),   // magenta
    (128, 128, 0),   // olive
];

/// Fill color of the body disk (light grey).
pub const BODY_FILL: (u8, u8, u8) = (211, 211, 211);
