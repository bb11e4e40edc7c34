//! Field-profile library and plot-geometry builder.
//!
//! Closed-form radial profiles for dipole through hexadecapole field
//! lines, plus the sampling, masking and mirroring that turn them into
//! renderable geometry.

pub mod input;
pub mod profiles;
pub mod trace;
