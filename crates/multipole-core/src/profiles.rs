// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Field Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form radial profiles for axisymmetric multipole field lines.
//!
//! Each profile gives the field-line radius as a function of colatitude
//! for expansion degree n, normalized so the line crosses the reference
//! radius r0 at the starting colatitude theta_0:
//!
//!   r(th) = (|k| · |P_n(th)|)^(1/n),  k = r0^n / P_n(theta_0)
//!
//! where P_n is the associated-Legendre colatitude dependence of the
//! n-th order term. For n >= 2 the product k·P can change sign across
//! the domain; absolute values are taken before the fractional root so
//! the radius stays real. This is a display simplification, not a
//! branch-signed solution.
//!
//! Degenerate theta_0 (0, 90 degrees, or an order-specific zero of the
//! normalization denominator) is not guarded here: the radius comes out
//! non-finite and the caller masks those samples.

use multipole_types::state::PoleOrder;
use ndarray::Array1;

/// Dipole (n=1): r = k·sin²th with k = r0/sin²theta_0.
pub fn dipole(r0: f64, theta_0: f64, th: f64) -> f64 {
    let k = r0 / theta_0.sin().powi(2);
    k * th.sin().powi(2)
}

/// Quadrupole (n=2): P = cos·sin², radius = sqrt(|k|·|P|).
pub fn quadrupole(r0: f64, theta_0: f64, th: f64) -> f64 {
    let k = r0.powi(2) / (theta_0.sin().powi(2) * theta_0.cos());
    let p = th.cos() * th.sin().powi(2);
    (k.abs() * p.abs()).sqrt()
}

/// Octupole (n=3): P = (5cos²−1)·sin², radius = (|k|·|P|)^(1/3).
pub fn octupole(r0: f64, theta_0: f64, th: f64) -> f64 {
    let k = r0.powi(3) / (theta_0.sin().powi(2) * (5.0 * theta_0.cos().powi(2) - 1.0));
    let p = (5.0 * th.cos().powi(2) - 1.0) * th.sin().powi(2);
    (k.abs() * p.abs()).cbrt()
}

/// Hexadecapole (n=4): P = (7cos³−3cos)·sin², radius = (|k|·|P|)^(1/4).
pub fn hexadecapole(r0: f64, theta_0: f64, th: f64) -> f64 {
    let k = r0.powi(4) / ((7.0 * theta_0.cos().powi(3) - 3.0 * theta_0.cos()) * theta_0.sin().powi(2));
    let p = (7.0 * th.cos().powi(3) - 3.0 * th.cos()) * th.sin().powi(2);
    (k.abs() * p.abs()).powf(0.25)
}

/// Radius of the field line of the given order at one colatitude sample.
///
/// All angles in radians; `th` is expected in [theta_0, pi/2].
pub fn radius(order: PoleOrder, r0: f64, theta_0: f64, th: f64) -> f64 {
    match order {
        PoleOrder::Dipole => dipole(r0, theta_0, th),
        PoleOrder::Quadrupole => quadrupole(r0, theta_0, th),
        PoleOrder::Octupole => octupole(r0, theta_0, th),
        PoleOrder::Hexadecapole => hexadecapole(r0, theta_0, th),
    }
}

/// Evaluate the profile across a whole colatitude sample grid.
pub fn radius_profile(order: PoleOrder, r0: f64, theta_0: f64, th: &Array1<f64>) -> Array1<f64> {
    th.mapv(|t| radius(order, r0, theta_0, t))
}
