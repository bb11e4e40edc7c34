// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Error Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracerError {
    #[error("Starting colatitude out of range: {values:?} (each value must lie between 0 and 90 degrees)")]
    ColatitudeOutOfRange { values: Vec<f64> },

    #[error("Cannot parse '{token}' as a colatitude in degrees")]
    ParseError { token: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TracerResult<T> = Result<T, TracerError>;
