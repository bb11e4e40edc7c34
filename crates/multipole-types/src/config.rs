// ─────────────────────────────────────────────────────────────────────
// SCPN Multipole Tracer — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{TracerError, TracerResult};

/// Render configuration. Every field has a default, so `{}` deserializes
/// to the standard 1500x1500 plot with 1000-sample lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    #[serde(default = "default_size")]
    pub width: u32,
    /// Image height in pixels.
    #[serde(default = "default_size")]
    pub height: u32,
    /// Colatitude samples per field line.
    #[serde(default = "default_line_samples")]
    pub line_samples: usize,
    /// Angular samples for the body outline.
    #[serde(default = "default_outline_samples")]
    pub outline_samples: usize,
    /// Body surface radius, also the profile normalization radius.
    #[serde(default = "default_reference_radius")]
    pub reference_radius: f64,
}

fn default_size() -> u32 {
    constants::PLOT_SIZE_PX
}
fn default_line_samples() -> usize {
    constants::LINE_SAMPLES
}
fn default_outline_samples() -> usize {
    constants::OUTLINE_SAMPLES
}
fn default_reference_radius() -> f64 {
    constants::REFERENCE_RADIUS
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: default_size(),
            height: default_size(),
            line_samples: default_line_samples(),
            outline_samples: default_outline_samples(),
            reference_radius: default_reference_radius(),
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: &str) -> TracerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a meaningful plot.
    pub fn validate(&self) -> TracerResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TracerError::ConfigError(format!(
                "image dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.line_samples < 2 {
            return Err(TracerError::ConfigError(format!(
                "line_samples must be >= 2, got {}",
                self.line_samples
            )));
        }
        if self.outline_samples < 3 {
            return Err(TracerError::ConfigError(format!(
                "outline_samples must be >= 3, got {}",
                self.outline_samples
            )));
        }
        if !self.reference_radius.is_finite() || self.reference_radius <= 0.0 {
            return Err(TracerError::ConfigError(format!(
                "reference_radius must be finite and > 0, got {}",
                self.reference_radius
            )));
        }
        Ok(())
    }
}
