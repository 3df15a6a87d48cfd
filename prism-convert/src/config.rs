//! Engine tunables.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Conversion settings. Every field has a default, so a partial (or empty)
/// JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Corner radius given to vector placeholders.
    pub vector_placeholder_radius: f64,
    /// Opacity given to vector placeholders.
    pub vector_placeholder_opacity: f64,
    pub absorb_backgrounds: bool,
    pub infer_auto_layout: bool,
    /// Slack (px) when checking that a rectangle spans its container.
    pub background_tolerance: f64,
    /// Slack (px) for alignment and spacing comparisons.
    pub layout_tolerance: f64,
    /// Run component sets through frame conversion instead of dropping them.
    pub convert_variant_sets: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            vector_placeholder_radius: 16.0,
            vector_placeholder_opacity: 0.5,
            absorb_backgrounds: true,
            infer_auto_layout: true,
            background_tolerance: 1.0,
            layout_tolerance: 1.0,
            convert_variant_sets: false,
        }
    }
}

impl ConvertConfig {
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(ConvertError::Config)
    }
}
