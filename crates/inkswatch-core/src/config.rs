//! Picker configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// Swatches per grid row, shared by every section.
pub const COLORS_PER_ROW: usize = 5;
/// Maximum number of most-used custom colors shown.
pub const MAX_CUSTOM_COLORS: usize = 5;
/// Shade used to represent a family in the default grid.
pub const DEFAULT_SHADE_INDEX: usize = 3;

/// Tunables for the picker. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub colors_per_row: usize,
    pub max_custom_colors: usize,
    pub default_shade_index: usize,
    /// Show the hex input section.
    pub show_input: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            colors_per_row: COLORS_PER_ROW,
            max_custom_colors: MAX_CUSTOM_COLORS,
            default_shade_index: DEFAULT_SHADE_INDEX,
            show_input: true,
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> PickerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PickerResult<()> {
        if self.colors_per_row == 0 {
            log::warn!("Rejected picker config with zero colors per row");
            return Err(PickerError::InvalidConfig(
                "colors_per_row must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
