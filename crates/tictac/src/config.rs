//! Display configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_view::RenderOptions;
use tracing::{debug, info, instrument};

/// Settings for how the host draws the board.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Label for empty cells.
    #[serde(default = "default_empty_label")]
    empty_label: String,

    /// Show cell numbers in empty cells.
    #[serde(default)]
    show_indices: bool,

    /// Print a legend of occupied cells per category.
    #[serde(default)]
    show_categories: bool,

    /// Class name for cells holding X.
    #[serde(default = "default_primary_class")]
    primary_class: String,

    /// Class name for cells holding O and empty cells.
    #[serde(default = "default_accent_class")]
    accent_class: String,
}

#[instrument]
fn default_empty_label() -> String {
    " ".to_string()
}

#[instrument]
fn default_primary_class() -> String {
    "primary".to_string()
}

#[instrument]
fn default_accent_class() -> String {
    "accent".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(show_indices = config.show_indices, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the render options for the view layer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .empty_label(self.empty_label.as_str())
            .show_indices(self.show_indices)
            .show_categories(self.show_categories)
            .primary_class(self.primary_class.as_str())
            .accent_class(self.accent_class.as_str())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            empty_label: default_empty_label(),
            show_indices: false,
            show_categories: false,
            primary_class: default_primary_class(),
            accent_class: default_accent_class(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
