//! Configuration
//!
//! Layered configuration: built-in defaults, the global file under the XDG
//! config home, a local `codegallery.toml`, then `CODEGALLERY_*` environment
//! variables.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = "codegallery.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Viewer behaviour and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// File name preferred for the initial selection (case-insensitive)
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Title of rendered HTML pages
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_file() -> String {
    "readme.md".to_string()
}

fn default_page_title() -> String {
    "Code Gallery".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            color: default_true(),
            page_title: default_page_title(),
        }
    }
}

impl GalleryConfig {
    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, crate::error::ApiError> {
        toml::to_string_pretty(self).map_err(|e| {
            crate::error::ApiError::ConfigError(format!("Failed to serialize config: {}", e))
        })
    }
}
