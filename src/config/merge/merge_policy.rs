//! Built-in defaults, the lowest-precedence layer.

use crate::config::ViewerConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let viewer = ViewerConfig::default();
    Config::builder()
        .set_default("viewer.default_file", viewer.default_file)?
        .set_default("viewer.color", viewer.color)?
        .set_default("viewer.page_title", viewer.page_title)
}
