//! Local config file: `<base_dir>/codegallery.toml`

use crate::config::LOCAL_CONFIG_FILE;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        File::from(base_dir.join(LOCAL_CONFIG_FILE))
            .format(FileFormat::Toml)
            .required(false),
    ))
}
