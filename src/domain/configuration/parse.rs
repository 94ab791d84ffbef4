//! Configuration parsing.

use crate::domain::{AppConfig, AppError};

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "promptmaster.toml";

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
