use std::path::Path;

use anyhow::{Context, Result};
use argweave_core::Config;
use tokio::fs::read_to_string;

use crate::get_argweave_dir;

/// Load `.argweave/config.json`. A missing file yields the defaults.
pub async fn get_argweave_config(current_dir: &Path) -> Result<Config> {
    let config_file = get_argweave_dir(current_dir).join("config.json");
    if !config_file.is_file() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", config_file.display()))
}
