pub mod config;
pub mod info;
pub mod remove_bg;

use std::path::Path;

use anyhow::{Context, Result};
use tailor_core::config::DesignerConfig;

/// Load the config file if one was given, then apply environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<DesignerConfig> {
    let mut config = match path {
        Some(p) => DesignerConfig::load(p)
            .with_context(|| format!("Failed to load config from {}", p.display()))?,
        None => DesignerConfig::default(),
    };
    config.apply_env();
    Ok(config)
}
