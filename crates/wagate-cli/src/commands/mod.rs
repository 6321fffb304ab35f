pub mod config;
pub mod events;

use anyhow::{Context, Result};
use std::path::PathBuf;
use wagate_core::config::RootConfig;
use wagate_infrastructure::{ConfigService, init_logging};

/// Loads the configuration and installs logging from it.
pub fn load_config(path: Option<PathBuf>) -> Result<(ConfigService, RootConfig)> {
    let service = ConfigService::new(path).context("Failed to locate configuration")?;
    load_from(service)
}

pub fn load_from(service: ConfigService) -> Result<(ConfigService, RootConfig)> {
    let config = service
        .get_config()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;
    init_logging(&config.log).context("Failed to initialize logging")?;
    tracing::debug!("[CLI] Loaded configuration from {}", service.path().display());
    Ok((service, config))
}
