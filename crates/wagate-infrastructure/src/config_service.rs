//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and layers `WAGATE_*`
//! environment overrides on top.

use crate::paths::WagatePaths;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use wagate_core::config::{LogFormat, RootConfig};
use wagate_core::{Result, WagateError};

pub const ENV_HOST: &str = "WAGATE_HOST";
pub const ENV_PORT: &str = "WAGATE_PORT";
pub const ENV_LOG_LEVEL: &str = "WAGATE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "WAGATE_LOG_FORMAT";

/// Looks up one environment variable.
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    env: EnvLookup,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading `path`, or the default `config.toml`.
    ///
    /// Nothing is read until the first [`ConfigService::get_config`].
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        Self::with_env(path, process_env)
    }

    /// Like [`ConfigService::new`], reading overrides through `env` instead
    /// of the process environment.
    pub fn with_env(path: Option<PathBuf>, env: EnvLookup) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => WagatePaths::config_file()?,
        };
        Ok(Self {
            path,
            env,
            config: Arc::new(RwLock::new(None)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the effective configuration, loading it on first access.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load(self.env)?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads the file (defaults when missing) and applies overrides from `env`.
    pub fn load<F>(&self, env: F) -> Result<RootConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path).map_err(|e| {
                WagateError::config(format!("failed to read {}: {}", self.path.display(), e))
            })?;
            toml::from_str::<RootConfig>(&content).map_err(|e| {
                WagateError::config(format!("failed to parse {}: {}", self.path.display(), e))
            })?
        } else {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                self.path.display()
            );
            RootConfig::default()
        };

        apply_overrides(&mut config, env)?;
        Ok(config)
    }
}

fn apply_overrides<F>(config: &mut RootConfig, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = env(ENV_HOST) {
        config.server.host = host;
    }
    if let Some(port) = env(ENV_PORT) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| WagateError::config(format!("{} '{}' is not a port", ENV_PORT, port)))?;
    }
    if let Some(level) = env(ENV_LOG_LEVEL) {
        config.log.level = level;
    }
    if let Some(format) = env(ENV_LOG_FORMAT) {
        config.log.format = format.trim().parse::<LogFormat>().map_err(|_| {
            WagateError::config(format!(
                "{} '{}' must be 'pretty' or 'json'",
                ENV_LOG_FORMAT, format
            ))
        })?;
    }
    Ok(())
}
