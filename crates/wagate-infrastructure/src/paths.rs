//! Path management for wagate configuration files.
//!
//! ```text
//! ~/.config/wagate/        # Config directory (platform default via `dirs`)
//! └── config.toml          # Gateway configuration
//! ```

use std::path::PathBuf;
use wagate_core::{Result, WagateError};

const APP_DIR: &str = "wagate";

pub struct WagatePaths;

impl WagatePaths {
    /// Returns the wagate configuration directory (e.g. `~/.config/wagate/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| WagateError::config("cannot determine the configuration directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
