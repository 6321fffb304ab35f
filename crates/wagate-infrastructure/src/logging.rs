//! Global tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wagate_core::config::{LogFormat, LogSettings};
use wagate_core::{Result, WagateError};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. Returns `Ok(false)`
/// when a subscriber was already installed.
pub fn init_logging(settings: &LogSettings) -> Result<bool> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|e| {
            WagateError::config(format!("invalid log level '{}': {}", settings.level, e))
        })?,
    };

    let installed = match settings.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
    };

    match installed {
        Ok(()) => {
            tracing::debug!("[Logging] Initialized ({} format)", settings.format);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_not_an_error() {
        let settings = LogSettings::default();

        // Nothing else in this crate installs a subscriber.
        assert!(init_logging(&settings).unwrap());

        assert!(!init_logging(&settings).unwrap());
        let json = LogSettings {
            format: LogFormat::Json,
            ..LogSettings::default()
        };
        assert!(!init_logging(&json).unwrap());
    }
}
