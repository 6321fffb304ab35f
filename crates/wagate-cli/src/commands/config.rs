use anyhow::{Context, Result};
use std::path::PathBuf;
use wagate_infrastructure::ConfigService;

/// Prints the effective configuration (file plus `WAGATE_*` overrides).
pub fn show(path: Option<PathBuf>) -> Result<()> {
    let service = ConfigService::new(path).context("Failed to locate configuration")?;
    println!("{}", render(service)?);
    Ok(())
}

fn render(service: ConfigService) -> Result<String> {
    let (service, config) = super::load_from(service)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    Ok(format!("# {}\n{}", service.path().display(), rendered.trim_end()))
}

pub fn check(path: Option<PathBuf>) -> Result<()> {
    let service = ConfigService::new(path).context("Failed to locate configuration")?;
    validate(service)
}

fn validate(service: ConfigService) -> Result<()> {
    let (service, config) = super::load_from(service)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", service.path().display()))?;

    println!("✅ {} is valid", service.path().display());
    Ok(())
}
