use anyhow::{Context, Result};
use std::str::FromStr;
use wagate_core::config::LogSettings;
use wagate_core::event::{EventCategory, event_catalog, events_in};
use wagate_infrastructure::init_logging;

pub fn run(category: Option<&str>, json: bool) -> Result<()> {
    // The catalog is static; a broken config file should not hide it.
    if let Err(e) = super::load_config(None) {
        init_logging(&LogSettings::default()).context("Failed to initialize logging")?;
        tracing::warn!("[CLI] Using default logging: {:#}", e);
    }

    println!("{}", render(category, json)?);
    Ok(())
}

fn render(category: Option<&str>, json: bool) -> Result<String> {
    let names: Vec<&'static str> = match category {
        Some(name) => {
            let category = EventCategory::from_str(name.trim())
                .with_context(|| format!("Unknown event category '{}'", name))?;
            events_in(category)
        }
        None => event_catalog().to_vec(),
    };

    if json {
        Ok(serde_json::to_string_pretty(&names)?)
    } else {
        Ok(names.join("\n"))
    }
}
