//! Local input checks run before any collaborator is called.

use wagate_core::jid;
use wagate_core::{Result, WagateError};

pub(crate) fn require_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WagateError::validation(format!("{} is required", field)));
    }
    Ok(())
}

pub(crate) fn require_items<T>(items: &[T], field: &str) -> Result<()> {
    if items.is_empty() {
        return Err(WagateError::validation(format!(
            "{} must contain at least one entry",
            field
        )));
    }
    Ok(())
}

fn require_address(input: &str, field: &str) -> Result<()> {
    if jid::is_blank_address(input) {
        return Err(WagateError::validation(format!(
            "{} '{}' is not a phone number or JID",
            field, input
        )));
    }
    Ok(())
}

pub(crate) fn user_jid(input: &str, field: &str) -> Result<String> {
    require_address(input, field)?;
    Ok(jid::normalize_phone_jid(input))
}

pub(crate) fn user_jids(inputs: &[String], field: &str) -> Result<Vec<String>> {
    require_items(inputs, field)?;
    inputs.iter().map(|input| user_jid(input, field)).collect()
}

pub(crate) fn group_jid(input: &str) -> Result<String> {
    require_address(input, "group")?;
    Ok(jid::normalize_group_jid(input))
}

pub(crate) fn newsletter_jid(input: &str) -> Result<String> {
    require_address(input, "newsletter")?;
    Ok(jid::normalize_newsletter_jid(input))
}
