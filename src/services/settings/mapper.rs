use crate::models::config::CountdownConfig;
use anyhow::{Context, Result};

/// Parses a TOML settings document and validates the result. `origin` only
/// appears in error messages.
pub fn toml_to_config(text: &str, origin: &str) -> Result<CountdownConfig> {
    let config: CountdownConfig =
        toml::from_str(text).with_context(|| format!("Failed to parse settings from {origin}"))?;
    config
        .validate()
        .with_context(|| format!("Invalid settings in {origin}"))?;
    Ok(config)
}
