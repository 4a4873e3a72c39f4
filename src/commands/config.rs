//! Configuration commands for managing board preferences.
//!
//! - `config show`: Display current preferences
//! - `config get`: Print one preference
//! - `config set`: Change one preference and persist it

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{BoardError, Result};

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let source = config.board_source();

    let json_output = json!({
        "grouping": config.grouping.to_string(),
        "ordering": config.ordering.to_string(),
        "source": source.to_string(),
        "source_configured": config.source.is_some(),
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "grouping".cyan(), config.grouping));
    text_output.push_str(&format!("{}: {}\n", "ordering".cyan(), config.ordering));
    if config.source.is_some() {
        text_output.push_str(&format!("{}: {}\n", "source".cyan(), source));
    } else {
        text_output.push_str(&format!(
            "{}: {} {}\n",
            "source".cyan(),
            source,
            "(default)".dimmed()
        ));
    }
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let config = Config::load()?;

    let value = config
        .get(key)?
        .ok_or_else(|| BoardError::Config(format!("{key} not set")))?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value)
    .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?.unwrap_or_default();

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), stored))
    .print(json)
}
