//! Command implementations behind the CLI.

mod board;
mod config;

pub use board::{BoardOptions, cmd_board};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};

use serde_json::Value;

use crate::error::Result;

/// Output of a command: a JSON value plus an optional human-readable rendering.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON when `json` is set, otherwise as text.
    pub fn print(self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
        } else {
            match self.text {
                Some(text) => println!("{text}"),
                None => println!("{}", self.json),
            }
        }
        Ok(())
    }
}
