//! Persisted board preferences.
//!
//! Preferences are stored in `.ticketboard/config.yaml` and include:
//! - Grouping mode (default: status)
//! - Ordering mode (default: priority)
//! - Board source URL or file (default: the public endpoint)
//!
//! Modes are stored as plain strings. A stored value that no longer parses
//! falls back to the default instead of failing startup.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use crate::error::{BoardError, Result};
use crate::paths::config_path;
use crate::source::BoardSource;
use crate::types::{GroupingMode, OrderingMode};

/// Keys accepted by `config get` and `config set`.
pub const CONFIG_KEYS: &[&str] = &["grouping", "ordering", "source"];

/// On-disk representation. Modes are kept as raw YAML values so a value of the
/// wrong shape falls back to the default like any other unknown mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    grouping: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ordering: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

/// Board preferences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
    pub source: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration content, falling back to defaults for unknown modes
    pub fn from_yaml(content: &str) -> Result<Self> {
        let stored: Option<StoredConfig> = serde_yaml_ng::from_str(content)?;
        let stored = stored.unwrap_or_default();

        let grouping = stored_mode("grouping", stored.grouping);
        let ordering = stored_mode("ordering", stored.ordering);

        Ok(Config {
            grouping,
            ordering,
            source: stored.source.filter(|s| !s.is_empty()),
        })
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        let stored = StoredConfig {
            grouping: Some(Value::String(self.grouping.to_string())),
            ordering: Some(Value::String(self.ordering.to_string())),
            source: self.source.clone(),
        };
        Ok(serde_yaml_ng::to_string(&stored)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BoardError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = self.to_yaml()?;
        fs::write(&path, content).map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        tracing::debug!(path = %path.display(), "saved preferences");
        Ok(())
    }

    /// Board source, falling back to the default endpoint
    pub fn board_source(&self) -> BoardSource {
        self.source
            .as_deref()
            .map(BoardSource::parse)
            .unwrap_or_default()
    }

    /// Current value of a key as a string, or `None` if it has never been set
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "grouping" => Ok(Some(self.grouping.to_string())),
            "ordering" => Ok(Some(self.ordering.to_string())),
            "source" => Ok(self.source.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a key from a string. Modes are validated strictly here.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "grouping" => self.grouping = value.parse()?,
            "ordering" => self.ordering = value.parse()?,
            "source" => {
                if value.trim().is_empty() {
                    return Err(BoardError::Config("source cannot be empty".to_string()));
                }
                self.source = Some(value.to_string());
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

/// Parse a stored mode, warning and falling back to the default when it is unusable.
fn stored_mode<T>(key: &str, value: Option<Value>) -> T
where
    T: Default + std::str::FromStr<Err = BoardError>,
{
    let parsed = match value {
        None | Some(Value::Null) => return T::default(),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(BoardError::Config(format!("unsupported value {other:?}"))),
    };
    parsed.unwrap_or_else(|e| {
        tracing::warn!("ignoring stored {key}: {e}");
        T::default()
    })
}

fn unknown_key(key: &str) -> BoardError {
    BoardError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
