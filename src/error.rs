use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    // Fetch errors
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid board payload: {0}")]
    InvalidPayload(String),

    // Classification errors
    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority {0}, expected 0-4")]
    InvalidPriority(i64),

    // Preference errors
    #[error("invalid grouping '{0}', expected one of: status, priority, user")]
    InvalidGrouping(String),

    #[error("invalid ordering '{0}', expected one of: priority, title")]
    InvalidOrdering(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// True for errors raised because a ticket carries a value outside a closed enumeration.
    pub fn is_classification(&self) -> bool {
        matches!(
            self,
            BoardError::InvalidStatus(_) | BoardError::InvalidPriority(_)
        )
    }

    /// True for errors that happen before any board data is available.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BoardError::Transport(_) | BoardError::Http(_) | BoardError::InvalidPayload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
