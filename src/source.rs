//! Where board payloads come from.
//!
//! A source is either an HTTP(S) endpoint or a local JSON file with the same
//! shape. A failed fetch stops here: the grid is never built from it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;

use crate::error::{BoardError, Result};
use crate::types::{BoardPayload, DEFAULT_SOURCE_URL};

/// Location of a board payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Url(String),
    File(PathBuf),
}

impl BoardSource {
    /// Interpret a user-supplied string. Anything that is not an http(s) URL is a file path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            BoardSource::Url(value.to_string())
        } else {
            BoardSource::File(PathBuf::from(value))
        }
    }

    /// Fetch and decode the payload.
    pub async fn load(&self) -> Result<BoardPayload> {
        match self {
            BoardSource::Url(url) => BoardClient::new()?.fetch_board(url).await,
            BoardSource::File(path) => load_board(path).await,
        }
    }
}

impl Default for BoardSource {
    fn default() -> Self {
        BoardSource::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl fmt::Display for BoardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSource::Url(url) => write!(f, "{url}"),
            BoardSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// HTTP client for the board endpoint
pub struct BoardClient {
    client: Client,
}

impl BoardClient {
    /// Configures HTTP client with 10s connect timeout and 30s total timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    /// Single GET of the board payload. No retries.
    pub async fn fetch_board(&self, url: &str) -> Result<BoardPayload> {
        tracing::debug!(url, "fetching board");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(BoardError::Transport(format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await?;
        parse_payload(&body)
    }
}

/// Read a payload from a local JSON file.
pub async fn load_board(path: &Path) -> Result<BoardPayload> {
    tracing::debug!(path = %path.display(), "loading board file");
    let content = tokio::fs::read_to_string(path).await?;
    parse_payload(&content)
}

/// Decode a payload document.
pub fn parse_payload(content: &str) -> Result<BoardPayload> {
    let payload: BoardPayload =
        serde_json::from_str(content).map_err(|e| BoardError::InvalidPayload(e.to_string()))?;
    tracing::debug!(
        tickets = payload.tickets.len(),
        users = payload.users.len(),
        "decoded board payload"
    );
    Ok(payload)
}
