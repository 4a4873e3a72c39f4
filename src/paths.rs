//! Filesystem locations used by the board.

use std::path::PathBuf;

/// Environment variable overriding the preference directory.
pub const ROOT_ENV_VAR: &str = "TICKETBOARD_ROOT";

/// Returns the preference directory: `$TICKETBOARD_ROOT` or `.ticketboard`.
pub fn board_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV_VAR) {
        PathBuf::from(root)
    } else {
        PathBuf::from(".ticketboard")
    }
}

/// Returns the path to the preference file.
pub fn config_path() -> PathBuf {
    board_root().join("config.yaml")
}
