//! Board command (`ticketboard board`)
//!
//! Fetches the board payload, groups and orders it with the current
//! preferences, and prints the columns.

use crate::board::{BoardState, BoardViewModel};
use crate::commands::CommandOutput;
use crate::config::Config;
use crate::display::render_board;
use crate::error::Result;
use crate::source::BoardSource;
use crate::types::{GroupingMode, OrderingMode};

/// Flags for `ticketboard board`
#[derive(Debug, Clone, Default)]
pub struct BoardOptions {
    /// URL or file path overriding the configured source
    pub source: Option<String>,
    /// Grouping overriding the stored preference
    pub grouping: Option<GroupingMode>,
    /// Ordering overriding the stored preference
    pub ordering: Option<OrderingMode>,
    /// Persist overridden modes
    pub save: bool,
    pub json: bool,
}

/// Fetch and print the board
pub async fn cmd_board(options: BoardOptions) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(grouping) = options.grouping {
        config.grouping = grouping;
    }
    if let Some(ordering) = options.ordering {
        config.ordering = ordering;
    }
    if options.save && (options.grouping.is_some() || options.ordering.is_some()) {
        config.save()?;
    }

    let source = options
        .source
        .as_deref()
        .map(BoardSource::parse)
        .unwrap_or_else(|| config.board_source());

    let payload = source.load().await?;
    let state = BoardState::new(payload, config.grouping, config.ordering)?;
    let view = BoardViewModel::from_state(&state)?;

    tracing::info!(
        source = %source,
        grouping = %config.grouping,
        ordering = %config.ordering,
        tickets = state.tickets().len(),
        "rendering board"
    );

    CommandOutput::new(serde_json::to_value(&view)?)
        .with_text(render_board(&view))
        .print(options.json)
}
