#[macro_use]
mod macros;

pub mod board;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod logging;
pub mod paths;
pub mod source;
pub mod types;
pub mod users;

pub use board::{BoardState, BoardViewModel};
pub use classify::{ClassMeta, priority_meta, status_meta};
pub use config::Config;
pub use error::{BoardError, Result};
pub use grid::{Column, Grid, build_grid};
pub use source::{BoardClient, BoardSource};
pub use types::{
    BoardPayload, GroupingMode, OrderingMode, Ticket, TicketPriority, TicketStatus, User,
};
pub use users::{UserIndex, build_user_index};
