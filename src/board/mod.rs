//! Board state and the view models derived from it.

pub mod model;
pub mod state;

pub use model::{BoardViewModel, CardViewModel, ColumnViewModel, UserBadge};
pub use state::BoardState;
