//! Board view models for rendering
//!
//! Projects a grid plus the user index into the column and card data the
//! renderers need, without any terminal or JSON concerns.

use serde::Serialize;

use crate::board::state::BoardState;
use crate::classify::{priority_info, status_meta};
use crate::error::{BoardError, Result};
use crate::types::{GroupingMode, Ticket, TicketPriority};
use crate::users::{UserIndex, user_display_name};

/// Icon ids used for user columns and badges
pub const ICON_USER_AVAILABLE: &str = "user-available";
pub const ICON_USER_AWAY: &str = "user-away";
pub const ICON_USER_UNKNOWN: &str = "user-unknown";

/// Computed view model for the whole board
#[derive(Debug, Clone, Serialize)]
pub struct BoardViewModel {
    pub grouping: String,
    pub ordering: String,
    pub columns: Vec<ColumnViewModel>,
}

/// View model for a single column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnViewModel {
    /// Grid key this column represents
    pub key: String,
    /// Header title
    pub title: String,
    /// Header icon id
    pub icon: String,
    /// Number of tickets in the column
    pub count: usize,
    #[serde(rename = "tickets")]
    pub cards: Vec<CardViewModel>,
}

/// View model for a single ticket card
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub priority: i64,
    /// Hidden when the board is grouped by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_icon: Option<String>,
    /// Hidden when the board is grouped by user, or the user is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserBadge>,
}

/// Assignee badge shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBadge {
    pub name: String,
    pub initials: String,
    pub available: bool,
}

impl BoardViewModel {
    pub fn from_state(state: &BoardState) -> Result<Self> {
        let grouping = state.grouping();
        let columns = state
            .grid()
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let (title, icon) = column_header(index, &column.key, grouping, state.users())?;
                let cards = column
                    .tickets
                    .iter()
                    .map(|t| card(t, grouping, state.users()))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ColumnViewModel {
                    key: column.key.clone(),
                    title,
                    icon,
                    count: column.tickets.len(),
                    cards,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            grouping: grouping.to_string(),
            ordering: state.ordering().to_string(),
            columns,
        })
    }
}

/// Title and icon for a column header.
///
/// Priority columns follow `TicketPriority::ALL`, so they are looked up by position.
fn column_header(
    index: usize,
    key: &str,
    grouping: GroupingMode,
    users: &UserIndex,
) -> Result<(String, String)> {
    match grouping {
        GroupingMode::Status => {
            let meta = status_meta(key)?;
            Ok((meta.label.to_string(), meta.icon_id.to_string()))
        }
        GroupingMode::Priority => {
            let priority = TicketPriority::ALL
                .get(index)
                .ok_or(BoardError::InvalidPriority(index as i64))?;
            let meta = priority_info(*priority);
            Ok((meta.label.to_string(), meta.icon_id.to_string()))
        }
        GroupingMode::User => {
            let icon = match users.get(key) {
                Some(user) if user.available => ICON_USER_AVAILABLE,
                Some(_) => ICON_USER_AWAY,
                None => ICON_USER_UNKNOWN,
            };
            Ok((user_display_name(users, key), icon.to_string()))
        }
    }
}

fn card(ticket: &Ticket, grouping: GroupingMode, users: &UserIndex) -> Result<CardViewModel> {
    let status_icon = match grouping {
        GroupingMode::Status => None,
        _ => Some(status_meta(&ticket.status)?.icon_id.to_string()),
    };
    let user = match grouping {
        GroupingMode::User => None,
        _ => users.get(&ticket.user_id).map(|u| UserBadge {
            name: u.name.clone(),
            initials: initials(&u.name),
            available: u.available,
        }),
    };

    Ok(CardViewModel {
        id: ticket.id.clone(),
        title: ticket.title.clone(),
        tags: ticket.tag.clone(),
        priority: ticket.priority,
        status_icon,
        user,
    })
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
