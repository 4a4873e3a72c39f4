//! Grid builder: partitions a flat ticket list into ordered columns.
//!
//! The grid is rebuilt from scratch for every change of tickets, grouping or
//! ordering. Column order:
//! - status: every status, by rank (empty columns included)
//! - priority: every priority, "0" (no priority) through "4" (urgent)
//! - user: each user id in order of first appearance among the tickets
//!
//! Inside a column tickets are sorted by the ordering mode; see [`sort`].

pub mod sort;

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::classify::{classify_priority, classify_status};
use crate::error::Result;
use crate::types::{GroupingMode, OrderingMode, Ticket, TicketPriority, TicketStatus};

pub use sort::{sort_by_priority, sort_by_title, sort_tickets_by};

/// One column of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub tickets: Vec<Ticket>,
}

impl Column {
    fn empty(key: String) -> Self {
        Self {
            key,
            tickets: Vec::new(),
        }
    }
}

/// Ordered mapping from group key to the sorted tickets in that group.
///
/// Serializes as a JSON object whose key order is the column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Column>,
}

impl Grid {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[Ticket]> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.tickets.as_slice())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of tickets across all columns.
    pub fn ticket_count(&self) -> usize {
        self.columns.iter().map(|c| c.tickets.len()).sum()
    }

    /// All tickets, column by column, in display order.
    pub fn flatten(&self) -> Vec<Ticket> {
        self.columns
            .iter()
            .flat_map(|c| c.tickets.iter().cloned())
            .collect()
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.key, &column.tickets)?;
        }
        map.end()
    }
}

/// Build the grid for `tickets`.
///
/// Every ticket's status and priority is checked before anything is grouped;
/// a single value outside its scale fails the whole build.
pub fn build_grid(
    tickets: &[Ticket],
    grouping: GroupingMode,
    ordering: OrderingMode,
) -> Result<Grid> {
    let classified = tickets
        .iter()
        .map(|t| Ok((t, classify_status(&t.status)?, classify_priority(t.priority)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut columns = match grouping {
        GroupingMode::Status => {
            let mut columns: Vec<Column> = TicketStatus::ALL
                .iter()
                .map(|s| Column::empty(s.to_string()))
                .collect();
            for (ticket, status, _) in &classified {
                columns[*status as usize].tickets.push((*ticket).clone());
            }
            columns
        }
        GroupingMode::Priority => {
            let mut columns: Vec<Column> = TicketPriority::ALL
                .iter()
                .map(|p| Column::empty(p.to_string()))
                .collect();
            for (ticket, _, priority) in &classified {
                columns[priority.as_num() as usize]
                    .tickets
                    .push((*ticket).clone());
            }
            columns
        }
        GroupingMode::User => group_by_first_appearance(tickets),
    };

    for column in &mut columns {
        sort_tickets_by(&mut column.tickets, ordering);
    }

    tracing::debug!(
        %grouping,
        %ordering,
        tickets = tickets.len(),
        columns = columns.len(),
        "built grid"
    );

    Ok(Grid { columns })
}

/// Group by user id, keyed by the raw id so tickets with unknown users stay visible.
fn group_by_first_appearance(tickets: &[Ticket]) -> Vec<Column> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut columns: Vec<Column> = Vec::new();

    for ticket in tickets {
        let idx = *positions.entry(ticket.user_id.as_str()).or_insert_with(|| {
            columns.push(Column::empty(ticket.user_id.clone()));
            columns.len() - 1
        });
        columns[idx].tickets.push(ticket.clone());
    }

    columns
}
