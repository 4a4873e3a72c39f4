//! Display metadata for statuses and priorities.
//!
//! Both scales are closed: a value outside the table is a classification
//! error, never a silent default, since one bad value would shift every
//! column of the board.

use serde::Serialize;

use crate::error::{BoardError, Result};
use crate::types::{TicketPriority, TicketStatus};

/// Rank, label and icon identifier for one member of a closed scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassMeta {
    pub rank: u8,
    pub label: &'static str,
    pub icon_id: &'static str,
}

const STATUS_TABLE: [ClassMeta; 5] = [
    ClassMeta {
        rank: 0,
        label: "Backlog",
        icon_id: "backlog",
    },
    ClassMeta {
        rank: 1,
        label: "Todo",
        icon_id: "todo",
    },
    ClassMeta {
        rank: 2,
        label: "In progress",
        icon_id: "in-progress",
    },
    ClassMeta {
        rank: 3,
        label: "Done",
        icon_id: "done",
    },
    ClassMeta {
        rank: 4,
        label: "Canceled",
        icon_id: "canceled",
    },
];

const PRIORITY_TABLE: [ClassMeta; 5] = [
    ClassMeta {
        rank: 0,
        label: "No priority",
        icon_id: "no-priority",
    },
    ClassMeta {
        rank: 1,
        label: "Low",
        icon_id: "priority-low",
    },
    ClassMeta {
        rank: 2,
        label: "Medium",
        icon_id: "priority-medium",
    },
    ClassMeta {
        rank: 3,
        label: "High",
        icon_id: "priority-high",
    },
    ClassMeta {
        rank: 4,
        label: "Urgent",
        icon_id: "priority-urgent",
    },
];

/// Metadata for a known status.
pub fn status_info(status: TicketStatus) -> ClassMeta {
    STATUS_TABLE[status as usize]
}

/// Metadata for a known priority.
pub fn priority_info(priority: TicketPriority) -> ClassMeta {
    PRIORITY_TABLE[priority.as_num() as usize]
}

/// Classify a raw status string. The match is exact.
pub fn classify_status(status: &str) -> Result<TicketStatus> {
    TicketStatus::from_wire(status).ok_or_else(|| BoardError::InvalidStatus(status.to_string()))
}

/// Classify a raw priority rank.
pub fn classify_priority(priority: i64) -> Result<TicketPriority> {
    TicketPriority::from_num(priority).ok_or(BoardError::InvalidPriority(priority))
}

/// Metadata for a raw status string.
pub fn status_meta(status: &str) -> Result<ClassMeta> {
    classify_status(status).map(status_info)
}

/// Metadata for a raw priority rank.
pub fn priority_meta(priority: i64) -> Result<ClassMeta> {
    classify_priority(priority).map(priority_info)
}
