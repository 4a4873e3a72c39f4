//! Comparators applied inside each grid column.
//!
//! All sorts are stable: tickets with equal keys keep their input order.

use crate::types::{OrderingMode, Ticket};

/// Sort tickets by priority, most urgent first
pub fn sort_by_priority(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Sort tickets by title (case-sensitive, ascending)
pub fn sort_by_title(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| a.title.cmp(&b.title));
}

/// Sort tickets by the specified ordering
pub fn sort_tickets_by(tickets: &mut [Ticket], ordering: OrderingMode) {
    match ordering {
        OrderingMode::Priority => sort_by_priority(tickets),
        OrderingMode::Title => sort_by_title(tickets),
    }
}
