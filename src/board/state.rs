//! Board state owned by the UI layer.
//!
//! Holds the canonical tickets, user index and modes, and rebuilds the grid
//! synchronously whenever one of its inputs changes. A failed rebuild leaves
//! the previous state untouched.

use crate::error::Result;
use crate::grid::{Grid, build_grid};
use crate::types::{BoardPayload, GroupingMode, OrderingMode, Ticket};
use crate::users::{UserIndex, build_user_index};

#[derive(Debug, Clone)]
pub struct BoardState {
    tickets: Vec<Ticket>,
    users: UserIndex,
    grouping: GroupingMode,
    ordering: OrderingMode,
    grid: Grid,
}

impl BoardState {
    /// Build the state for a freshly fetched payload.
    pub fn new(
        payload: BoardPayload,
        grouping: GroupingMode,
        ordering: OrderingMode,
    ) -> Result<Self> {
        let grid = build_grid(&payload.tickets, grouping, ordering)?;
        Ok(Self {
            users: build_user_index(&payload.users),
            tickets: payload.tickets,
            grouping,
            ordering,
            grid,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn users(&self) -> &UserIndex {
        &self.users
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn grouping(&self) -> GroupingMode {
        self.grouping
    }

    pub fn ordering(&self) -> OrderingMode {
        self.ordering
    }

    pub fn set_grouping(&mut self, grouping: GroupingMode) -> Result<()> {
        self.grid = build_grid(&self.tickets, grouping, self.ordering)?;
        self.grouping = grouping;
        Ok(())
    }

    pub fn set_ordering(&mut self, ordering: OrderingMode) -> Result<()> {
        self.grid = build_grid(&self.tickets, self.grouping, ordering)?;
        self.ordering = ordering;
        Ok(())
    }

    /// Replace the ticket set. Invalid tickets are rejected and the old set is kept.
    pub fn set_tickets(&mut self, tickets: Vec<Ticket>) -> Result<()> {
        self.grid = build_grid(&tickets, self.grouping, self.ordering)?;
        self.tickets = tickets;
        Ok(())
    }
}
