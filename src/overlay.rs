//! Local Status Overlay
//!
//! Session-only kanban status per todo id. The remote service has no status
//! field, so this map is the only place a todo's column is remembered.
//! Entries come from explicit reclassification, never from a fetch.

use std::collections::HashMap;

use crate::models::TodoStatus;

/// Mapping from todo id to its user-chosen status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOverlay {
    entries: HashMap<u32, TodoStatus>,
}

impl StatusOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u32) -> Option<TodoStatus> {
        self.entries.get(&id).copied()
    }

    /// Last write wins, no history
    pub fn set(&mut self, id: u32, status: TodoStatus) {
        self.entries.insert(id, status);
    }

    /// Drop the entry of a deleted todo
    pub fn remove(&mut self, id: u32) -> Option<TodoStatus> {
        self.entries.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, TodoStatus)> for StatusOverlay {
    fn from_iter<I: IntoIterator<Item = (u32, TodoStatus)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
