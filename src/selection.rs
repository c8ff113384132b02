//! Selection state
//!
//! Selection uses row identities rather than positions, so it remains stable
//! when the table is re-sorted or its dataset replaced.

use std::collections::HashSet;

use crate::key::RowId;

/// Selection mode, fixed for the table's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one row selected at a time (radio behavior).
    Single,
    /// Any number of rows selected (checkbox behavior).
    #[default]
    Multiple,
}

/// Identity-based selection state.
///
/// The set is owned by the table controller and mutated only through row
/// toggles and select-all; sorting never touches it. This type is mode-free:
/// the controller decides which operation applies for its mode.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<RowId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected identities, sorted for deterministic ordering.
    pub fn ids(&self) -> Vec<RowId> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an identity is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    /// The number of selected identities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggle an identity: add if absent, remove if present (multiple mode).
    /// Returns `true` if the identity is selected afterwards.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Make `id` the only selected identity (single mode).
    ///
    /// Selecting an already-selected identity keeps it selected; there is no
    /// deselect-on-reclick in single mode.
    pub fn select_only(&mut self, id: RowId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Replace the selection with exactly `ids` (select-all).
    ///
    /// Previously selected identities not in `ids` are dropped.
    pub fn select_exactly(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.selected = ids.into_iter().collect();
    }
}
