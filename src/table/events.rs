//! Interaction operations and the event queue for the Table controller.

use std::sync::atomic::Ordering;

use log::{debug, trace};

use crate::row::TableRow;
use crate::selection::SelectionMode;
use crate::sort::{Sort, SortDirection};

use super::state::Table;

/// Result of an interaction operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The operation did not apply (unknown column, bad index, empty view).
    Ignored,
    /// The operation changed table state.
    Consumed,
}

impl EventResult {
    /// Check if the operation changed state.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// An externally observable state change, queued for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    /// The selection set changed through a row toggle or select-all.
    ///
    /// Carries the selected rows filtered from the current ordered view, in
    /// view order. Not emitted by [`Table::clear_selection`] or by sorting.
    SelectionChanged { rows: Vec<T> },
    /// The sort state changed through a header toggle.
    SortChanged {
        column_key: String,
        direction: SortDirection,
    },
}

impl<T: TableRow> Table<T> {
    /// Toggle sorting on a column header.
    ///
    /// Ignored when the key matches no column or the column is not sortable.
    /// Re-toggling the sorted column flips its direction; toggling a
    /// different column starts ascending.
    pub fn toggle_sort(&self, column_key: &str) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let sortable = guard
            .columns
            .iter()
            .any(|c| c.key == column_key && c.sortable);
        if !sortable {
            return EventResult::Ignored;
        }

        let direction = match &guard.sort {
            Some(sort) if sort.column_key == column_key => sort.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        debug!("table {}: sort by '{column_key}' {direction:?}", self.id());
        guard.sort = Some(Sort {
            column_key: column_key.to_string(),
            direction,
        });
        guard.invalidate();
        guard.events.push_back(TableEvent::SortChanged {
            column_key: column_key.to_string(),
            direction,
        });
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Toggle selection of the row at `index` in the ordered view.
    ///
    /// Single mode selects exactly this row (re-clicking a selected row keeps
    /// it selected); multiple mode adds or removes it. Emits
    /// [`TableEvent::SelectionChanged`] with the view-ordered selected rows.
    pub fn toggle_row(&self, index: usize) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let view = guard.ordered_view();
        let Some(row) = view.get(index) else {
            return EventResult::Ignored;
        };
        let id = guard.row_key.resolve(row, index);
        trace!("table {}: toggle row {index} (id '{id}')", self.id());

        match guard.selection_mode {
            SelectionMode::Single => guard.selection.select_only(id),
            SelectionMode::Multiple => {
                guard.selection.toggle(id);
            }
        }

        let rows = guard.selected_in_view();
        guard.events.push_back(TableEvent::SelectionChanged { rows });
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Toggle select-all over the current ordered view.
    ///
    /// If every visible row is already selected, the selection clears;
    /// otherwise it becomes exactly the visible identities, dropping any
    /// previously selected identities not in the current view. Either way a
    /// [`TableEvent::SelectionChanged`] is emitted. An empty view leaves the
    /// set empty and emits nothing.
    pub fn toggle_select_all(&self) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let ids = guard.ordered_ids();
        if ids.is_empty() {
            // Nothing to select; any stale identities drop here too.
            guard.selection.clear();
            return EventResult::Ignored;
        }

        if ids.iter().all(|id| guard.selection.is_selected(id)) {
            trace!("table {}: select-all -> clear", self.id());
            guard.selection.clear();
            guard
                .events
                .push_back(TableEvent::SelectionChanged { rows: Vec::new() });
        } else {
            trace!("table {}: select-all ({} rows)", self.id(), ids.len());
            guard.selection.select_exactly(ids);
            let rows = guard.ordered_view();
            guard.events.push_back(TableEvent::SelectionChanged { rows });
        }
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Unconditionally empty the selection set.
    ///
    /// A presentation-level explicit action ("clear selection" button); does
    /// not emit through the selection notification path.
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Pop the oldest pending event, if any.
    pub fn poll_event(&self) -> Option<TableEvent<T>> {
        self.inner.write().ok().and_then(|mut g| g.events.pop_front())
    }
}
