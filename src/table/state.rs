//! Table controller state.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::warn;

use crate::column::Column;
use crate::key::{RowId, RowKey};
use crate::row::TableRow;
use crate::selection::{Selection, SelectionMode};
use crate::sort::{self, Sort};

use super::events::TableEvent;

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Internal state for the Table controller.
pub(super) struct TableInner<T: TableRow> {
    /// The dataset, in the caller's original order.
    pub rows: Vec<T>,
    /// Column descriptors.
    pub columns: Vec<Column>,
    /// How row identities are derived.
    pub row_key: RowKey<T>,
    /// Selection mode, fixed at construction.
    pub selection_mode: SelectionMode,
    /// Active sort, or `None` for original order.
    pub sort: Option<Sort>,
    /// Identity-keyed selection state.
    pub selection: Selection,
    /// Cached ordered view; `None` after rows, columns, or sort change.
    pub ordered: Option<Vec<T>>,
    /// Pending events for the presentation layer to drain.
    pub events: VecDeque<TableEvent<T>>,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column>) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            row_key: RowKey::default(),
            selection_mode: SelectionMode::default(),
            sort: None,
            selection: Selection::new(),
            ordered: None,
            events: VecDeque::new(),
        }
    }

    /// Drop the cached ordered view. Called whenever rows, columns, or the
    /// sort state change.
    pub(super) fn invalidate(&mut self) {
        self.ordered = None;
    }

    /// The ordered view, recomputed lazily and cached until invalidated.
    pub(super) fn ordered_view(&mut self) -> Vec<T> {
        if self.ordered.is_none() {
            self.ordered = Some(sort::ordered(&self.rows, &self.columns, self.sort.as_ref()));
        }
        self.ordered.clone().unwrap_or_default()
    }

    /// Identities of the ordered view, resolved in view order.
    pub(super) fn ordered_ids(&mut self) -> Vec<RowId> {
        let view = self.ordered_view();
        view.iter()
            .enumerate()
            .map(|(i, row)| self.row_key.resolve(row, i))
            .collect()
    }

    /// The selected rows, filtered from the ordered view in view order.
    pub(super) fn selected_in_view(&mut self) -> Vec<T> {
        let view = self.ordered_view();
        view.into_iter()
            .enumerate()
            .filter(|(i, row)| {
                let id = self.row_key.resolve(row, *i);
                self.selection.is_selected(&id)
            })
            .map(|(_, row)| row)
            .collect()
    }

    /// True iff the ordered view is non-empty and every view identity is
    /// selected.
    pub(super) fn all_selected(&mut self) -> bool {
        let ids = self.ordered_ids();
        !ids.is_empty() && ids.iter().all(|id| self.selection.is_selected(id))
    }
}

/// The table controller: one coherent unit over sorting and selection.
///
/// `Table<T>` is a cheap-to-clone shared handle; clones observe and mutate
/// the same state. All operations are synchronous and atomic per interaction:
/// each takes the lock once, reads current state, computes the next state,
/// and publishes it.
///
/// `T` is any [`TableRow`]: the dynamic [`Row`](crate::row::Row) record, or a
/// caller struct exposing its fields by name.
pub struct Table<T: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render scheduling.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: TableRow> Table<T> {
    /// Create a new empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Builder: set the initial dataset.
    pub fn with_rows(self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Builder: set the selection mode (default [`SelectionMode::Multiple`]).
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_mode = mode;
        }
        self
    }

    /// Builder: set how row identities are derived (default positional).
    pub fn with_row_key(self, row_key: RowKey<T>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.row_key = row_key;
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Dataset
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in the caller's original order.
    pub fn rows(&self) -> Vec<T> {
        self.inner.read().map(|g| g.rows.clone()).unwrap_or_default()
    }

    /// Get the column descriptors.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Replace the dataset.
    ///
    /// Legal at any time (e.g. after a fetch). The ordered view is
    /// recomputed on next read. The selection set is kept as-is without
    /// identity-continuity validation; identities that no longer resolve to a
    /// row simply stop matching.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.invalidate();
            self.warn_duplicate_ids(&guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the column descriptors.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.columns = columns;
            guard.invalidate();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Duplicate identities are not defended against; selection behaves as
    /// last-write-wins. Surface them once per dataset replacement.
    fn warn_duplicate_ids(&self, guard: &TableInner<T>) {
        if matches!(guard.row_key, RowKey::Index) {
            return;
        }
        let mut seen = HashSet::new();
        for (i, row) in guard.rows.iter().enumerate() {
            let id = guard.row_key.resolve(row, i);
            if !seen.insert(id.clone()) {
                warn!(
                    "table {}: duplicate row identity '{id}'; selection is last-write-wins",
                    self.id
                );
                return;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Sort state
    // -------------------------------------------------------------------------

    /// The active sort, or `None` for original order.
    pub fn sort(&self) -> Option<Sort> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// The current display order.
    ///
    /// Recomputed lazily and cached until the rows, columns, or sort state
    /// change.
    pub fn ordered_rows(&self) -> Vec<T> {
        if let Ok(guard) = self.inner.read()
            && let Some(ordered) = &guard.ordered
        {
            return ordered.clone();
        }
        self.inner
            .write()
            .map(|mut g| g.ordered_view())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    /// All selected identities, sorted for deterministic ordering.
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.inner
            .read()
            .map(|g| g.selection.ids())
            .unwrap_or_default()
    }

    /// The selected rows, in the ordered view's order (not insertion order).
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .write()
            .map(|mut g| g.selected_in_view())
            .unwrap_or_default()
    }

    /// Check if an identity is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Check if the row at `index` in the ordered view is selected.
    pub fn is_selected_at(&self, index: usize) -> bool {
        self.inner
            .write()
            .map(|mut g| {
                let view = g.ordered_view();
                match view.get(index) {
                    Some(row) => {
                        let id = g.row_key.resolve(row, index);
                        g.selection.is_selected(&id)
                    }
                    None => false,
                }
            })
            .unwrap_or(false)
    }

    /// True iff the ordered view is non-empty and every row in it is
    /// selected. Drives the header checkbox's checked state.
    pub fn is_all_selected(&self) -> bool {
        self.inner
            .write()
            .map(|mut g| g.all_selected())
            .unwrap_or(false)
    }

    /// True iff some but not all visible rows are selected. Drives the
    /// header checkbox's indeterminate (tri-state) affordance.
    pub fn is_partially_selected(&self) -> bool {
        self.inner
            .write()
            .map(|mut g| !g.selection.is_empty() && !g.all_selected())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: TableRow> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
