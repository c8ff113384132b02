//! Column descriptors

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A caller-supplied comparison override for one column.
pub type Comparator = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Horizontal alignment for column content. Presentation metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// Columns define the structure of the table: a unique `key` that identifies
/// the column for sort-state tracking, a `data_index` naming the row field
/// the column displays and sorts by, and whether the column is sortable.
/// Title, alignment, and width are carried for presentation layers; the core
/// never reads them.
///
/// # Examples
///
/// ```
/// use gridstate::column::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("name", "Name").sortable(),
///     Column::new("status", "Status").align(Alignment::Center).width(15),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Unique column key, used for sort-state tracking.
    pub key: String,
    /// Column header text.
    pub title: String,
    /// Row field this column displays and sorts by.
    pub data_index: String,
    /// Whether toggling this column's header changes the sort.
    pub sortable: bool,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Width hint in terminal columns / arbitrary units.
    pub width: Option<u16>,
    comparator: Option<Comparator>,
}

impl Column {
    /// Create a new column. `data_index` defaults to the key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            align: Alignment::Left,
            width: None,
            comparator: None,
        }
    }

    /// Sort by a different row field than the column key.
    pub fn data_index(mut self, field: impl Into<String>) -> Self {
        self.data_index = field.into();
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns respond to [`Table::toggle_sort`](crate::Table::toggle_sort);
    /// toggling a non-sortable column is ignored.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the column width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the value comparison for this column.
    ///
    /// Replaces [`Value::total_cmp`] when sorting by this column.
    pub fn with_comparator(
        mut self,
        f: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Compare two cell values under this column's ordering.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match &self.comparator {
            Some(f) => f(a, b),
            None => a.total_cmp(b),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("data_index", &self.data_index)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .finish()
    }
}
