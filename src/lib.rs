//! Headless state for tabular UI widgets.
//!
//! `gridstate` owns the data-ordering and selection state machine of a table
//! widget - how rows are identified, sorted, and selected - independent of
//! how they are painted. A presentation layer (TUI, GUI, web) renders the
//! ordered view, wires headers and checkboxes/radios to the controller's
//! operations, and drains the event queue.
//!
//! ```
//! use gridstate::prelude::*;
//!
//! let table = Table::new(vec![Column::new("age", "Age").sortable()])
//!     .with_rows(vec![
//!         Row::new().set("id", 1).set("age", 45),
//!         Row::new().set("id", 2).set("age", 36),
//!     ])
//!     .with_row_key(RowKey::field("id"));
//!
//! table.toggle_sort("age");
//! table.toggle_row(0); // youngest row is now first
//! assert!(table.is_selected(&RowId::from(2)));
//! ```

pub mod column;
pub mod error;
pub mod key;
pub mod row;
pub mod selection;
pub mod sort;
pub mod table;
pub mod value;

pub use table::Table;

pub mod prelude {
    pub use crate::column::{Alignment, Column, Comparator};
    pub use crate::error::FieldError;
    pub use crate::key::{RowId, RowKey};
    pub use crate::row::{Row, TableRow};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::sort::{Sort, SortDirection};
    pub use crate::table::{EventResult, Table, TableEvent, TableId};
    pub use crate::value::Value;
}
