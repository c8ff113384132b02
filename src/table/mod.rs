//! Table controller - composes sort state, selection state, and the ordered view.
//!
//! The [`Table`] owns the mutable state of one tabular widget:
//! - the dataset (replaceable by the caller at any time)
//! - column descriptors
//! - the active sort (at most one column)
//! - the identity-keyed selection set
//!
//! Presentation code drives it with interaction operations
//! ([`Table::toggle_sort`], [`Table::toggle_row`],
//! [`Table::toggle_select_all`]) and reads the ordered view, sort indicator,
//! and per-row selection flags back out. Selection changes are published as
//! [`TableEvent`]s on an internal queue the presentation layer drains.
//!
//! # Example
//!
//! ```
//! use gridstate::prelude::*;
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("age", "Age").sortable(),
//! ];
//! let rows = vec![
//!     Row::new().set("name", "Ada").set("age", 36),
//!     Row::new().set("name", "Grace").set("age", 45),
//! ];
//! let table = Table::new(columns)
//!     .with_rows(rows)
//!     .with_row_key(RowKey::field("name"));
//!
//! table.toggle_sort("age");
//! table.toggle_row(1);
//! assert!(table.is_selected(&RowId::from("Grace")));
//! ```

mod events;
mod state;

pub use events::{EventResult, TableEvent};
pub use state::{Table, TableId};
