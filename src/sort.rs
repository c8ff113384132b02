//! Sort state and the stable ordered projection

use std::cmp::Ordering;

use crate::column::Column;
use crate::row::TableRow;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// The active sort: one column key and a direction.
///
/// "No sort" is represented as `Option<Sort>` being `None` (original input
/// order). There is at most one sorted column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column_key: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Projects `rows` into display order. Pure: never mutates the input.
///
/// With no sort, or a sort whose column key matches no column, the input
/// order is returned unchanged. Otherwise rows are ordered by the matched
/// column's cell values under its comparator.
///
/// Stability is a hard requirement: each row is decorated with its original
/// index and ties fall back to index order, so equal keys keep their original
/// relative order in both directions. The tiebreak deliberately ignores the
/// sort direction.
pub fn ordered<T: TableRow>(rows: &[T], columns: &[Column], sort: Option<&Sort>) -> Vec<T> {
    let Some(sort) = sort else {
        return rows.to_vec();
    };
    let Some(column) = columns.iter().find(|c| c.key == sort.column_key) else {
        return rows.to_vec();
    };

    let mut decorated: Vec<(usize, &T)> = rows.iter().enumerate().collect();
    decorated.sort_by(|(ai, a), (bi, b)| {
        let cmp = column.compare(&a.field(&column.data_index), &b.field(&column.data_index));
        let cmp = match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        };
        if cmp == Ordering::Equal {
            ai.cmp(bi)
        } else {
            cmp
        }
    });
    decorated.into_iter().map(|(_, row)| row.clone()).collect()
}
