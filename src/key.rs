//! Row identity and key resolution
//!
//! Selection is keyed by identity, not position, so it stays stable across
//! re-sorts and dataset replacement. Identity is derived from a field, a
//! caller-supplied function, or the row's position in the ordered view.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::row::TableRow;
use crate::value::Value;

/// A row identity: string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Numeric identity (integer keys and positional indices).
    Num(i64),
    /// String identity (everything else, stringified).
    Text(String),
}

impl RowId {
    /// Derives an identity from a cell value.
    ///
    /// Integer variants map to [`RowId::Num`]; any other value is
    /// stringified. An ill-chosen key field (null cells, duplicates) still
    /// produces a value; collisions are the caller's responsibility.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(n) => RowId::Num(*n as i64),
            Value::Long(n) => RowId::Num(*n),
            other => RowId::Text(other.to_string()),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Num(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RowId {
    fn from(v: i32) -> Self {
        RowId::Num(v as i64)
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Num(v)
    }
}

impl From<usize> for RowId {
    fn from(v: usize) -> Self {
        RowId::Num(v as i64)
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Text(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Text(v.to_string())
    }
}

impl From<Uuid> for RowId {
    fn from(v: Uuid) -> Self {
        RowId::Text(v.to_string())
    }
}

/// How a table derives each row's identity.
///
/// The default is positional: the row's index in the *currently ordered*
/// view. Positional identity is only stable while the order is; datasets that
/// get re-sorted or replaced should key on a field or a function instead.
pub enum RowKey<T> {
    /// Identity is the row's index in the ordered view.
    Index,
    /// Identity is the value of the named field.
    Field(String),
    /// Identity is computed by a caller-supplied function.
    With(Arc<dyn Fn(&T) -> RowId + Send + Sync>),
}

impl<T: TableRow> RowKey<T> {
    /// Key rows by the named field.
    pub fn field(name: impl Into<String>) -> Self {
        RowKey::Field(name.into())
    }

    /// Key rows by a function of the row.
    pub fn with(f: impl Fn(&T) -> RowId + Send + Sync + 'static) -> Self {
        RowKey::With(Arc::new(f))
    }

    /// Resolves the identity of `row` at `index` in the ordered view.
    ///
    /// Infallible: always produces a value, which may coincide for distinct
    /// rows if the chosen key is not unique.
    pub fn resolve(&self, row: &T, index: usize) -> RowId {
        match self {
            RowKey::Index => RowId::from(index),
            RowKey::Field(name) => RowId::from_value(&row.field(name)),
            RowKey::With(f) => f(row),
        }
    }
}

impl<T> Default for RowKey<T> {
    fn default() -> Self {
        RowKey::Index
    }
}

impl<T> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Index => RowKey::Index,
            RowKey::Field(name) => RowKey::Field(name.clone()),
            RowKey::With(f) => RowKey::With(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for RowKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Index => f.write_str("RowKey::Index"),
            RowKey::Field(name) => write!(f, "RowKey::Field({name:?})"),
            RowKey::With(_) => f.write_str("RowKey::With(..)"),
        }
    }
}
