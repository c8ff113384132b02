//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A dynamic value held by a table cell.
///
/// Cells are heterogeneous: a dataset fetched from an API mixes numbers,
/// strings, timestamps, and missing values in the same column. This enum is
/// the common currency between rows, the sort comparator, and presentation
/// layers.
///
/// # Example
///
/// ```
/// use gridstate::value::Value;
///
/// let name = Value::from("Contoso");
/// let revenue = Value::from(1_000_000i64);
/// let empty = Value::Null;
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Text(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Fallback for structured JSON values (arrays, objects).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Both integer variants widened to `i64`.
    fn as_long(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n as i64),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Any numeric variant as `f64`.
    fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Long(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Total-order comparison between two cell values of unknown type.
    ///
    /// Policy, in order:
    /// 1. `Null` sorts before any non-null value; two `Null`s are equal.
    /// 2. If both values are numeric, numeric order decides. Integer pairs
    ///    compare exactly; anything involving a float goes through
    ///    [`f64::total_cmp`], so NaN orders deterministically.
    /// 3. Otherwise both values are stringified and compared lexicographically.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            _ => match (self.as_long(), other.as_long()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => match (self.as_float(), other.as_float()) {
                    (Some(a), Some(b)) => a.total_cmp(&b),
                    _ => self.to_string().cmp(&other.to_string()),
                },
            },
        }
    }
}

impl fmt::Display for Value {
    /// The stringified form used by the comparator fallback and by
    /// presentation layers. `Null` renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Guid(g) => write!(f, "{g}"),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Json(v) => write!(f, "{v}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    /// Scalar JSON values map onto their own variants; arrays and objects
    /// fall back to [`Value::Json`].
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Long(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Json(serde_json::Value::Number(n))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Json(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
