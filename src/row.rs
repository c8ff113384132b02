//! Dynamic row record and the TableRow trait

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FieldError;
use crate::value::Value;

/// Trait for items that can be displayed as rows in a [`Table`](crate::Table).
///
/// The table never mutates rows; it only reads cell values by field name for
/// sorting and identity resolution. A missing field must degrade to
/// [`Value::Null`], never panic.
///
/// [`Row`] implements this for fully dynamic datasets; callers with static
/// row structs implement it directly:
///
/// ```
/// use gridstate::row::TableRow;
/// use gridstate::value::Value;
///
/// #[derive(Clone)]
/// struct User {
///     name: String,
///     age: i32,
/// }
///
/// impl TableRow for User {
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "name" => Value::from(self.name.clone()),
///             "age" => Value::from(self.age),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + Clone + 'static {
    /// The value of the named field, or [`Value::Null`] if absent.
    fn field(&self, name: &str) -> Value;
}

/// A dynamic table row.
///
/// Rows hold cell values as a `HashMap<String, Value>`, allowing datasets of
/// any shape to flow through one table type. Typed getters provide safe
/// access with proper error handling; [`TableRow::field`] provides the
/// infallible access the table core uses.
///
/// A `Row` (de)serializes as a plain JSON object, so a fetched payload
/// deserializes straight into `Vec<Row>`.
///
/// # Example
///
/// ```
/// use gridstate::row::Row;
///
/// let row = Row::new()
///     .set("name", "Contoso")
///     .set("revenue", 1_000_000i64);
///
/// assert_eq!(row.get_str("name").unwrap(), Some("Contoso"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns a mutable reference to all fields.
    pub fn fields_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if the field is missing or has the wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_str(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Text(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(field, "text", other.type_name())),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as i64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "long", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }
}

impl TableRow for Row {
    fn field(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or(Value::Null)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
