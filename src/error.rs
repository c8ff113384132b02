//! FieldError for Row accessors

/// Error type for typed field access on [`Row`](crate::row::Row).
///
/// Only the typed getters return errors. The table state machine itself never
/// fails: unknown columns, bad indices, and empty datasets degrade to the
/// nearest safe default.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the row.
    #[error("field '{field}' not found in row")]
    Missing { field: String },

    /// The field exists but has a different type than requested.
    #[error("field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
