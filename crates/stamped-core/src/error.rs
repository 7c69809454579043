//! Error types shared across the stamped crates.

use thiserror::Error;

/// Convenience alias used throughout the stamped crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the field hooks and the storage seam.
#[derive(Debug, Error)]
pub enum Error {
    /// A hook referenced a field the record does not carry.
    #[error("unknown field `{field}` on model `{model}`")]
    UnknownField {
        /// Model name as reported by the record.
        model: String,
        /// The missing field name.
        field: String,
    },

    /// A field held a value of an unexpected type for the operation.
    #[error("field `{field}` holds {actual}, expected {expected}")]
    TypeMismatch {
        /// The offending field name.
        field: String,
        /// Human-readable name of the expected value kind.
        expected: &'static str,
        /// Human-readable name of the value kind actually found.
        actual: &'static str,
    },

    /// The storage collaborator failed to answer a query.
    #[error("storage query failed: {0}")]
    Store(String),
}

impl Error {
    /// Build an [`Error::UnknownField`] from borrowed names.
    pub fn unknown_field(model: &str, field: &str) -> Self {
        Error::UnknownField {
            model: model.to_string(),
            field: field.to_string(),
        }
    }

    /// Build an [`Error::Store`] from any displayable backend error.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Error::Store(err.to_string())
    }
}
