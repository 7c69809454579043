//! The record seam: how hooks see a host model instance.

use std::collections::HashMap;

use crate::error::Result;
use crate::value::Value;

/// A persistable entity as seen by the field hooks.
///
/// Host frameworks implement this for their model instances (typically via a
/// derive or a small bridge struct). The hooks only need name-based field
/// access plus enough identity to tell a first persist from an update.
pub trait Record {
    /// Name of the concrete model, e.g. `"article"`.
    ///
    /// Used to scope store queries and to derive the instance-type tag.
    fn model_name(&self) -> &str;

    /// Name of the primary key field, `"id"` unless overridden.
    ///
    /// Used to exclude the record itself from uniqueness probes on edit.
    fn primary_key_field(&self) -> &str {
        "id"
    }

    /// The primary key value, if one has been assigned.
    ///
    /// Returns `None` (or a blank value) until the record is first persisted.
    fn primary_key(&self) -> Option<Value>;

    /// Read a field by name. `None` means the model has no such field.
    fn get(&self, field: &str) -> Option<Value>;

    /// Write a field by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`](crate::error::Error::UnknownField)
    /// when the model has no such field.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;

    /// True once the record has been persisted at least once.
    fn is_persisted(&self) -> bool {
        self.primary_key().is_some_and(|pk| !pk.is_blank())
    }
}

/// Name of the primary key field on a [`DynamicRecord`].
pub const DYNAMIC_PK_FIELD: &str = "id";

/// A `HashMap`-backed record for models whose shape is decided at runtime.
///
/// This is the reference implementation of [`Record`]: the bundled
/// [`MemoryStore`](crate::store::MemoryStore) persists these, and the test
/// suites use them as stand-ins for host models. Unlike a derived record it
/// accepts writes to any field name, so `set` never fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicRecord {
    model: String,
    values: HashMap<String, Value>,
}

impl DynamicRecord {
    /// Create an empty record for the named model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            values: HashMap::new(),
        }
    }

    /// Insert a field value (builder-friendly; accepts anything `Into<Value>`).
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Chainable variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Assign the primary key, marking the record as persisted.
    pub fn assign_key(&mut self, key: impl Into<Value>) {
        self.values.insert(DYNAMIC_PK_FIELD.to_string(), key.into());
    }

    /// Iterate over the stored field/value pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Record for DynamicRecord {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn primary_key(&self) -> Option<Value> {
        self.values.get(DYNAMIC_PK_FIELD).cloned()
    }

    fn get(&self, field: &str) -> Option<Value> {
        self.values.get(field).cloned()
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        self.values.insert(field.to_string(), value);
        Ok(())
    }
}
