//! The storage seam: the two queries the hooks need from the host.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::filter::FilterSet;
use crate::record::{DynamicRecord, Record};
use crate::value::Value;

/// The storage collaborator.
///
/// Implemented by host-framework bridges over their query layer. The hooks
/// only ever ask two questions: "does a sibling matching these filters
/// exist?" (slug uniqueness) and "what is the maximum of this integer column
/// among siblings?" (order assignment). Transaction and constraint guarantees
/// stay with the implementor; the hooks do not serialize concurrent writers.
pub trait Store {
    /// True when at least one record of `model` matches `filters`.
    fn exists(&self, model: &str, filters: &FilterSet) -> Result<bool>;

    /// Maximum value of the integer field among records of `model` matching
    /// `filters`, or `None` when no record matches.
    fn max_int(&self, model: &str, field: &str, filters: &FilterSet) -> Result<Option<i64>>;
}

/// In-memory [`Store`] over [`DynamicRecord`]s.
///
/// Plays the role an embedded test database plays for a full ORM: the
/// integration suites persist records here and run the hooks against it. It
/// hands out sequential integer primary keys on insert.
#[derive(Debug)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<DynamicRecord>>,
    next_key: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            next_key: 1,
        }
    }

    /// Persist a record, assigning a fresh primary key if it has none.
    ///
    /// Returns the stored copy's primary key.
    pub fn insert(&mut self, mut record: DynamicRecord) -> Value {
        if !record.is_persisted() {
            record.assign_key(self.next_key);
            self.next_key += 1;
        }
        let key = record.primary_key().unwrap_or(Value::Null);
        tracing::trace!(model = record.model_name(), key = ?key, "memory store insert");
        self.tables
            .entry(record.model_name().to_string())
            .or_default()
            .push(record);
        key
    }

    /// Number of stored records for a model.
    #[must_use]
    pub fn count(&self, model: &str) -> usize {
        self.tables.get(model).map_or(0, Vec::len)
    }

    /// Iterate over stored records of a model.
    pub fn records(&self, model: &str) -> impl Iterator<Item = &DynamicRecord> {
        self.tables.get(model).into_iter().flatten()
    }
}

impl Store for MemoryStore {
    fn exists(&self, model: &str, filters: &FilterSet) -> Result<bool> {
        Ok(self.records(model).any(|rec| filters.matches(rec)))
    }

    fn max_int(&self, model: &str, field: &str, filters: &FilterSet) -> Result<Option<i64>> {
        let mut max = None;
        for rec in self.records(model).filter(|rec| filters.matches(*rec)) {
            match rec.get(field).unwrap_or(Value::Null) {
                Value::Null => {}
                Value::Int(i) => max = Some(max.map_or(i, |m: i64| m.max(i))),
                other => {
                    return Err(Error::TypeMismatch {
                        field: field.to_string(),
                        expected: "int",
                        actual: other.kind(),
                    });
                }
            }
        }
        Ok(max)
    }
}
