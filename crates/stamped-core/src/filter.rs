//! Caller-supplied scoping filters for uniqueness and aggregate queries.
//!
//! A [`FilterSet`] is the hook-level equivalent of a WHERE clause: a
//! conjunction of simple field comparisons. Callers use it to scope slug
//! uniqueness and order assignment to a sibling group ("slugs unique per
//! category", "order restarts per parent"). Backends translate it into their
//! own query language; [`FilterSet::matches`] gives the reference in-memory
//! semantics used by the bundled memory store.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::Value;

/// Comparison operator for a single filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterOp {
    /// Field equals the value.
    #[default]
    Eq,
    /// Field does not equal the value.
    Ne,
}

/// A single field comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Field name on the record.
    pub field: String,
    /// Comparison operator.
    pub op: FilterOp,
    /// Value to compare against.
    pub value: Value,
}

impl Filter {
    /// Create an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        }
    }

    /// Create an inequality filter.
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Ne,
            value: value.into(),
        }
    }

    /// Evaluate this filter against a record.
    ///
    /// A missing field reads as `Null`, so `eq("parent", Value::Null)`
    /// matches records that never set the field.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        let actual = record.get(&self.field).unwrap_or(Value::Null);
        match self.op {
            FilterOp::Eq => actual == self.value,
            FilterOp::Ne => actual != self.value,
        }
    }
}

/// An AND-combined set of filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Create an empty filter set (matches every record).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter (builder style).
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(field, value));
        self
    }

    /// Add an inequality filter (builder style).
    #[must_use]
    pub fn ne(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::ne(field, value));
        self
    }

    /// Append a pre-built filter.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Number of filters in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when the set contains no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over the filters.
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    /// Evaluate the conjunction against a record.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
