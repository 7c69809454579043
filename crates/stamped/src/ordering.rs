//! Sequential order-field assignment.

use stamped_core::{Record, Result, Store, Value};

/// Configuration for [`assign_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfig {
    /// Field receiving the position. Default `"order"`.
    pub order_field: String,
    /// Filters defining the sibling group the sequence runs over.
    pub filters: stamped_core::FilterSet,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            order_field: "order".to_string(),
            filters: stamped_core::FilterSet::new(),
        }
    }
}

impl OrderConfig {
    /// Override the order field name.
    #[must_use]
    pub fn order_field(mut self, name: impl Into<String>) -> Self {
        self.order_field = name.into();
        self
    }

    /// Scope the sequence to records matching these filters.
    #[must_use]
    pub fn filters(mut self, filters: stamped_core::FilterSet) -> Self {
        self.filters = filters;
        self
    }
}

/// Assign the next position in the sibling group.
///
/// Leaves an already-set field alone. Otherwise queries the store for the
/// maximum existing value under `config.filters` and assigns `max + 1`, or
/// `1` when no sibling exists yet.
pub fn assign_order<R, S>(record: &mut R, store: &S, config: &OrderConfig) -> Result<()>
where
    R: Record + ?Sized,
    S: Store + ?Sized,
{
    let field = config.order_field.as_str();
    let current = record.get(field).unwrap_or(Value::Null);
    if !current.is_blank() {
        return Ok(());
    }

    let max = store.max_int(record.model_name(), field, &config.filters)?;
    let next = max.map_or(1, |m| m + 1);
    tracing::debug!(
        model = record.model_name(),
        field,
        position = next,
        "assigning order position"
    );
    record.set(field, Value::Int(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamped_core::{DynamicRecord, FilterSet, MemoryStore};

    #[test]
    fn test_first_record_gets_position_one() {
        let store = MemoryStore::new();
        let mut rec = DynamicRecord::new("task");
        assign_order(&mut rec, &store, &OrderConfig::default()).unwrap();
        assert_eq!(rec.get("order"), Some(Value::Int(1)));
    }

    #[test]
    fn test_next_record_gets_max_plus_one() {
        let mut store = MemoryStore::new();
        store.insert(DynamicRecord::new("task").with("order", 4i64));
        store.insert(DynamicRecord::new("task").with("order", 9i64));

        let mut rec = DynamicRecord::new("task");
        assign_order(&mut rec, &store, &OrderConfig::default()).unwrap();
        assert_eq!(rec.get("order"), Some(Value::Int(10)));
    }

    #[test]
    fn test_existing_position_is_left_alone() {
        let mut store = MemoryStore::new();
        store.insert(DynamicRecord::new("task").with("order", 9i64));

        let mut rec = DynamicRecord::new("task").with("order", 3i64);
        assign_order(&mut rec, &store, &OrderConfig::default()).unwrap();
        assert_eq!(rec.get("order"), Some(Value::Int(3)));
    }

    #[test]
    fn test_sequence_is_scoped_per_filter_group() {
        let mut store = MemoryStore::new();
        store.insert(
            DynamicRecord::new("task")
                .with("list", "home")
                .with("order", 5i64),
        );

        let home = OrderConfig::default().filters(FilterSet::new().eq("list", "home"));
        let work = OrderConfig::default().filters(FilterSet::new().eq("list", "work"));

        let mut rec = DynamicRecord::new("task").with("list", "home");
        assign_order(&mut rec, &store, &home).unwrap();
        assert_eq!(rec.get("order"), Some(Value::Int(6)));

        let mut rec = DynamicRecord::new("task").with("list", "work");
        assign_order(&mut rec, &store, &work).unwrap();
        assert_eq!(rec.get("order"), Some(Value::Int(1)));
    }

    #[test]
    fn test_custom_field_name() {
        let mut store = MemoryStore::new();
        store.insert(DynamicRecord::new("task").with("position", 2i64));

        let config = OrderConfig::default().order_field("position");
        let mut rec = DynamicRecord::new("task");
        assign_order(&mut rec, &store, &config).unwrap();
        assert_eq!(rec.get("position"), Some(Value::Int(3)));
    }
}
