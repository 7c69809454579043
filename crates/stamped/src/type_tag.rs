//! Instance-type tagging for single-table polymorphism.
//!
//! Hierarchies sharing one table need a discriminator column saying which
//! concrete type each row is. This hook fills that column from the record's
//! model name when the caller has not set it.

use stamped_core::{Record, Result, Value};

/// Configuration for [`assign_type_tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTagConfig {
    /// Field receiving the tag. Default `"instance_type"`.
    pub type_field: String,
}

impl Default for TypeTagConfig {
    fn default() -> Self {
        Self {
            type_field: "instance_type".to_string(),
        }
    }
}

impl TypeTagConfig {
    /// Override the tag field name.
    #[must_use]
    pub fn type_field(mut self, name: impl Into<String>) -> Self {
        self.type_field = name.into();
        self
    }
}

/// Fill the type field with the lowercased model name, if it is blank.
pub fn assign_type_tag<R>(record: &mut R, config: &TypeTagConfig) -> Result<()>
where
    R: Record + ?Sized,
{
    let current = record.get(&config.type_field).unwrap_or(Value::Null);
    if !current.is_blank() {
        return Ok(());
    }

    let tag = record.model_name().to_lowercase();
    tracing::debug!(
        model = record.model_name(),
        field = %config.type_field,
        tag = %tag,
        "assigning instance type tag"
    );
    record.set(&config.type_field, Value::Text(tag))
}
