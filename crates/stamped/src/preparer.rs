//! Bundled pre-persist pipeline.
//!
//! Each hook is independently callable; `Preparer` is the convenience layer
//! for the common case of running several of them before every save, in a
//! fixed order: type tag, order, slug, timestamps.

use stamped_core::{Record, Result, Store, Value};

use crate::clock::Clock;
use crate::ordering::{OrderConfig, assign_order};
use crate::slug::{SlugConfig, assign_slug};
use crate::timestamp::{TimestampConfig, TouchOptions, touch};
use crate::type_tag::{TypeTagConfig, assign_type_tag};

/// A reusable bundle of pre-persist hooks.
///
/// Configure once per model, then call [`prepare`](Self::prepare) on every
/// record ahead of handing it to the persistence layer. Hooks that were not
/// configured are skipped.
#[derive(Debug, Clone, Default)]
pub struct Preparer {
    type_tag: Option<TypeTagConfig>,
    order: Option<OrderConfig>,
    slug: Option<(String, SlugConfig)>,
    timestamps: Option<(TimestampConfig, TouchOptions)>,
}

impl Preparer {
    /// Create a preparer with no hooks configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable instance-type tagging.
    #[must_use]
    pub fn with_type_tag(mut self, config: TypeTagConfig) -> Self {
        self.type_tag = Some(config);
        self
    }

    /// Enable order assignment.
    #[must_use]
    pub fn with_order(mut self, config: OrderConfig) -> Self {
        self.order = Some(config);
        self
    }

    /// Enable slug assignment, reading the base name from `source_field`.
    #[must_use]
    pub fn with_slug(mut self, source_field: impl Into<String>, config: SlugConfig) -> Self {
        self.slug = Some((source_field.into(), config));
        self
    }

    /// Enable timestamp maintenance.
    #[must_use]
    pub fn with_timestamps(mut self, config: TimestampConfig, opts: TouchOptions) -> Self {
        self.timestamps = Some((config, opts));
        self
    }

    /// Run the configured hooks against a record.
    pub fn prepare<R, S, C>(&self, record: &mut R, store: &S, clock: &C) -> Result<()>
    where
        R: Record + ?Sized,
        S: Store + ?Sized,
        C: Clock,
    {
        if let Some(config) = &self.type_tag {
            assign_type_tag(record, config)?;
        }
        if let Some(config) = &self.order {
            assign_order(record, store, config)?;
        }
        if let Some((source_field, config)) = &self.slug {
            let name = record
                .get(source_field)
                .unwrap_or(Value::Null)
                .as_str()
                .unwrap_or("")
                .to_string();
            assign_slug(record, store, &name, config)?;
        }
        if let Some((config, opts)) = &self.timestamps {
            touch(record, config, opts, clock)?;
        }
        Ok(())
    }
}
