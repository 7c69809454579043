//! Self-updating created/modified timestamps.
//!
//! Mirrors the classic auto-now pair: `created` is stamped once on first
//! persist, `modified` on every persist. Suppression flags let callers keep
//! manually assigned values, which matters when importing historical data.

use chrono::{DateTime, Utc};
use stamped_core::{Record, Result, Value};

use crate::clock::Clock;

/// Field names for the timestamp pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampConfig {
    /// Field stamped once, at first persist. Default `"created"`.
    pub created_field: String,
    /// Field stamped on every persist. Default `"modified"`.
    pub modified_field: String,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            created_field: "created".to_string(),
            modified_field: "modified".to_string(),
        }
    }
}

impl TimestampConfig {
    /// Override the created field name.
    #[must_use]
    pub fn created_field(mut self, name: impl Into<String>) -> Self {
        self.created_field = name.into();
        self
    }

    /// Override the modified field name.
    #[must_use]
    pub fn modified_field(mut self, name: impl Into<String>) -> Self {
        self.modified_field = name.into();
        self
    }
}

/// Per-instance suppression flags for [`touch`].
///
/// Both flags default to `true` (stamp normally). Clearing a flag keeps an
/// existing value instead of overwriting it; a blank field is still stamped
/// since there is nothing to preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchOptions {
    /// When false, an existing created value is kept as-is.
    pub update_created: bool,
    /// When false, an existing modified value is kept as-is.
    pub update_modified: bool,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            update_created: true,
            update_modified: true,
        }
    }
}

impl TouchOptions {
    /// Keep an existing created value on the next touch.
    #[must_use]
    pub fn preserve_created(mut self) -> Self {
        self.update_created = false;
        self
    }

    /// Keep an existing modified value on the next touch.
    #[must_use]
    pub fn preserve_modified(mut self) -> Self {
        self.update_modified = false;
        self
    }
}

/// Stamp the created/modified pair ahead of a persist.
///
/// - created: assigned only when the field is blank and the record has not
///   been persisted yet. A manually assigned value always survives.
/// - modified: assigned on every call unless `update_modified` is cleared
///   and a value is already present.
pub fn touch<R, C>(record: &mut R, config: &TimestampConfig, opts: &TouchOptions, clock: &C) -> Result<()>
where
    R: Record + ?Sized,
    C: Clock,
{
    let now = clock.now();
    let adding = !record.is_persisted();

    let created = record.get(&config.created_field).unwrap_or(Value::Null);
    if adding && created.is_blank() {
        tracing::trace!(
            model = record.model_name(),
            field = %config.created_field,
            "stamping creation time"
        );
        record.set(&config.created_field, Value::Timestamp(now))?;
    }

    let modified = record.get(&config.modified_field).unwrap_or(Value::Null);
    if opts.update_modified || modified.is_blank() {
        record.set(&config.modified_field, Value::Timestamp(now))?;
    }

    Ok(())
}

/// Manually assign the created timestamp, e.g. when importing data.
///
/// Clears `update_created` on `opts` so a following [`touch`] keeps the
/// value.
pub fn set_created<R>(
    record: &mut R,
    config: &TimestampConfig,
    opts: &mut TouchOptions,
    when: DateTime<Utc>,
) -> Result<()>
where
    R: Record + ?Sized,
{
    opts.update_created = false;
    record.set(&config.created_field, Value::Timestamp(when))
}

/// Manually assign the modified timestamp, e.g. when importing data.
///
/// Clears `update_modified` on `opts` so a following [`touch`] keeps the
/// value.
pub fn set_modified<R>(
    record: &mut R,
    config: &TimestampConfig,
    opts: &mut TouchOptions,
    when: DateTime<Utc>,
) -> Result<()>
where
    R: Record + ?Sized,
{
    opts.update_modified = false;
    record.set(&config.modified_field, Value::Timestamp(when))
}
