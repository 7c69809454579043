//! Self-maintaining field helpers for ORM records.
//!
//! `stamped` supplies the pre-persist behaviors that most model layers end up
//! reinventing: creation/modification timestamps, unique slugs derived from a
//! name, sequential order columns, and instance-type tags for single-table
//! polymorphism. Each behavior is a plain function over the
//! [`Record`](stamped_core::Record) and [`Store`](stamped_core::Store) seams,
//! configured with an explicit struct, so they compose freely instead of
//! requiring inheritance from a base model.
//!
//! # Design Philosophy
//!
//! - **Hooks, not base classes**: call the functions you want, in the order
//!   you want, or bundle them with a [`Preparer`].
//! - **Explicit configuration**: field names, uniqueness filters, and
//!   suppression flags travel in config structs with sensible defaults.
//! - **Storage stays external**: the hooks consult the host's query layer
//!   through two methods and never manage transactions; residual races are
//!   caught by the host's constraints.
//!
//! # Example
//!
//! ```
//! use stamped::prelude::*;
//!
//! let mut store = MemoryStore::new();
//! store.insert(DynamicRecord::new("page").with("slug", "about-us"));
//!
//! let mut page = DynamicRecord::new("page").with("title", "About Us!");
//! let preparer = Preparer::new()
//!     .with_type_tag(TypeTagConfig::default())
//!     .with_order(OrderConfig::default())
//!     .with_slug("title", SlugConfig::default())
//!     .with_timestamps(TimestampConfig::default(), TouchOptions::default());
//! preparer.prepare(&mut page, &store, &SystemClock).unwrap();
//!
//! // "about-us" is taken, so the slug gets a numeric suffix.
//! assert_eq!(page.get("slug"), Some(Value::from("about-us-2")));
//! assert_eq!(page.get("instance_type"), Some(Value::from("page")));
//! assert_eq!(page.get("order"), Some(Value::from(1i64)));
//! assert!(page.get("created").is_some());
//! ```

pub mod clock;
pub mod ordering;
pub mod preparer;
pub mod slug;
pub mod timestamp;
pub mod type_tag;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ordering::{OrderConfig, assign_order};
pub use preparer::Preparer;
pub use slug::{DEFAULT_MAX_LENGTH, SlugConfig, assign_slug, slugify};
pub use timestamp::{TimestampConfig, TouchOptions, set_created, set_modified, touch};
pub use type_tag::{TypeTagConfig, assign_type_tag};

// Re-export the contract layer so applications need a single dependency.
pub use stamped_core::{
    DynamicRecord, Error, Filter, FilterOp, FilterSet, MemoryStore, Record, Result, Store, Value,
};

/// One-stop imports for applications.
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::ordering::{OrderConfig, assign_order};
    pub use crate::preparer::Preparer;
    pub use crate::slug::{SlugConfig, assign_slug, slugify};
    pub use crate::timestamp::{TimestampConfig, TouchOptions, set_created, set_modified, touch};
    pub use crate::type_tag::{TypeTagConfig, assign_type_tag};
    pub use stamped_core::{
        DynamicRecord, Filter, FilterOp, FilterSet, MemoryStore, Record, Store, Value,
    };
}
