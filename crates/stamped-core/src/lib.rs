//! Core types and traits for the `stamped` field helpers.
//!
//! `stamped-core` is the **contract layer**: it defines the seams between the
//! field hooks and the host ORM, plus the small data model they share.
//!
//! # Role In The Architecture
//!
//! - **Record seam**: [`Record`] is implemented by (or bridged to) the host
//!   framework's model instances so hooks can read and write fields by name.
//! - **Storage seam**: [`Store`] abstracts the two queries the hooks need
//!   from the host's persistence layer: an existence check under filters and
//!   a max aggregate over an integer column.
//! - **Data model**: [`Value`] and [`FilterSet`] represent field values and
//!   caller-supplied scoping filters.
//!
//! The hooks themselves (timestamps, slugs, ordering, type tags) live in the
//! `stamped` facade crate. Reach for `stamped-core` directly when bridging a
//! new storage backend or model representation.

pub mod error;
pub mod filter;
pub mod record;
pub mod store;
pub mod value;

pub use error::{Error, Result};
pub use filter::{Filter, FilterOp, FilterSet};
pub use record::{DynamicRecord, Record};
pub use store::{MemoryStore, Store};
pub use value::Value;
