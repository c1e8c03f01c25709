//! Store Module
//!
//! In-memory mappings the engine is built from.
//!
//! ## Responsibilities
//! - `BaseStore`: committed name → value state
//! - `Layer`: one open transaction block's overlay of values and tombstones
//!
//! ## Data Structure Choice
//! Both wrap a `HashMap`. Lookups are point queries and NUMEQUALTO walks
//! every name anyway, so ordering buys nothing; `Engine::snapshot` sorts
//! when a stable order is wanted.

mod base;
mod layer;

pub use base::BaseStore;
pub use layer::Layer;

/// Entry stored in a transaction layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A live value
    Value(String),

    /// The name was unset inside this layer
    Tombstone,
}

impl Entry {
    /// The stored value, or `None` for a tombstone
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(value) => Some(value),
            Entry::Tombstone => None,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }
}
