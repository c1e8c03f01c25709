//! Base store
//!
//! The committed state every transaction layer sits on top of.

use std::collections::HashMap;

use super::{Entry, Layer};

/// Committed name → value mapping
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BaseStore {
    data: HashMap<String, String>,
}

impl BaseStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.data.insert(name.into(), value.into());
    }

    /// Remove a name, returning its old value if it was present
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.data.remove(name)
    }

    /// Fold one layer into the store
    ///
    /// Values overwrite and tombstones remove. Consumes the layer so it
    /// cannot be referenced after the merge.
    pub fn apply(&mut self, layer: Layer) {
        for (name, entry) in layer {
            match entry {
                Entry::Value(value) => {
                    self.data.insert(name, value);
                }
                Entry::Tombstone => {
                    self.data.remove(&name);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of names currently holding exactly `value`
    pub fn count_equal(&self, value: &str) -> usize {
        self.data.values().filter(|v| v.as_str() == value).count()
    }

    /// Iterate over committed pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
