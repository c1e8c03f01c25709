//! Transaction layer
//!
//! HashMap-based overlay holding the net effect of one transaction block.

use std::collections::hash_map::{self, HashMap};

use super::Entry;

/// Overlay of values and tombstones for one open transaction
///
/// Later writes to the same name replace earlier ones, so a layer always
/// holds at most one entry per name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Layer {
    entries: HashMap<String, Entry>,
}

impl Layer {
    /// Create a new empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry recorded for a name in this layer
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Record a value, replacing any earlier value or tombstone
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Entry::Value(value.into()));
    }

    /// Record a tombstone, even if nothing below holds the name
    pub fn delete(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), Entry::Tombstone);
    }

    /// Number of names touched in this layer (values and tombstones)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tombstones in this layer
    pub fn tombstone_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_tombstone()).count()
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

impl IntoIterator for Layer {
    type Item = (String, Entry);
    type IntoIter = hash_map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
