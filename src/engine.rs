//! Engine Module
//!
//! The layered transactional storage engine.
//!
//! ## Responsibilities
//! - Hold the committed `BaseStore` and the stack of open `Layer`s
//! - Resolve reads through the stack, newest layer first
//! - Route writes to the innermost open layer (or the base store)
//! - Flatten every layer into the base store on COMMIT
//! - Answer NUMEQUALTO against the effective state without mutating it

use std::collections::{BTreeMap, HashMap};

use crate::error::{LayerKvError, Result};
use crate::protocol::{Command, Response};
use crate::store::{BaseStore, Entry, Layer};

/// The main storage engine
///
/// ## Layout
///
/// ```text
///   stack[depth-1]  ← innermost (writes land here)
///   ...
///   stack[0]        ← outermost
///   base            ← committed state
/// ```
///
/// An empty stack means no transaction is in progress, and every write
/// goes straight to `base`.
///
/// ## Concurrency
/// Single-threaded: every operation takes `&mut self` or `&self` and runs
/// to completion. Nothing is shared, so nothing is locked.
#[derive(Debug, Default)]
pub struct Engine {
    /// Committed state
    base: BaseStore,

    /// Open transaction layers, oldest first
    stack: Vec<Layer>,
}

impl Engine {
    /// Create an engine with an empty store and no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation. `END` is a session
    /// concern and produces nothing here. A COMMIT/ROLLBACK outside a
    /// transaction becomes `Response::NoTransaction`.
    pub fn execute(&mut self, command: Command) -> Option<Response> {
        tracing::trace!(?command, depth = self.depth(), "execute");

        match command {
            Command::Set { name, value } => {
                self.set(name, value);
                None
            }
            Command::Get { name } => Some(Response::from_lookup(self.get(&name))),
            Command::Unset { name } => {
                self.unset(&name);
                None
            }
            Command::NumEqualTo { value } => Some(Response::Count(self.num_equal_to(&value))),
            Command::Begin => {
                self.begin();
                None
            }
            Command::Rollback => self.rollback().is_err().then_some(Response::NoTransaction),
            Command::Commit => self.commit().is_err().then_some(Response::NoTransaction),
            Command::End => None,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the effective value of a name
    ///
    /// Search order:
    /// 1. Open layers (innermost to outermost); the first entry decides,
    ///    and a tombstone hides anything below it
    /// 2. Base store
    pub fn get(&self, name: &str) -> Option<&str> {
        for layer in self.stack.iter().rev() {
            if let Some(entry) = layer.get(name) {
                return entry.as_value();
            }
        }
        self.base.get(name)
    }

    /// Count names whose effective value equals `value`
    ///
    /// Builds a borrowed overlay of only the names the open layers touch,
    /// then adjusts the base store's count by the difference. Equivalent
    /// to calling `get` for every known name and tallying.
    pub fn num_equal_to(&self, value: &str) -> usize {
        let mut count = self.base.count_equal(value);
        if self.stack.is_empty() {
            return count;
        }

        // Effective entry of every name touched by some layer, newest wins
        let mut touched: HashMap<&str, &Entry> = HashMap::new();
        for layer in &self.stack {
            for (name, entry) in layer.iter() {
                touched.insert(name, entry);
            }
        }

        for (name, entry) in touched {
            if self.base.get(name) == Some(value) {
                count -= 1;
            }
            if entry.as_value() == Some(value) {
                count += 1;
            }
        }
        count
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Set a name, shadowing it in the innermost layer if one is open
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        match self.stack.last_mut() {
            Some(layer) => layer.put(name, value),
            None => self.base.set(name, value),
        }
    }

    /// Unset a name
    ///
    /// Inside a transaction this always records a tombstone, so that the
    /// name stays hidden even if an outer layer or the base store sets it.
    pub fn unset(&mut self, name: &str) {
        match self.stack.last_mut() {
            Some(layer) => layer.delete(name),
            None => {
                self.base.remove(name);
            }
        }
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Open a new (possibly nested) transaction block
    pub fn begin(&mut self) {
        self.stack.push(Layer::new());
        tracing::debug!(depth = self.depth(), "BEGIN");
    }

    /// Discard the innermost transaction block
    ///
    /// Errors with `NoTransaction` (and changes nothing) at depth 0.
    pub fn rollback(&mut self) -> Result<()> {
        let layer = self.stack.pop().ok_or(LayerKvError::NoTransaction)?;
        tracing::debug!(
            depth = self.depth(),
            discarded = layer.len(),
            tombstones = layer.tombstone_count(),
            "ROLLBACK"
        );
        Ok(())
    }

    /// Apply every open block to the base store and close them all
    ///
    /// Layers are merged oldest first so the innermost write wins.
    /// Errors with `NoTransaction` (and changes nothing) at depth 0.
    pub fn commit(&mut self) -> Result<()> {
        if self.stack.is_empty() {
            return Err(LayerKvError::NoTransaction);
        }

        let closed = self.stack.len();
        let mut tombstones = 0;
        for layer in self.stack.drain(..) {
            tombstones += layer.tombstone_count();
            self.base.apply(layer);
        }

        tracing::debug!(closed, tombstones, committed = self.base.len(), "COMMIT");
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of open transaction blocks
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of committed names
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    /// The committed state
    pub fn base(&self) -> &BaseStore {
        &self.base
    }

    /// The effective state, in name order
    ///
    /// Base store overlaid with every open layer, oldest first, exactly as
    /// COMMIT would leave it. Nothing is mutated.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let mut view: BTreeMap<String, String> = self
            .base
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        for layer in &self.stack {
            for (name, entry) in layer.iter() {
                match entry {
                    Entry::Value(value) => {
                        view.insert(name.to_string(), value.clone());
                    }
                    Entry::Tombstone => {
                        view.remove(name);
                    }
                }
            }
        }
        view
    }
}
