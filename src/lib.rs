//! # LayerKV
//!
//! An in-memory key-value store with:
//! - Nested transactions (BEGIN / ROLLBACK / COMMIT)
//! - Tombstones for deletes inside a transaction
//! - Aggregate value counts over the effective state
//! - A line-oriented command console
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Console Session                           │
//! │            (one line in, at most one line out)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Layer stack │ ──────▶  │  BaseStore  │
//!   │ (overlays)  │  COMMIT  │ (committed) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod engine;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LayerKvError, Result};
pub use config::Config;
pub use engine::Engine;
pub use console::{Session, SessionStats};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of LayerKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
