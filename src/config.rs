//! Configuration for LayerKV
//!
//! Centralized configuration with sensible defaults.

use crate::error::{LayerKvError, Result};

/// Literal printed by GET for a name that does not exist
pub const DEFAULT_NULL_OUTPUT: &str = "NULL";

/// Literal printed by COMMIT/ROLLBACK outside a transaction
pub const DEFAULT_NO_TRANSACTION_OUTPUT: &str = "NO TRANSACTION";

/// Main configuration for a LayerKV console session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Write each executed command back (as `> COMMAND ...`) before its output
    pub echo_commands: bool,

    /// Printed by GET when the name is absent
    pub null_output: String,

    /// Printed by COMMIT/ROLLBACK when no transaction is open
    pub no_transaction_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo_commands: false,
            null_output: DEFAULT_NULL_OUTPUT.to_string(),
            no_transaction_output: DEFAULT_NO_TRANSACTION_OUTPUT.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings that would break the line protocol
    ///
    /// Output literals must be non-empty and fit on a single line.
    pub fn validate(&self) -> Result<()> {
        for (field, literal) in [
            ("null_output", &self.null_output),
            ("no_transaction_output", &self.no_transaction_output),
        ] {
            if literal.is_empty() {
                return Err(LayerKvError::Config(format!("{} must not be empty", field)));
            }
            if literal.contains(['\n', '\r']) {
                return Err(LayerKvError::Config(format!(
                    "{} must be a single line, got {:?}",
                    field, literal
                )));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Echo executed commands before their output
    pub fn echo_commands(mut self, echo: bool) -> Self {
        self.config.echo_commands = echo;
        self
    }

    /// Set the literal printed for absent names
    pub fn null_output(mut self, literal: impl Into<String>) -> Self {
        self.config.null_output = literal.into();
        self
    }

    /// Set the literal printed when no transaction is open
    pub fn no_transaction_output(mut self, literal: impl Into<String>) -> Self {
        self.config.no_transaction_output = literal.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
