//! Response definitions
//!
//! Represents the single line a command prints.

use std::fmt;

use crate::config::Config;

/// Output of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// GET on a name that has a value
    Value(String),

    /// GET on a name that does not exist
    Null,

    /// NUMEQUALTO result
    Count(usize),

    /// COMMIT/ROLLBACK with no open transaction
    NoTransaction,
}

impl Response {
    /// Build the GET response for a resolved lookup
    pub fn from_lookup(value: Option<&str>) -> Self {
        match value {
            Some(v) => Response::Value(v.to_string()),
            None => Response::Null,
        }
    }

    /// Render using the configured output literals
    pub fn render(&self, config: &Config) -> String {
        match self {
            Response::Value(value) => value.clone(),
            Response::Null => config.null_output.clone(),
            Response::Count(count) => count.to_string(),
            Response::NoTransaction => config.no_transaction_output.clone(),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Config::default()))
    }
}
