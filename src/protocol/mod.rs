//! Protocol Module
//!
//! Defines the line protocol spoken by the console.
//!
//! ### Commands
//! | Keyword      | Args        | Output                      |
//! |--------------|-------------|-----------------------------|
//! | `SET`        | name value  | none                        |
//! | `GET`        | name        | value, or `NULL`            |
//! | `UNSET`      | name        | none                        |
//! | `NUMEQUALTO` | value       | count                       |
//! | `BEGIN`      |             | none                        |
//! | `ROLLBACK`   |             | none, or `NO TRANSACTION`   |
//! | `COMMIT`     |             | none, or `NO TRANSACTION`   |
//! | `END`        |             | none, ends the session      |
//!
//! Lines with an unknown keyword or the wrong number of arguments are
//! ignored.

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::Response;
pub use codec::{encode_command, parse_line, write_echo, write_response};
