//! Protocol codec
//!
//! Parsing and rendering functions for the line protocol.
//!
//! ## Line Format
//! ```text
//! KEYWORD [ARG [ARG]]\n
//! ```
//! Tokens are separated by whitespace. The keyword is case-insensitive;
//! arguments are case-sensitive and passed through untouched.

use std::io::Write;

use crate::config::Config;
use crate::error::{LayerKvError, Result};
use super::{Command, CommandType, Response};

// =============================================================================
// Command Parsing/Rendering
// =============================================================================

/// Parse one input line
///
/// Returns `Ok(None)` for a blank line. Unknown keywords and wrong
/// argument counts are errors; the session treats both as a skipped line.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let mut tokens = line.split_whitespace();

    let keyword = match tokens.next() {
        Some(keyword) => keyword,
        None => return Ok(None),
    };

    let command_type = CommandType::from_keyword(keyword).ok_or_else(|| {
        LayerKvError::Protocol(format!("Unknown command: {}", keyword))
    })?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != command_type.arity() {
        return Err(LayerKvError::Arity {
            keyword: command_type.keyword(),
            expected: command_type.arity(),
            got: args.len(),
        });
    }

    let command = match command_type {
        CommandType::Set => Command::Set {
            name: args[0].to_string(),
            value: args[1].to_string(),
        },
        CommandType::Get => Command::Get {
            name: args[0].to_string(),
        },
        CommandType::Unset => Command::Unset {
            name: args[0].to_string(),
        },
        CommandType::NumEqualTo => Command::NumEqualTo {
            value: args[0].to_string(),
        },
        CommandType::Begin => Command::Begin,
        CommandType::Rollback => Command::Rollback,
        CommandType::Commit => Command::Commit,
        CommandType::End => Command::End,
    };

    Ok(Some(command))
}

/// Render a command as a canonical line (no trailing newline)
///
/// Upper-case keyword, single spaces between tokens.
pub fn encode_command(command: &Command) -> String {
    let keyword = command.command_type().keyword();
    match command {
        Command::Set { name, value } => format!("{} {} {}", keyword, name, value),
        Command::Get { name } | Command::Unset { name } => format!("{} {}", keyword, name),
        Command::NumEqualTo { value } => format!("{} {}", keyword, value),
        Command::Begin | Command::Rollback | Command::Commit | Command::End => {
            keyword.to_string()
        }
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a response as one line
pub fn write_response<W: Write>(writer: &mut W, response: &Response, config: &Config) -> Result<()> {
    writeln!(writer, "{}", response.render(config))?;
    Ok(())
}

/// Write an echoed command as one `> `-prefixed line
pub fn write_echo<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    writeln!(writer, "> {}", encode_command(command))?;
    Ok(())
}
