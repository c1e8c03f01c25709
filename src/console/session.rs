//! Console Session
//!
//! Reads command lines, drives the engine, writes responses.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{LayerKvError, Result};
use crate::protocol::{parse_line, write_echo, write_response, Command, Response};

/// Counters reported when a session finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines read from input (including blank and ignored ones)
    pub lines_read: usize,

    /// Commands parsed and executed
    pub commands_executed: usize,

    /// Non-blank lines skipped for an unknown keyword or bad arity
    pub lines_ignored: usize,

    /// Whether the session stopped on END rather than end of input
    pub ended_by_command: bool,
}

/// One console session over a single engine
pub struct Session {
    config: Config,
    engine: Engine,

    /// Set once END has been processed
    ended: bool,

    stats: SessionStats,
}

impl Session {
    /// Create a session with a fresh engine
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: Engine::new(),
            ended: false,
            stats: SessionStats::default(),
        }
    }

    /// Parse and execute one line
    ///
    /// Blank lines, unknown keywords and lines with the wrong number of
    /// arguments produce nothing and leave the engine untouched.
    pub fn process_line(&mut self, line: &str) -> Option<Response> {
        self.process(line).1
    }

    /// Parse and execute one line, also returning the command it held
    fn process(&mut self, line: &str) -> (Option<Command>, Option<Response>) {
        self.stats.lines_read += 1;

        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return (None, None),
            Err(e @ (LayerKvError::Protocol(_) | LayerKvError::Arity { .. })) => {
                tracing::debug!("Ignoring line {}: {}", self.stats.lines_read, e);
                self.stats.lines_ignored += 1;
                return (None, None);
            }
            Err(e) => {
                tracing::warn!("Unexpected parse error on line {}: {}", self.stats.lines_read, e);
                self.stats.lines_ignored += 1;
                return (None, None);
            }
        };

        self.stats.commands_executed += 1;
        if command == Command::End {
            self.ended = true;
            self.stats.ended_by_command = true;
            return (Some(command), None);
        }

        let response = self.engine.execute(command.clone());
        (Some(command), response)
    }

    /// Run the session (blocking until END or end of input)
    ///
    /// Each response is written as its own line and the writer is flushed
    /// before returning. Lines that are not valid UTF-8 are skipped like
    /// any other malformed line.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, writer: &mut W) -> Result<SessionStats> {
        tracing::info!(echo = self.config.echo_commands, "Session started");

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    self.stats.lines_read += 1;
                    self.stats.lines_ignored += 1;
                    tracing::debug!("Ignoring line {}: {}", self.stats.lines_read, e);
                    continue;
                }
            };
            let (command, response) = self.process(line);

            if self.config.echo_commands {
                if let Some(command) = &command {
                    write_echo(writer, command)?;
                }
            }
            if let Some(response) = response {
                write_response(writer, &response, &self.config)?;
            }

            if self.ended {
                break;
            }
        }
        writer.flush()?;

        if self.engine.in_transaction() {
            tracing::info!(
                depth = self.engine.depth(),
                "Session closed with open transactions; uncommitted changes discarded"
            );
        }
        tracing::info!(
            lines = self.stats.lines_read,
            executed = self.stats.commands_executed,
            ignored = self.stats.lines_ignored,
            "Session finished"
        );

        Ok(self.stats)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether END has been received
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
