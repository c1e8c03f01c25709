//! Command definitions
//!
//! Represents one parsed line of console input.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Set,
    Get,
    Unset,
    NumEqualTo,
    Begin,
    Rollback,
    Commit,
    End,
}

impl CommandType {
    pub const ALL: [CommandType; 8] = [
        CommandType::Set,
        CommandType::Get,
        CommandType::Unset,
        CommandType::NumEqualTo,
        CommandType::Begin,
        CommandType::Rollback,
        CommandType::Commit,
        CommandType::End,
    ];

    /// Canonical (upper-case) keyword
    pub fn keyword(self) -> &'static str {
        match self {
            CommandType::Set => "SET",
            CommandType::Get => "GET",
            CommandType::Unset => "UNSET",
            CommandType::NumEqualTo => "NUMEQUALTO",
            CommandType::Begin => "BEGIN",
            CommandType::Rollback => "ROLLBACK",
            CommandType::Commit => "COMMIT",
            CommandType::End => "END",
        }
    }

    /// Number of arguments following the keyword
    pub fn arity(self) -> usize {
        match self {
            CommandType::Set => 2,
            CommandType::Get | CommandType::Unset | CommandType::NumEqualTo => 1,
            CommandType::Begin | CommandType::Rollback | CommandType::Commit | CommandType::End => 0,
        }
    }

    /// Look up a keyword, ignoring ASCII case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.keyword().eq_ignore_ascii_case(keyword))
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a name to a value
    Set { name: String, value: String },

    /// Print the value of a name
    Get { name: String },

    /// Unset a name
    Unset { name: String },

    /// Count names currently set to a value
    NumEqualTo { value: String },

    /// Open a transaction block
    Begin,

    /// Discard the innermost transaction block
    Rollback,

    /// Apply and close every open transaction block
    Commit,

    /// Stop the session
    End,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Set { .. } => CommandType::Set,
            Command::Get { .. } => CommandType::Get,
            Command::Unset { .. } => CommandType::Unset,
            Command::NumEqualTo { .. } => CommandType::NumEqualTo,
            Command::Begin => CommandType::Begin,
            Command::Rollback => CommandType::Rollback,
            Command::Commit => CommandType::Commit,
            Command::End => CommandType::End,
        }
    }
}
