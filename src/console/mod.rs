//! Console Module
//!
//! The line-oriented front end.
//!
//! ## Architecture
//! - One session per input stream
//! - Each line is parsed, executed against the session's engine, and its
//!   response (if any) written as one output line
//! - `END` or end of input closes the session

mod session;

pub use session::{Session, SessionStats};
