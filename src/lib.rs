//! Input validation for a text-driven timetable and task manager.
//!
//! Users type commands such as
//! `addtask /on monday /task Submit report /from 9:00 /to 10:30 /type f`.
//! Before a command runs, its line is checked against the command's grammar
//! ([`Command::validate`]) and the values it references can be checked against
//! live state ([`validate_user_input`], [`validate_day`],
//! [`validate_table_existence`]).
//!
//! Nothing here executes commands or mutates state. Every check is a pure,
//! synchronous predicate returning a [`ValidationError`] whose `Display` output
//! is the complete `[ERROR] ...` message to show the user.
//!
//! ## Example
//! ```
//! use timetable_input::{Command, UserList, validate_user_input};
//!
//! let users: UserList = ["alice", "bob"].into_iter().collect();
//! let line = "compare alice bob";
//!
//! let command = Command::detect(line).expect("known keyword");
//! command.validate(line)?;
//!
//! let mut names = line.split_whitespace().skip(1);
//! validate_user_input(names.next().unwrap(), &users)?;
//! validate_user_input(names.next().unwrap(), &users)?;
//! # Ok::<(), timetable_input::ValidationError>(())
//! ```
//!
//! Enable the `logs` feature to emit `tracing` events for rejected input.

pub mod command;
pub mod error;
pub mod registry;
pub mod validation;

pub use crate::command::Command;
pub use crate::error::{ErrorKind, Result, ValidationError};
pub use crate::registry::{User, UserList, UserRegistry};
pub use crate::validation::{validate_day, validate_table_existence, validate_user_input};

/// Detect the command named by `line`'s first token and validate the line.
///
/// Returns `Ok(None)` when the first token is not a known command keyword (or
/// the line is blank); the caller decides how to report that. Otherwise returns
/// the detected command, or the command's format error.
///
/// ```
/// use timetable_input::{Command, validate_line};
///
/// assert_eq!(validate_line("switch bob").unwrap(), Some(Command::Switch));
/// assert!(validate_line("switch bob ").is_err());
/// assert_eq!(validate_line("help").unwrap(), None);
/// ```
pub fn validate_line(line: &str) -> Result<Option<Command>> {
    match Command::detect(line) {
        Some(command) => command.validate(line).map(|()| Some(command)),
        None => Ok(None),
    }
}
