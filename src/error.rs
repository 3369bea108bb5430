//! Error type shared by every validator in the crate.
//!
//! Each variant's `Display` output is the complete, user-facing message
//! (always prefixed with `[ERROR]`), so callers can print it as-is.

/// Result type returned by the validators.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// The four kinds of failure a validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The raw line does not match the command's grammar.
    Format,
    /// The referenced user does not exist, or there are no users at all.
    User,
    /// The day token is not one of the seven weekday names.
    Day,
    /// A required timetable handle is absent.
    Presence,
}

/// A rejected input, carrying a ready-to-display message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("[ERROR] Invalid {command} format. Expected format: {template}")]
    Format {
        command: &'static str,
        template: &'static str,
    },

    #[error("[ERROR] Current User List is empty. Please add users.")]
    EmptyRegistry,

    #[error("[ERROR] Invalid User: {0}. Please input a existing user name")]
    UnknownUser(String),

    #[error("[ERROR] Invalid day. Please enter a day from Monday - Sunday.")]
    InvalidDay(String),

    #[error("[ERROR] Timetable does not exist.")]
    MissingTimetable,
}

impl ValidationError {
    /// Which of the four failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Format { .. } => ErrorKind::Format,
            ValidationError::EmptyRegistry | ValidationError::UnknownUser(_) => ErrorKind::User,
            ValidationError::InvalidDay(_) => ErrorKind::Day,
            ValidationError::MissingTimetable => ErrorKind::Presence,
        }
    }
}
