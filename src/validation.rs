//! Checks on individual values pulled out of a well-formed command line.
//!
//! Unlike the grammar checks in [`crate::command`], these look at live state
//! (the user registry) or a fixed enumeration (the weekdays). Each one returns
//! a [`ValidationError`] whose message is ready for terminal output.

use crate::error::{Result, ValidationError};
use crate::registry::UserRegistry;
use time::Weekday;

/// Check that `input` names an existing user.
///
/// ## Behavior
/// - Fails with [`ValidationError::EmptyRegistry`] when the registry has no users,
///   regardless of `input`.
/// - Otherwise walks the registry in order and succeeds on the first name
///   equal to `input`. The comparison is **case-sensitive**.
/// - Fails with [`ValidationError::UnknownUser`] if no name matches.
///
/// ## Examples
/// ```
/// use timetable_input::{UserList, validate_user_input};
///
/// let users: UserList = ["alice", "bob"].into_iter().collect();
/// assert!(validate_user_input("alice", &users).is_ok());
/// assert!(validate_user_input("Alice", &users).is_err());
/// ```
pub fn validate_user_input<R>(input: &str, registry: &R) -> Result<()>
where
    R: UserRegistry + ?Sized,
{
    let mut names = registry.user_names().peekable();
    if names.peek().is_none() {
        #[cfg(feature = "logs")]
        tracing::debug!(input, "user lookup against empty registry");
        return Err(ValidationError::EmptyRegistry);
    }

    if names.any(|name| name == input) {
        return Ok(());
    }

    #[cfg(feature = "logs")]
    tracing::debug!(input, "unknown user");
    Err(ValidationError::UnknownUser(input.to_string()))
}

fn weekdays() -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(Weekday::Monday), |day| Some(day.next())).take(7)
}

/// Check that `input` is a full weekday name, ignoring ASCII case.
///
/// Abbreviations are rejected. On success the matching [`Weekday`] is returned.
///
/// ```
/// use time::Weekday;
/// use timetable_input::validate_day;
///
/// assert_eq!(validate_day("MONDAY").unwrap(), Weekday::Monday);
/// assert!(validate_day("mon").is_err());
/// ```
pub fn validate_day(input: &str) -> Result<Weekday> {
    weekdays()
        .find(|day| day.to_string().eq_ignore_ascii_case(input))
        .ok_or_else(|| {
            #[cfg(feature = "logs")]
            tracing::debug!(input, "invalid day");
            ValidationError::InvalidDay(input.to_string())
        })
}

/// Check that a timetable is present, handing the reference back on success.
pub fn validate_table_existence<T>(table: Option<&T>) -> Result<&T> {
    table.ok_or(ValidationError::MissingTimetable)
}
