//! Grammar checks for the raw command lines typed by users.
//!
//! Every supported command has a fixed shape: a case-insensitive keyword
//! followed by `/flag value` segments in a fixed order. The shapes live in a
//! single table keyed by [`Command`], so callers can either validate against a
//! known command or let [`Command::detect`] pick one from the leading keyword.
//!
//! These checks are purely structural. In particular, times are only checked
//! for the `H:mm` / `HH:mm` shape, so `99:99` is accepted here.

use crate::error::{Result, ValidationError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// All classes and case folding are ASCII-only, matching `detect` and `validate_day`.
const WS: &str = "[[:space:]]";
// ASCII word token, one or more characters.
const WORD: &str = r"[A-Za-z0-9_]+";
const INDEX: &str = r"[0-9]+";
const TIME: &str = r"[0-9]{1,2}:[0-9]{2}";
const WEEKDAY: &str = r"(?i-u:monday|tuesday|wednesday|thursday|friday|saturday|sunday)";
// Free text up to the next flag, starting with a non-space character.
const TEXT: &str = r"[^[:space:]].*?";

/// How a grammar treats whatever follows its last segment.
#[derive(Clone, Copy)]
enum Tail {
    /// Nothing but optional whitespace.
    Whitespace,
    /// The line must end right after the last token.
    Strict,
    /// Anything, as long as it is separated by whitespace.
    Anything,
}

/// Incremental builder for an anchored grammar pattern.
struct Grammar {
    pattern: String,
}

impl Grammar {
    fn keyword(keyword: &str) -> Self {
        Grammar {
            pattern: format!("^(?i-u:{keyword})"),
        }
    }

    fn token(mut self, value: &str) -> Self {
        self.pattern.push_str(WS);
        self.pattern.push('+');
        self.pattern.push_str(value);
        self
    }

    fn flag(mut self, flag: &str, value: &str) -> Self {
        self.pattern.push_str(WS);
        self.pattern.push('+');
        self.pattern.push_str(flag);
        self.token(value)
    }

    fn end(mut self, tail: Tail) -> String {
        match tail {
            Tail::Whitespace => self.pattern.push_str("[[:space:]]*$"),
            Tail::Strict => self.pattern.push('$'),
            Tail::Anything => self.pattern.push_str("(?:[[:space:]].*)?$"),
        }
        self.pattern
    }
}

/// A command family the grammar layer knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Compare,
    CompareAll,
    AddTask,
    /// `addtwdc`: add a task after checking for duplicates.
    AddTaskWithDuplicationCheck,
    DeleteTask,
    AddUser,
    Switch,
    ChangeTaskTiming,
    AddForAll,
    ChangeTaskType,
    AddRepeatTask,
    AddFor,
}

static GRAMMARS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Command::ALL
        .iter()
        .map(|command| {
            Regex::new(&command.pattern())
                .unwrap_or_else(|e| panic!("invalid grammar for {command}: {e}"))
        })
        .collect()
});

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 12] = [
        Command::Compare,
        Command::CompareAll,
        Command::AddTask,
        Command::AddTaskWithDuplicationCheck,
        Command::DeleteTask,
        Command::AddUser,
        Command::Switch,
        Command::ChangeTaskTiming,
        Command::AddForAll,
        Command::ChangeTaskType,
        Command::AddRepeatTask,
        Command::AddFor,
    ];

    /// Lowercase keyword that starts the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Compare => "compare",
            Command::CompareAll => "compareall",
            Command::AddTask => "addtask",
            Command::AddTaskWithDuplicationCheck => "addtwdc",
            Command::DeleteTask => "deletetask",
            Command::AddUser => "adduser",
            Command::Switch => "switch",
            Command::ChangeTaskTiming => "changetasktiming",
            Command::AddForAll => "addforall",
            Command::ChangeTaskType => "changetasktype",
            Command::AddRepeatTask => "addrepeattask",
            Command::AddFor => "addfor",
        }
    }

    /// Name shown to the user when the command is rejected.
    pub fn name(self) -> &'static str {
        match self {
            Command::Compare => "compare",
            Command::CompareAll => "compareall",
            Command::AddTask => "addtask",
            Command::AddTaskWithDuplicationCheck => "addTaskWithDuplicationCheck",
            Command::DeleteTask => "deleteTask",
            Command::AddUser => "addUser",
            Command::Switch => "switch",
            Command::ChangeTaskTiming => "changeTaskTiming",
            Command::AddForAll => "addforall",
            Command::ChangeTaskType => "changeTaskType",
            Command::AddRepeatTask => "addRepeatTask",
            Command::AddFor => "addfor",
        }
    }

    /// Canonical template echoed back in the format error.
    pub fn template(self) -> &'static str {
        match self {
            Command::Compare => "compare <user1> <user2>",
            Command::CompareAll => "compareall",
            Command::AddTask => {
                "addtask /on [day] /task [description] /from [start time] /to [end time] /type [f/c]"
            }
            Command::AddTaskWithDuplicationCheck => {
                "addtwdc /on [day] /task [description] /from [start time] /to [end time] /type [f/c]"
            }
            Command::DeleteTask => "deleteTask /on [day] /index [index]",
            Command::AddUser => "adduser <desired user's name>",
            Command::Switch => "switch <desired user's name>",
            Command::ChangeTaskTiming => {
                "changeTaskTiming /on [day] /index [index] /from [new start time] /to [new end time]"
            }
            Command::AddForAll => {
                "addforall /on [day] /task [description] /from [start time] /to [end time]"
            }
            Command::ChangeTaskType => "changeTaskType /on [day] /index [index] /type [f/c]",
            Command::AddRepeatTask => {
                "addRepeatTask /task [description] /on [day(s)] /from [start time] /to [end time] /type [f/c]"
            }
            Command::AddFor => {
                "addfor /user [user1], [user2], ... /on [day] /task [description] /from [start time] /to [end time] /type [f/c]"
            }
        }
    }

    fn pattern(self) -> String {
        let start = Grammar::keyword(self.keyword());
        match self {
            Command::Compare => start.token(WORD).token(WORD).end(Tail::Whitespace),
            Command::CompareAll => start.end(Tail::Whitespace),
            Command::AddTask | Command::AddTaskWithDuplicationCheck => start
                .flag("/on", WORD)
                .flag("/task", TEXT)
                .flag("/from", TIME)
                .flag("/to", TIME)
                .flag("/type", "[fc]")
                .end(Tail::Whitespace),
            Command::DeleteTask => start
                .flag("/on", WORD)
                .flag("/index", INDEX)
                .end(Tail::Whitespace),
            Command::AddUser => start.token(WORD).end(Tail::Whitespace),
            Command::Switch => start.token(WORD).end(Tail::Strict),
            Command::ChangeTaskTiming => start
                .flag("/on", WEEKDAY)
                .flag("/index", INDEX)
                .flag("/from", TIME)
                .flag("/to", TIME)
                .end(Tail::Whitespace),
            Command::AddForAll => start
                .flag("/on", WORD)
                .flag("/task", TEXT)
                .flag("/from", TIME)
                .flag("/to", TIME)
                .end(Tail::Anything),
            Command::ChangeTaskType => start
                .flag("/on", WEEKDAY)
                .flag("/index", INDEX)
                .flag("/type", "(?i-u:[fc])")
                .end(Tail::Whitespace),
            Command::AddRepeatTask => start
                .flag("/task", TEXT)
                .flag("/on", &format!("{WORD}(?:{WS}+{WORD})*"))
                .flag("/from", TIME)
                .flag("/to", TIME)
                .flag("/type", "[fc]")
                .end(Tail::Whitespace),
            Command::AddFor => start
                .flag("/user", "[A-Za-z0-9_,[:space:]]+")
                .flag("/on", WEEKDAY)
                .flag("/task", "[A-Za-z0-9_[:space:]]+")
                .flag("/from", TIME)
                .flag("/to", TIME)
                .flag("/type", "(?i-u:[fc])")
                .end(Tail::Whitespace),
        }
    }

    fn grammar(self) -> &'static Regex {
        &GRAMMARS[self as usize]
    }

    /// Look up a command by keyword, ignoring ASCII case.
    ///
    /// ```
    /// use timetable_input::Command;
    /// assert_eq!(Command::from_keyword("changeTaskType"), Some(Command::ChangeTaskType));
    /// assert_eq!(Command::from_keyword("delete"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|command| command.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Infer the command from the first whitespace-separated token of `line`.
    ///
    /// Returns `None` for blank lines and unknown keywords. Detection does not
    /// imply the rest of the line is well-formed; call [`Command::validate`].
    pub fn detect(line: &str) -> Option<Command> {
        line.split_whitespace().next().and_then(Command::from_keyword)
    }

    /// Check `line` against this command's grammar.
    ///
    /// ## Errors
    /// [`ValidationError::Format`] naming the command and its canonical
    /// template when the line does not conform.
    ///
    /// ## Examples
    /// ```
    /// use timetable_input::Command;
    ///
    /// let ok = "addtask /on monday /task Submit report /from 9:00 /to 10:30 /type f";
    /// assert!(Command::AddTask.validate(ok).is_ok());
    ///
    /// let err = Command::Compare.validate("compare alice").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "[ERROR] Invalid compare format. Expected format: compare <user1> <user2>"
    /// );
    /// ```
    pub fn validate(self, line: &str) -> Result<()> {
        if self.is_match(line) {
            return Ok(());
        }

        let err = ValidationError::Format {
            command: self.name(),
            template: self.template(),
        };

        #[cfg(feature = "logs")]
        tracing::debug!(
            command = self.keyword(),
            kind = ?err.kind(),
            "rejected malformed command"
        );

        Err(err)
    }

    /// Whether `line` conforms to this command's grammar.
    pub fn is_match(self, line: &str) -> bool {
        self.grammar().is_match(line)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Command::from_keyword(s.trim()).ok_or_else(|| format!("unknown command: {}", s.trim()))
    }
}

// Per-command entry points.

/// `compare <user1> <user2>`
pub fn validate_compare_input(input: &str) -> Result<()> {
    Command::Compare.validate(input)
}

/// `compareall`
pub fn validate_compare_all_input(input: &str) -> Result<()> {
    Command::CompareAll.validate(input)
}

/// `addtask /on [day] /task [description] /from [start] /to [end] /type [f/c]`
pub fn validate_add_task_input(input: &str) -> Result<()> {
    Command::AddTask.validate(input)
}

/// Same shape as [`validate_add_task_input`], keyword `addtwdc`.
pub fn validate_add_task_wdc_input(input: &str) -> Result<()> {
    Command::AddTaskWithDuplicationCheck.validate(input)
}

/// `deletetask /on [day] /index [index]`
pub fn validate_delete_task_input(input: &str) -> Result<()> {
    Command::DeleteTask.validate(input)
}

/// `adduser <name>`, trailing whitespace allowed.
pub fn validate_add_user_input(input: &str) -> Result<()> {
    Command::AddUser.validate(input)
}

/// `switch <name>`, nothing allowed after the name.
pub fn validate_switch_input(input: &str) -> Result<()> {
    Command::Switch.validate(input)
}

/// `changeTaskTiming /on [weekday] /index [index] /from [start] /to [end]`
pub fn validate_change_task_timing(input: &str) -> Result<()> {
    Command::ChangeTaskTiming.validate(input)
}

/// `addforall /on [day] /task [description] /from [start] /to [end]`, anything may follow.
pub fn validate_add_task_for_all(input: &str) -> Result<()> {
    Command::AddForAll.validate(input)
}

/// `changeTaskType /on [weekday] /index [index] /type [f/c]`
pub fn validate_change_task_type(input: &str) -> Result<()> {
    Command::ChangeTaskType.validate(input)
}

/// `addRepeatTask /task [description] /on [day(s)] /from [start] /to [end] /type [f/c]`
pub fn validate_add_repeat_task(input: &str) -> Result<()> {
    Command::AddRepeatTask.validate(input)
}

/// `addfor /user [users] /on [weekday] /task [words] /from [start] /to [end] /type [f/c]`
pub fn validate_add_for(input: &str) -> Result<()> {
    Command::AddFor.validate(input)
}
