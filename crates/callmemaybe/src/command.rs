//! Command parsing and execution.
//!
//! A command line is a command word followed by its arguments:
//!
//! | Command | Arguments | Effect |
//! |---------|-----------|--------|
//! | `list` | | show every contact |
//! | `find` | prefixed fields | contacts matching **all** fields |
//! | `findany` | prefixed fields | contacts matching **any** field |
//! | `filter` | `CATEGORY COUNT` | sort the view, keep the first COUNT |
//! | `display` | `INDEX` | show one contact of the view (1-based) |
//! | `help` | | list the commands |
//! | `exit` | | end the session |
//!
//! Commands are parsed completely before they run: a command that fails to
//! parse never touches the address book.

use callmemaybe_query::{
    AddressBook, Contact, FilterRequest, Mode, Model, Predicate, Query, QueryError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub const HELP_MESSAGE: &str = "Commands: list, find, findany, filter, display, help, exit\n\
    find/findany: n/NAME p/PHONE e/EMAIL a/ADDRESS g/GENDER ag/AGE d/DONE i/INTEREST\n\
    filter: CATEGORY COUNT (e.g. filter Age 3)\n\
    display: INDEX (e.g. display 1)";

const FIND_USAGE: &str = "find: Finds all persons matching every given field.\n\
    Parameters: [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [g/GENDER] [ag/AGE] [d/DONE] [i/INTEREST]\n\
    Example: find n/alice ag/30";
const FINDANY_USAGE: &str = "findany: Finds all persons matching any given field.\n\
    Parameters: [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [g/GENDER] [ag/AGE] [d/DONE] [i/INTEREST]\n\
    Example: findany n/alice n/bob";
const FILTER_USAGE: &str = "filter: Sorts the displayed list by the category given, \
    in ascending order, and keeps the first COUNT persons.\n\
    Parameters: CATEGORY COUNT\n\
    Example: filter Age 5";
const DISPLAY_USAGE: &str = "display: Displays the person at INDEX of the displayed list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: display 1";

/// Errors raised while parsing or executing a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{reason}\n{usage}")]
    InvalidFormat { reason: String, usage: &'static str },

    #[error("the person index provided is invalid")]
    InvalidIndex,
}

impl CommandError {
    fn format(usage: &'static str, err: QueryError) -> Self {
        CommandError::InvalidFormat {
            reason: err.to_string(),
            usage,
        }
    }
}

/// A fully parsed command.
#[derive(Debug)]
pub enum Command {
    List,
    /// A validated query, built once at parse time.
    Find { predicate: Predicate, mode: Mode },
    Filter(FilterRequest),
    Display(usize),
    Help,
    Exit,
}

impl Command {
    /// Parses one command line.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (word, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "list" => Ok(Command::List),
            "find" => parse_query(args, Mode::All),
            "findany" => parse_query(args, Mode::Any),
            "filter" => FilterRequest::parse(args)
                .map(Command::Filter)
                .map_err(|e| CommandError::format(FILTER_USAGE, e)),
            "display" => parse_index(args).map(Command::Display),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(word.to_string())),
        }
    }

    /// The command word this command was parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Find { mode, .. } if mode.is_conjunction() => "find",
            Command::Find { .. } => "findany",
            Command::Filter(_) => "filter",
            Command::Display(_) => "display",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Returns `true` for [`Command::Exit`].
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Runs the command against the address book.
    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        info!(command = self.name(), "executing command");
        match self {
            Command::List => {
                book.reset();
                Ok(CommandResult::new(
                    "Listed all persons",
                    book.filtered_list().to_vec(),
                ))
            }
            Command::Find { predicate, .. } => {
                book.update_filtered_list(predicate);
                let listed = book.filtered_list().to_vec();
                Ok(CommandResult::new(
                    format!("{} persons listed!", listed.len()),
                    listed,
                ))
            }
            Command::Filter(request) => {
                let message = request
                    .apply(book)
                    .map_err(|e| CommandError::format(FILTER_USAGE, e))?;
                Ok(CommandResult::new(message, book.filtered_list().to_vec()))
            }
            Command::Display(index) => {
                let contact = index
                    .checked_sub(1)
                    .and_then(|i| book.filtered_list().get(i))
                    .cloned()
                    .ok_or(CommandError::InvalidIndex)?;
                Ok(CommandResult::new(
                    "Displayed selected person!",
                    vec![contact],
                ))
            }
            Command::Help => Ok(CommandResult::message(HELP_MESSAGE)),
            Command::Exit => Ok(CommandResult::message("Exiting CallMeMaybe as requested ...")),
        }
    }
}

fn parse_query(args: &str, mode: Mode) -> Result<Command, CommandError> {
    let usage = if mode.is_conjunction() {
        FIND_USAGE
    } else {
        FINDANY_USAGE
    };
    let args = callmemaybe_query::tokenize(args, &callmemaybe_query::FieldTag::ALL)
        .map_err(|e| CommandError::format(usage, e))?;
    let predicate = Query::from_args(&args, mode)
        .and_then(|query| query.build())
        .map_err(|e| CommandError::format(usage, e))?;
    Ok(Command::Find { predicate, mode })
}

fn parse_index(args: &str) -> Result<usize, CommandError> {
    match args.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(CommandError::InvalidFormat {
            reason: format!("invalid index '{}'", args.trim()),
            usage: DISPLAY_USAGE,
        }),
    }
}

/// What a command produced: a message and the contacts to show with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub message: String,
    pub contacts: Vec<Contact>,
}

impl CommandResult {
    pub fn new(message: impl Into<String>, contacts: Vec<Contact>) -> Self {
        CommandResult {
            message: message.into(),
            contacts,
        }
    }

    /// A result with a message and no contacts.
    pub fn message(message: impl Into<String>) -> Self {
        CommandResult::new(message, Vec::new())
    }
}
