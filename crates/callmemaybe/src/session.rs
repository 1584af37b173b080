//! Line-oriented command session.
//!
//! A [`Session`] owns the address book and runs one command per input line,
//! writing rendered results to its output. A failing command is reported as
//! `Error: <message>` and the session carries on; `exit` ends it.

use std::io::{self, BufRead, Write};

use callmemaybe_query::AddressBook;
use tracing::warn;

use crate::command::{Command, CommandError, CommandResult};
use crate::output::{render, OutputMode};

/// Runs commands against one address book.
#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    mode: OutputMode,
}

impl Session {
    pub fn new(book: AddressBook, mode: OutputMode) -> Self {
        Session { book, mode }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parses and runs a single command line.
    pub fn execute(&mut self, line: &str) -> Result<(Command, CommandResult), CommandError> {
        let command = Command::parse(line)?;
        let result = command.execute(&mut self.book)?;
        Ok((command, result))
    }

    /// Runs one line and writes its output. Returns `false` once the
    /// session should stop.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        match self.execute(line) {
            Ok((command, result)) => {
                match render(&result, self.mode) {
                    Ok(text) => write!(out, "{}", text)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
                Ok(!command.is_exit())
            }
            Err(e) => {
                warn!(line, error = %e, "command failed");
                writeln!(out, "Error: {}", e)?;
                Ok(true)
            }
        }
    }

    /// Runs every line from `input` until it is exhausted or `exit` is read.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            if !self.run_line(&line?, out)? {
                break;
            }
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callmemaybe_query::{Contact, Model};

    fn session() -> Session {
        Session::new(
            AddressBook::new(vec![
                Contact::new("Alice Tan").with_age(40),
                Contact::new("Bob Lee").with_age(20),
            ]),
            OutputMode::Text,
        )
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn errors_do_not_stop_the_session() {
        let mut session = session();
        let out = run(&mut session, "filter Age -1\nfilter Age 1\n");
        assert!(out.starts_with("Error: "));
        assert!(out.contains("Filtered by: Age\n1. Bob Lee"));
    }

    #[test]
    fn exit_stops_reading() {
        let mut session = session();
        let out = run(&mut session, "exit\nfilter Age 1\n");
        assert!(!out.contains("Filtered"));
        assert_eq!(session.book().filtered_list().len(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut session = session();
        assert_eq!(run(&mut session, "\n   \n"), "");
    }
}
