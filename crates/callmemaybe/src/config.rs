//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputMode;

/// CallMeMaybe - find, sort and trim your contacts
///
/// With no COMMAND, commands are read one per line from `--script` or from
/// standard input until `exit`.
#[derive(Debug, Parser)]
#[command(name = "callmemaybe")]
#[command(version)]
#[command(about = "Find, sort and trim contacts in a JSON address book")]
pub struct Cli {
    /// Contacts file to load
    #[arg(short, long, env = "CALLMEMAYBE_DATA", default_value = "contacts.json")]
    pub data: PathBuf,

    /// How to render command results
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Read commands from this file instead of standard input
    #[arg(short, long, conflicts_with = "command")]
    pub script: Option<PathBuf>,

    /// Run a single command and exit, e.g. `findany n/alice n/bob`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if one was given.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
