//! CallMeMaybe - a contact manager shell over [`callmemaybe_query`].
//!
//! Contacts are loaded from a JSON file, then commands run either one-shot
//! from the command line or line by line from a script or standard input:
//!
//! ```text
//! findany n/alice n/bob      contacts whose name has "alice" or "bob"
//! find g/f ag/30 40          female contacts aged 30 or 40
//! filter Age 3               the three youngest of the displayed contacts
//! display 1                  the first displayed contact
//! list                       every contact again
//! ```
//!
//! Results render as numbered text or, with `--output`, as JSON, YAML or CSV.

pub mod command;
pub mod config;
pub mod output;
pub mod serialize;
pub mod session;
pub mod storage;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use callmemaybe_query::AddressBook;

pub use command::{Command, CommandError, CommandResult};
pub use config::Cli;
pub use output::{render, OutputMode};
pub use serialize::SerializeError;
pub use session::Session;
pub use storage::{ImportExport, JsonImport, StorageError};

/// Loads the address book and runs the commands the CLI asks for.
pub fn run(cli: &Cli) -> Result<()> {
    let import = JsonImport::new(&cli.data);
    let contacts = import
        .import()
        .with_context(|| format!("loading contacts from {}", import.path().display()))?
        .unwrap_or_default();
    let mut session = Session::new(AddressBook::new(contacts), cli.output);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(line) = cli.one_shot() {
        let (_, result) = session.execute(&line)?;
        let text = render(&result, cli.output)?;
        out.write_all(text.as_bytes())?;
        return Ok(());
    }

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out)?;
        }
        None => session.run(io::stdin().lock(), &mut out)?,
    }
    Ok(())
}
