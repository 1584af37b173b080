//! Output mode control.
//!
//! [`OutputMode`] decides how a [`CommandResult`] is turned into text: a
//! plain numbered listing, or one of the structured formats handled by
//! [`crate::serialize`].

use std::fmt::Write;

use clap::ValueEnum;

use crate::command::CommandResult;
use crate::serialize::{serialize_structured, SerializeError};

/// Controls how command results are rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Message followed by one numbered line per contact
    #[default]
    Text,
    /// Serialize the result as JSON
    Json,
    /// Serialize the result as YAML
    Yaml,
    /// Serialize the listed contacts as CSV
    Csv,
}

impl OutputMode {
    /// Returns true if this is a structured output mode (JSON, YAML, CSV).
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputMode::Text)
    }
}

/// Renders a command result in the given mode.
///
/// Non-empty output always ends with a newline, so results written one after
/// another stay separate.
pub fn render(result: &CommandResult, mode: OutputMode) -> Result<String, SerializeError> {
    if mode.is_structured() {
        let mut out = serialize_structured(result, mode)?;
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        return Ok(out);
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", result.message);
    for (i, contact) in result.contacts.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, contact);
    }
    Ok(out)
}
