//! Structured rendering of command results.
//!
//! JSON and YAML carry the whole [`CommandResult`]. CSV has no room for the
//! message, so it writes one row per listed contact with interests joined
//! by `;`.

use callmemaybe_query::{Contact, Gender};
use serde::Serialize;
use thiserror::Error;

use crate::command::CommandResult;
use crate::output::OutputMode;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("text output is not a structured format")]
    NotStructured,
}

/// Serializes a result in a structured mode.
///
/// Fails with [`SerializeError::NotStructured`] for [`OutputMode::Text`].
pub fn serialize_structured(
    result: &CommandResult,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(result)?),
        OutputMode::Csv => contacts_to_csv(&result.contacts),
        OutputMode::Text => Err(SerializeError::NotStructured),
    }
}

/// One CSV line per contact. Unset values are empty cells.
#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    address: &'a str,
    gender: Option<Gender>,
    age: Option<u32>,
    done: bool,
    interests: String,
}

impl<'a> From<&'a Contact> for CsvRow<'a> {
    fn from(contact: &'a Contact) -> Self {
        CsvRow {
            name: &contact.name,
            phone: &contact.phone,
            email: &contact.email,
            address: &contact.address,
            gender: contact.gender,
            age: contact.age,
            done: contact.done,
            interests: contact
                .interests
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Writes contacts as CSV with a header row. An empty list writes nothing.
pub fn contacts_to_csv(contacts: &[Contact]) -> Result<String, SerializeError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for contact in contacts {
        wtr.serialize(CsvRow::from(contact))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
