//! Contact import.
//!
//! The address book is read once at start-up from a JSON array of contacts.
//! Only `name` is required on each entry; every other field defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use callmemaybe_query::Contact;
use thiserror::Error;
use tracing::info;

/// Errors raised while reading contacts.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("contacts in {path} are not valid: {source}")]
    DataConversion {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A source of contacts.
pub trait ImportExport {
    /// Reads every contact.
    ///
    /// Returns `Ok(None)` when there is nothing to read yet, so the caller
    /// can start with an empty book.
    fn import(&self) -> Result<Option<Vec<Contact>>, StorageError>;
}

/// Imports contacts from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonImport {
    path: PathBuf,
}

impl JsonImport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonImport { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImportExport for JsonImport {
    fn import(&self) -> Result<Option<Vec<Contact>>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no contacts file, starting empty");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let contacts: Vec<Contact> =
            serde_json::from_str(&text).map_err(|source| StorageError::DataConversion {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), count = contacts.len(), "imported contacts");
        Ok(Some(contacts))
    }
}
