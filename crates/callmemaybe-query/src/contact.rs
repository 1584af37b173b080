//! The contact record queried by the engine.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender of a contact. An unset gender (`None` on [`Contact`]) reads as "n.a".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the lowercase display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable contact.
///
/// Identity is structural: two contacts with identical fields are equal. The
/// derived `Ord` is the structural total order used as the final tie-break
/// when sorting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub interests: BTreeSet<String>,
}

impl Contact {
    /// Creates a contact with the given name and every other field blank.
    pub fn new(name: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            gender: None,
            age: None,
            done: false,
            interests: BTreeSet::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.insert(interest.into());
        self
    }

    /// Returns the gender as shown to the user, `"n.a"` when unset.
    pub fn gender_label(&self) -> &'static str {
        self.gender.map(Gender::as_str).unwrap_or("n.a")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phone.is_empty() {
            write!(f, "; Phone: {}", self.phone)?;
        }
        if !self.email.is_empty() {
            write!(f, "; Email: {}", self.email)?;
        }
        if !self.address.is_empty() {
            write!(f, "; Address: {}", self.address)?;
        }
        write!(f, "; Gender: {}", self.gender_label())?;
        if let Some(age) = self.age {
            write!(f, "; Age: {}", age)?;
        }
        write!(f, "; Done: {}", self.done)?;
        if !self.interests.is_empty() {
            let interests: Vec<&str> = self.interests.iter().map(String::as_str).collect();
            write!(f, "; Interests: {}", interests.join(", "))?;
        }
        Ok(())
    }
}
