//! Single-field predicates.
//!
//! [`field_predicate`] turns one field tag and its raw text into a
//! [`Predicate`]. The text is split on whitespace and the predicate holds if
//! **any** token matches:
//!
//! | Tag | Token matches when |
//! |-----|--------------------|
//! | name | it equals a word of the name, ignoring case |
//! | phone | it is contained in the phone |
//! | email | it is contained in the email, ignoring case |
//! | address | it is contained in the address, ignoring case |
//! | gender | `m`/`male`, `f`/`female` equal the gender; `n.a` matches unset |
//! | age | it parses as an integer equal to the age |
//! | done | `t`/`true`, `f`/`false` equal the done flag |
//! | interest | it equals an interest tag, ignoring case |
//!
//! Tokens are normalized once, when the predicate is built.

use std::fmt;

use tracing::debug;

use crate::contact::{Contact, Gender};
use crate::error::{QueryError, Result};
use crate::field::FieldTag;

type TestFn = dyn Fn(&Contact) -> bool + Send + Sync;

/// A pure, reusable boolean test over one contact.
pub struct Predicate {
    test: Box<TestFn>,
}

impl Predicate {
    /// Wraps a closure as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Contact) -> bool + Send + Sync + 'static,
    {
        Predicate {
            test: Box::new(test),
        }
    }

    /// Evaluates the predicate.
    pub fn test(&self, contact: &Contact) -> bool {
        (self.test)(contact)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Builds the predicate for `tag` from its (already validated) raw value.
///
/// Only `age` can fail here: a token that is not an integer is rejected
/// before any contact is scanned.
pub fn field_predicate(tag: FieldTag, raw: &str) -> Result<Predicate> {
    let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    debug!(field = %tag, tokens = tokens.len(), "building field predicate");

    let predicate = match tag {
        FieldTag::Name => name_predicate(tokens),
        FieldTag::Phone => {
            Predicate::new(move |c| tokens.iter().any(|t| c.phone.contains(t.as_str())))
        }
        FieldTag::Email => {
            let tokens = lowercase(tokens);
            Predicate::new(move |c| {
                let email = c.email.to_lowercase();
                tokens.iter().any(|t| email.contains(t.as_str()))
            })
        }
        FieldTag::Address => {
            let tokens = lowercase(tokens);
            Predicate::new(move |c| {
                let address = c.address.to_lowercase();
                tokens.iter().any(|t| address.contains(t.as_str()))
            })
        }
        FieldTag::Gender => gender_predicate(&tokens),
        FieldTag::Age => age_predicate(&tokens)?,
        FieldTag::Done => done_predicate(&tokens),
        FieldTag::Interest => {
            let tokens = lowercase(tokens);
            Predicate::new(move |c| {
                c.interests
                    .iter()
                    .any(|interest| tokens.contains(&interest.to_lowercase()))
            })
        }
    };
    Ok(predicate)
}

fn lowercase(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().map(|t| t.to_lowercase()).collect()
}

fn name_predicate(tokens: Vec<String>) -> Predicate {
    let tokens = lowercase(tokens);
    Predicate::new(move |c| {
        c.name
            .split_whitespace()
            .any(|word| tokens.contains(&word.to_lowercase()))
    })
}

fn gender_predicate(tokens: &[String]) -> Predicate {
    // Outer None: token outside the vocabulary. Inner None: "n.a".
    let wanted: Vec<Option<Gender>> = tokens
        .iter()
        .filter_map(|t| match t.to_lowercase().as_str() {
            "m" | "male" => Some(Some(Gender::Male)),
            "f" | "female" => Some(Some(Gender::Female)),
            "n.a" => Some(None),
            _ => None,
        })
        .collect();
    Predicate::new(move |c| wanted.contains(&c.gender))
}

fn age_predicate(tokens: &[String]) -> Result<Predicate> {
    let ages = tokens
        .iter()
        .map(|t| {
            t.parse::<i64>().map_err(|_| {
                QueryError::invalid(format!("age must be a whole number, got '{}'", t))
            })
        })
        .collect::<Result<Vec<i64>>>()?;
    Ok(Predicate::new(move |c| {
        c.age.is_some_and(|age| ages.contains(&i64::from(age)))
    }))
}

fn done_predicate(tokens: &[String]) -> Predicate {
    let wanted: Vec<bool> = tokens
        .iter()
        .filter_map(|t| match t.to_lowercase().as_str() {
            "t" | "true" => Some(true),
            "f" | "false" => Some(false),
            _ => None,
        })
        .collect();
    Predicate::new(move |c| wanted.contains(&c.done))
}
