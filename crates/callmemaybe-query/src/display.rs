//! The displayed set and the sort-and-limit pipeline.
//!
//! [`DisplayedSet`] is the ordered view of contacts the user currently sees.
//! [`Model`] is the contract the rest of the application talks to, and
//! [`AddressBook`] implements it over an in-memory collection.
//!
//! [`FilterRequest`] parses `CATEGORY COUNT` and applies both steps:
//!
//! ```text
//! select comparator ─┐
//! check count ≥ 0   ─┴─ all checks pass ─→ sort ─→ truncate
//! ```
//!
//! Any failure happens before the first mutation, so the displayed set is
//! left exactly as it was.

use std::num::IntErrorKind;

use tracing::debug;

use crate::contact::Contact;
use crate::error::{QueryError, Result};
use crate::ordering::{comparator, Category, Comparator};
use crate::predicate::Predicate;

/// Mutable, ordered view of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayedSet {
    contacts: Vec<Contact>,
}

impl DisplayedSet {
    pub fn new(contacts: Vec<Contact>) -> Self {
        DisplayedSet { contacts }
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Replaces the contents with every contact of `all` that satisfies `predicate`.
    pub fn replace_matching(&mut self, all: &[Contact], predicate: &Predicate) {
        self.contacts = all.iter().filter(|c| predicate.test(c)).cloned().collect();
    }

    /// Reorders the set with a stable sort.
    pub fn sort(&mut self, comparator: &Comparator) {
        debug!(len = self.contacts.len(), "sorting displayed set");
        self.contacts.sort_by(|a, b| comparator(a, b));
    }

    /// Keeps at most `count` leading contacts.
    ///
    /// A count at or above the current size leaves the set unchanged; a
    /// negative count fails without touching it.
    pub fn limit(&mut self, count: i64) -> Result<()> {
        let count = checked_count(count)?;
        debug!(len = self.contacts.len(), count, "limiting displayed set");
        self.contacts.truncate(count);
        Ok(())
    }
}

fn checked_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(QueryError::invalid(format!(
            "count must be a non-negative integer, got {}",
            count
        )));
    }
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

/// What the engine needs from the application's model.
pub trait Model {
    /// Returns the displayed set, for index-based lookups.
    fn filtered_list(&self) -> &[Contact];

    /// Rebuilds the displayed set from the full collection.
    fn update_filtered_list(&mut self, predicate: &Predicate);

    /// Reorders the displayed set.
    fn sort_filtered_list(&mut self, comparator: &Comparator);

    /// Truncates the displayed set to `count` leading contacts.
    fn limit_filtered_list(&mut self, count: i64) -> Result<()>;
}

/// Full contact collection plus the view over it.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    displayed: DisplayedSet,
}

impl AddressBook {
    /// Creates a book showing every contact.
    pub fn new(contacts: Vec<Contact>) -> Self {
        let displayed = DisplayedSet::new(contacts.clone());
        AddressBook {
            contacts,
            displayed,
        }
    }

    /// Returns the full collection in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Shows every contact again, in insertion order.
    pub fn reset(&mut self) {
        self.displayed = DisplayedSet::new(self.contacts.clone());
    }
}

impl Model for AddressBook {
    fn filtered_list(&self) -> &[Contact] {
        self.displayed.as_slice()
    }

    fn update_filtered_list(&mut self, predicate: &Predicate) {
        self.displayed.replace_matching(&self.contacts, predicate);
    }

    fn sort_filtered_list(&mut self, comparator: &Comparator) {
        self.displayed.sort(comparator);
    }

    fn limit_filtered_list(&mut self, count: i64) -> Result<()> {
        self.displayed.limit(count)
    }
}

/// A parsed `CATEGORY COUNT` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRequest {
    pub category: Category,
    pub count: usize,
}

impl FilterRequest {
    pub fn new(category: Category, count: usize) -> Self {
        FilterRequest { category, count }
    }

    /// Parses `CATEGORY COUNT`, e.g. `Age 3`.
    ///
    /// The category must be a known field name and the count a non-negative
    /// integer.
    pub fn parse(args: &str) -> Result<Self> {
        let mut parts = args.split_whitespace();
        let (Some(category), Some(count), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(QueryError::invalid(format!(
                "expected CATEGORY COUNT, got '{}'",
                args.trim()
            )));
        };

        let category: Category = category.parse()?;
        let count = match count.parse::<i64>() {
            Ok(n) => checked_count(n)?,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                return Err(QueryError::invalid(format!(
                    "count must be a non-negative integer, got {}",
                    count
                )))
            }
            Err(_) => {
                return Err(QueryError::invalid(format!(
                    "count must be an integer, got '{}'",
                    count
                )))
            }
        };
        Ok(FilterRequest::new(category, count))
    }

    /// Sorts the model's displayed set by the category, then limits it.
    ///
    /// Returns the confirmation message.
    pub fn apply<M: Model + ?Sized>(&self, model: &mut M) -> Result<String> {
        let comparator = comparator(self.category)?;
        let count = i64::try_from(self.count).unwrap_or(i64::MAX);

        model.sort_filtered_list(&comparator);
        model.limit_filtered_list(count)?;
        Ok(format!("Filtered by: {}", self.category))
    }
}
