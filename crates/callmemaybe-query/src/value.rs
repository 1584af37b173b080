//! Sort keys extracted from contacts.
//!
//! A [`SortKey`] is the value of one orderable field, borrowed from the
//! contact. Keys of the same kind compare with [`SortKey::compare`].

use std::cmp::Ordering;

/// Value of an orderable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    /// Text, compared ignoring case.
    Text(&'a str),
    /// Non-negative number.
    Number(u32),
    /// Boolean, `false` before `true`.
    Bool(bool),
    /// Field not set.
    None,
}

impl SortKey<'_> {
    /// Compares two keys ascending.
    ///
    /// Unset keys sort after every set key. Keys of different kinds compare
    /// equal so the next tie-break decides.
    pub fn compare(&self, other: &SortKey<'_>) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => compare_ignore_case(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),

            (SortKey::None, SortKey::None) => Ordering::Equal,
            (SortKey::None, _) => Ordering::Greater,
            (_, SortKey::None) => Ordering::Less,

            _ => Ordering::Equal,
        }
    }
}

/// Case-insensitive lexicographic comparison.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
