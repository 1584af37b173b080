//! Field tags: the prefixes that route query text to a contact field.
//!
//! Every [`FieldTag`] maps to exactly one prefix, one value grammar (see
//! [`crate::validate`]) and one predicate constructor (see
//! [`crate::predicate`]).

use std::fmt;

/// Identifies which contact attribute a query fragment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldTag {
    Name,
    Phone,
    Email,
    Address,
    Gender,
    Age,
    Done,
    Interest,
}

impl FieldTag {
    /// Every tag, in the order query fields are processed.
    pub const ALL: [FieldTag; 8] = [
        FieldTag::Name,
        FieldTag::Phone,
        FieldTag::Email,
        FieldTag::Done,
        FieldTag::Address,
        FieldTag::Gender,
        FieldTag::Age,
        FieldTag::Interest,
    ];

    /// Returns the command-line prefix for this tag, e.g. `n/`.
    pub fn prefix(self) -> &'static str {
        match self {
            FieldTag::Name => "n/",
            FieldTag::Phone => "p/",
            FieldTag::Email => "e/",
            FieldTag::Address => "a/",
            FieldTag::Gender => "g/",
            FieldTag::Age => "ag/",
            FieldTag::Done => "d/",
            FieldTag::Interest => "i/",
        }
    }

    /// Returns the lowercase field name.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldTag::Name => "name",
            FieldTag::Phone => "phone",
            FieldTag::Email => "email",
            FieldTag::Address => "address",
            FieldTag::Gender => "gender",
            FieldTag::Age => "age",
            FieldTag::Done => "done",
            FieldTag::Interest => "interest",
        }
    }

    /// Looks up the tag owning `prefix` (with its trailing slash).
    pub fn from_prefix(prefix: &str) -> Option<FieldTag> {
        FieldTag::ALL.into_iter().find(|tag| tag.prefix() == prefix)
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let mut prefixes: Vec<_> = FieldTag::ALL.iter().map(|t| t.prefix()).collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), FieldTag::ALL.len());
    }

    #[test]
    fn prefix_lookup() {
        assert_eq!(FieldTag::from_prefix("n/"), Some(FieldTag::Name));
        assert_eq!(FieldTag::from_prefix("ag/"), Some(FieldTag::Age));
        assert_eq!(FieldTag::from_prefix("x/"), None);
        assert_eq!(FieldTag::from_prefix("n"), None);
    }

    #[test]
    fn display_uses_field_name() {
        assert_eq!(FieldTag::Interest.to_string(), "interest");
    }
}
