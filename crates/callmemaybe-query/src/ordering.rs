//! Sort categories and the comparators they select.
//!
//! [`comparator`] maps a [`Category`] to a total order over contacts:
//!
//! ```text
//! primary:   the category's field, ascending
//! secondary: name, ignoring case
//! tertiary:  structural order of the whole contact
//! ```
//!
//! Two contacts that tie on all three are identical, so a stable sort leaves
//! them in their original relative order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::contact::Contact;
use crate::error::{QueryError, Result};
use crate::field::FieldTag;
use crate::value::{compare_ignore_case, SortKey};

/// Ordering function over two contacts.
pub type Comparator = Box<dyn Fn(&Contact, &Contact) -> Ordering + Send + Sync>;

/// A field named as a sort target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Name,
    Phone,
    Email,
    Address,
    Gender,
    Age,
    Done,
    /// Multi-valued; parses but has no ordering.
    Interest,
}

impl Category {
    /// Returns the display name, e.g. `Age`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Name => "Name",
            Category::Phone => "Phone",
            Category::Email => "Email",
            Category::Address => "Address",
            Category::Gender => "Gender",
            Category::Age => "Age",
            Category::Done => "Done",
            Category::Interest => "Interest",
        }
    }

    /// Returns `true` if contacts can be ordered by this category.
    pub fn is_orderable(self) -> bool {
        !matches!(self, Category::Interest)
    }

    /// Extracts this category's sort key from `contact`.
    ///
    /// Returns `None` for categories without an ordering.
    pub fn sort_key(self, contact: &Contact) -> Option<SortKey<'_>> {
        let key = match self {
            Category::Name => SortKey::Text(&contact.name),
            Category::Phone => SortKey::Text(&contact.phone),
            Category::Email => SortKey::Text(&contact.email),
            Category::Address => SortKey::Text(&contact.address),
            Category::Gender => contact
                .gender
                .map(|g| SortKey::Text(g.as_str()))
                .unwrap_or(SortKey::None),
            Category::Age => contact.age.map(SortKey::Number).unwrap_or(SortKey::None),
            Category::Done => SortKey::Bool(contact.done),
            Category::Interest => return None,
        };
        Some(key)
    }
}

impl From<FieldTag> for Category {
    fn from(tag: FieldTag) -> Self {
        match tag {
            FieldTag::Name => Category::Name,
            FieldTag::Phone => Category::Phone,
            FieldTag::Email => Category::Email,
            FieldTag::Address => Category::Address,
            FieldTag::Gender => Category::Gender,
            FieldTag::Age => Category::Age,
            FieldTag::Done => Category::Done,
            FieldTag::Interest => Category::Interest,
        }
    }
}

impl FromStr for Category {
    type Err = QueryError;

    /// Parses a category name, ignoring case. `called` is accepted for `Done`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Category::Name),
            "phone" => Ok(Category::Phone),
            "email" => Ok(Category::Email),
            "address" => Ok(Category::Address),
            "gender" => Ok(Category::Gender),
            "age" => Ok(Category::Age),
            "done" | "called" => Ok(Category::Done),
            "interest" | "interests" => Ok(Category::Interest),
            _ => Err(QueryError::invalid(format!("unknown category '{}'", s.trim()))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the comparator for `category`.
///
/// Fails with [`QueryError::UnsupportedCategory`] for multi-valued fields.
pub fn comparator(category: Category) -> Result<Comparator> {
    if !category.is_orderable() {
        return Err(QueryError::UnsupportedCategory(category));
    }
    Ok(Box::new(move |a, b| compare_contacts(category, a, b)))
}

fn compare_contacts(category: Category, a: &Contact, b: &Contact) -> Ordering {
    let primary = match (category.sort_key(a), category.sort_key(b)) {
        (Some(ka), Some(kb)) => ka.compare(&kb),
        _ => Ordering::Equal,
    };
    primary
        .then_with(|| compare_ignore_case(&a.name, &b.name))
        .then_with(|| a.cmp(b))
}
