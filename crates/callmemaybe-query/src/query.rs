//! Query building: tokenized arguments to one combined predicate.
//!
//! [`Query`] collects one raw value per field tag, validates every value, and
//! only then builds and combines the field predicates. Nothing is evaluated
//! against a contact until the whole query is known to be well formed.
//!
//! # Example
//!
//! ```
//! use callmemaybe_query::{Contact, Mode, Query};
//!
//! let predicate = Query::parse("n/Alice n/Bob", Mode::Any).unwrap();
//!
//! assert!(predicate.test(&Contact::new("Bob Lee")));
//! assert!(!predicate.test(&Contact::new("Eve")));
//! ```

use tracing::debug;

use crate::combine::{combine, Mode};
use crate::error::{QueryError, Result};
use crate::field::FieldTag;
use crate::predicate::{field_predicate, Predicate};
use crate::tokenizer::{tokenize, ArgumentMultimap};
use crate::validate::validate;

/// A set of field values waiting to become a predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    fields: Vec<(FieldTag, String)>,
    mode: Mode,
}

impl Query {
    /// Creates an empty query. Combined with [`Mode::All`] it matches everything.
    pub fn new() -> Self {
        Query::default()
    }

    /// Sets the combination mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Adds a raw value for `tag`.
    pub fn field(mut self, tag: FieldTag, raw: impl Into<String>) -> Self {
        self.fields.push((tag, raw.into()));
        self
    }

    /// Builds a query from tokenized command arguments.
    ///
    /// Fails if there is text before the first prefix or no field prefix at
    /// all. Fields are taken in [`FieldTag::ALL`] order. A prefix given more
    /// than once contributes all of its tokens to the one field, so
    /// `n/Alice n/Bob` reads as `n/Alice Bob`.
    pub fn from_args(args: &ArgumentMultimap, mode: Mode) -> Result<Self> {
        if !args.preamble().is_empty() {
            return Err(QueryError::invalid(format!(
                "unexpected text before the first field: '{}'",
                args.preamble()
            )));
        }
        if !args.any_present(&FieldTag::ALL) {
            return Err(QueryError::invalid("at least one field prefix is required"));
        }

        let mut query = Query::new().mode(mode);
        for tag in FieldTag::ALL {
            let values = args.all_values(tag);
            if values.is_empty() {
                continue;
            }
            for raw in values {
                validate(tag, raw)?;
            }
            query = query.field(tag, values.join(" "));
        }
        Ok(query)
    }

    /// Tokenizes `raw` and builds the combined predicate in one step.
    pub fn parse(raw: &str, mode: Mode) -> Result<Predicate> {
        let args = tokenize(raw, &FieldTag::ALL)?;
        Query::from_args(&args, mode)?.build()
    }

    /// Validates every field, builds its predicate and combines them.
    pub fn build(&self) -> Result<Predicate> {
        for (tag, raw) in &self.fields {
            validate(*tag, raw)?;
        }
        let predicates = self
            .fields
            .iter()
            .map(|(tag, raw)| field_predicate(*tag, raw))
            .collect::<Result<Vec<_>>>()?;

        debug!(fields = predicates.len(), mode = %self.mode, "built query predicate");
        Ok(combine(predicates, self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;

    #[test]
    fn empty_query_matches_everything() {
        let p = Query::new().build().unwrap();
        assert!(p.test(&Contact::new("anyone")));
    }

    #[test]
    fn builder_records_fields_in_order() {
        let q = Query::new()
            .field(FieldTag::Age, "30")
            .field(FieldTag::Name, "Alice")
            .mode(Mode::Any);
        assert_eq!(
            q.fields,
            [
                (FieldTag::Age, "30".to_string()),
                (FieldTag::Name, "Alice".to_string())
            ]
        );
        assert_eq!(q.mode, Mode::Any);
    }

    #[test]
    fn conjunction_across_fields() {
        let p = Query::parse("n/Alice ag/30", Mode::All).unwrap();
        assert!(p.test(&Contact::new("Alice Tan").with_age(30)));
        assert!(!p.test(&Contact::new("Alice Tan").with_age(31)));
    }

    #[test]
    fn disjunction_across_fields() {
        let p = Query::parse("n/Alice ag/30", Mode::Any).unwrap();
        assert!(p.test(&Contact::new("Alice Tan").with_age(31)));
        assert!(p.test(&Contact::new("Eve").with_age(30)));
        assert!(!p.test(&Contact::new("Eve").with_age(31)));
    }

    #[test]
    fn rejects_preamble() {
        let err = Query::parse("hello n/Alice", Mode::Any).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_missing_prefixes() {
        let err = Query::parse("", Mode::Any).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument(_)));
    }

    #[test]
    fn validation_runs_before_age_parsing() {
        // Both fields are bad; the vocabulary failure is reported.
        let err = Query::parse("d/maybe ag/old", Mode::All).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Validation {
                tag: FieldTag::Done,
                ..
            }
        ));
    }

    #[test]
    fn empty_field_value_fails_validation() {
        let err = Query::parse("n/ p/123", Mode::Any).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Validation {
                tag: FieldTag::Name,
                ..
            }
        ));
    }

    #[test]
    fn repeated_prefix_values_are_joined() {
        let args = tokenize("n/Alice n/Bob", &FieldTag::ALL).unwrap();
        let q = Query::from_args(&args, Mode::All).unwrap();
        assert_eq!(q.fields, [(FieldTag::Name, "Alice Bob".to_string())]);
    }

    #[test]
    fn repeated_prefix_with_empty_value_fails() {
        let args = tokenize("n/ n/Bob", &FieldTag::ALL).unwrap();
        assert!(matches!(
            Query::from_args(&args, Mode::Any),
            Err(QueryError::Validation {
                tag: FieldTag::Name,
                ..
            })
        ));
    }
}
