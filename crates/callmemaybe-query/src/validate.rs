//! Per-field value checks run before any predicate is built.

use crate::error::{QueryError, Result};
use crate::field::FieldTag;

const EMPTY_FIELD: &str = "fields can be anything but cannot be an empty string";
const DONE_VOCABULARY: &[&str] = &["t", "true", "f", "false"];
const DONE_EXPECTED: &str = "can only be followed by 't', 'f', 'true', or 'false'";
const GENDER_VOCABULARY: &[&str] = &["m", "male", "f", "female", "n.a"];
const GENDER_EXPECTED: &str = "can only be followed by 'm', 'f', 'male', 'female' or 'N.A'";

/// Checks `raw` against the grammar of `tag`.
///
/// Fails if the value is blank, or if the tag has a closed vocabulary and any
/// whitespace-delimited token falls outside it (case-insensitive).
pub fn validate(tag: FieldTag, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(QueryError::Validation {
            tag,
            expected: EMPTY_FIELD,
        });
    }

    let (vocabulary, expected) = match tag {
        FieldTag::Done => (DONE_VOCABULARY, DONE_EXPECTED),
        FieldTag::Gender => (GENDER_VOCABULARY, GENDER_EXPECTED),
        _ => return Ok(()),
    };

    for token in raw.split_whitespace() {
        let token = token.to_lowercase();
        if !vocabulary.contains(&token.as_str()) {
            return Err(QueryError::Validation { tag, expected });
        }
    }
    Ok(())
}
