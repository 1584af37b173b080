//! Error types for the query engine.

use thiserror::Error;

use crate::field::FieldTag;
use crate::ordering::Category;

/// Errors raised while validating input, building predicates or applying a
/// sort-and-limit request.
///
/// Every variant is produced before any record is evaluated or the displayed
/// set is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A field value is empty or outside the field's vocabulary.
    #[error("invalid value for '{}': {expected}", .tag.prefix())]
    Validation {
        tag: FieldTag,
        expected: &'static str,
    },

    /// The category has no total order (multi-valued fields).
    #[error("cannot sort by {0}: the field has no defined ordering")]
    UnsupportedCategory(Category),

    /// A numeric value or count failed to parse, or the arguments are malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QueryError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        QueryError::InvalidArgument(message.into())
    }
}

/// Result type for query engine operations.
pub type Result<T> = std::result::Result<T, QueryError>;
