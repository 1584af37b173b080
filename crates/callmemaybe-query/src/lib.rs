//! Query, filter and sort engine for CallMeMaybe contact lists.
//!
//! The engine turns field-tagged search text into a predicate over
//! [`Contact`]s, and orders and truncates the displayed set by a chosen field.
//!
//! - Field tags: `n/` name, `p/` phone, `e/` email, `a/` address, `g/` gender,
//!   `ag/` age, `d/` done, `i/` interest
//! - Tokens inside one field are OR-ed; fields combine with a [`Mode`]
//! - Every value is validated before anything is evaluated or mutated
//! - Sorting by any single-valued field, with a deterministic tie-break
//!
//! # Quick Start
//!
//! ```rust
//! use callmemaybe_query::{AddressBook, Contact, FilterRequest, Mode, Model, Query};
//!
//! let mut book = AddressBook::new(vec![
//!     Contact::new("Alice Tan").with_age(30),
//!     Contact::new("Bob Lee").with_age(25),
//!     Contact::new("Eve").with_age(41),
//! ]);
//!
//! // findany n/Alice n/Bob
//! let predicate = Query::parse("n/Alice n/Bob", Mode::Any).unwrap();
//! book.update_filtered_list(&predicate);
//! assert_eq!(book.filtered_list().len(), 2);
//!
//! // filter Age 1
//! let message = FilterRequest::parse("Age 1").unwrap().apply(&mut book).unwrap();
//! assert_eq!(message, "Filtered by: Age");
//! assert_eq!(book.filtered_list()[0].name, "Bob Lee");
//! ```
//!
//! # Combination Semantics
//!
//! ```text
//! Mode::All  match = every field predicate holds   (no fields: true)
//! Mode::Any  match = some field predicate holds    (no fields: false)
//! ```

mod combine;
mod contact;
mod display;
mod error;
mod field;
mod ordering;
mod predicate;
mod query;
mod tokenizer;
mod validate;
mod value;

pub use combine::{combine, Mode};
pub use contact::{Contact, Gender};
pub use display::{AddressBook, DisplayedSet, FilterRequest, Model};
pub use error::{QueryError, Result};
pub use field::FieldTag;
pub use ordering::{comparator, Category, Comparator};
pub use predicate::{field_predicate, Predicate};
pub use query::Query;
pub use tokenizer::{tokenize, ArgumentMultimap};
pub use validate::validate;
pub use value::{compare_ignore_case, SortKey};
