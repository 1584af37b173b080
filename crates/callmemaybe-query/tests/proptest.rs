//! Property-based tests for the query engine using proptest.

use callmemaybe_query::{
    combine, comparator, field_predicate, AddressBook, Category, Contact, DisplayedSet, FieldTag,
    FilterRequest, Gender, Mode, Model, Predicate,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        "[A-Za-z]{1,6}( [A-Za-z]{1,6})?",
        "[0-9]{0,8}",
        prop::option::of(prop_oneof![Just(Gender::Male), Just(Gender::Female)]),
        prop::option::of(0u32..100),
        any::<bool>(),
        prop::collection::btree_set("[a-z]{1,5}", 0..3),
    )
        .prop_map(|(name, phone, gender, age, done, interests)| Contact {
            name,
            phone,
            email: String::new(),
            address: String::new(),
            gender,
            age,
            done,
            interests,
        })
}

fn orderable_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Name),
        Just(Category::Phone),
        Just(Category::Email),
        Just(Category::Address),
        Just(Category::Gender),
        Just(Category::Age),
        Just(Category::Done),
    ]
}

/// A small family of predicates indexed by number, so sets can be generated.
fn predicate_for(index: u8) -> Predicate {
    match index % 4 {
        0 => Predicate::new(|c| c.done),
        1 => Predicate::new(|c| c.age.is_some_and(|a| a >= 50)),
        2 => Predicate::new(|c| c.gender.is_none()),
        _ => Predicate::new(|c| c.name.len() > 4),
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Conjunction equals `all` over the members.
    #[test]
    fn conjunction_is_all(
        indices in prop::collection::vec(any::<u8>(), 0..6),
        contact in contact_strategy(),
    ) {
        let expected = indices.iter().all(|i| predicate_for(*i).test(&contact));
        let combined = combine(indices.iter().map(|i| predicate_for(*i)).collect(), Mode::All);
        prop_assert_eq!(combined.test(&contact), expected);
    }

    /// Disjunction equals `any` over the members.
    #[test]
    fn disjunction_is_any(
        indices in prop::collection::vec(any::<u8>(), 0..6),
        contact in contact_strategy(),
    ) {
        let expected = indices.iter().any(|i| predicate_for(*i).test(&contact));
        let combined = combine(indices.iter().map(|i| predicate_for(*i)).collect(), Mode::Any);
        prop_assert_eq!(combined.test(&contact), expected);
    }

    /// Non-empty values build for every tag except non-numeric age text.
    #[test]
    fn factory_only_fails_on_non_numeric_age(raw in "[a-z0-9.]{1,8}( [a-z0-9.]{1,8}){0,2}") {
        for tag in FieldTag::ALL {
            let result = field_predicate(tag, &raw);
            let numeric = raw.split_whitespace().all(|t| t.parse::<i64>().is_ok());
            if tag == FieldTag::Age && !numeric {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }

    /// Sorting an already sorted set changes nothing.
    #[test]
    fn sort_is_idempotent(
        contacts in prop::collection::vec(contact_strategy(), 0..30),
        category in orderable_category(),
    ) {
        let cmp = comparator(category).unwrap();
        let mut once = DisplayedSet::new(contacts);
        once.sort(&cmp);
        let mut twice = once.clone();
        twice.sort(&cmp);
        prop_assert_eq!(once, twice);
    }

    /// The sorted order does not depend on the input order.
    #[test]
    fn sort_is_deterministic(
        contacts in prop::collection::vec(contact_strategy(), 0..30),
        category in orderable_category(),
    ) {
        let cmp = comparator(category).unwrap();
        let mut forward = DisplayedSet::new(contacts.clone());
        let mut reversed = DisplayedSet::new(contacts.into_iter().rev().collect());
        forward.sort(&cmp);
        reversed.sort(&cmp);
        prop_assert_eq!(forward, reversed);
    }

    /// Limiting twice by the same count equals limiting once.
    #[test]
    fn limit_is_idempotent(
        contacts in prop::collection::vec(contact_strategy(), 0..30),
        count in 0i64..40,
    ) {
        let mut once = DisplayedSet::new(contacts);
        once.limit(count).unwrap();
        let mut twice = once.clone();
        twice.limit(count).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() as i64 <= count);
    }

    /// A count at or above the size leaves the set unchanged.
    #[test]
    fn limit_above_size_is_identity(
        contacts in prop::collection::vec(contact_strategy(), 0..30),
        extra in 0i64..10,
    ) {
        let mut set = DisplayedSet::new(contacts.clone());
        set.limit(contacts.len() as i64 + extra).unwrap();
        prop_assert_eq!(set.as_slice(), contacts.as_slice());
    }

    /// A negative count always fails and never mutates.
    #[test]
    fn negative_limit_never_mutates(
        contacts in prop::collection::vec(contact_strategy(), 0..30),
        count in i64::MIN..0,
    ) {
        let mut book = AddressBook::new(contacts.clone());
        prop_assert!(book.limit_filtered_list(count).is_err());
        prop_assert_eq!(book.filtered_list(), contacts.as_slice());
    }

    /// The filter pipeline keeps a prefix of the fully sorted set.
    #[test]
    fn filter_keeps_sorted_prefix(
        contacts in prop::collection::vec(contact_strategy(), 0..30),
        category in orderable_category(),
        count in 0usize..40,
    ) {
        let mut sorted = DisplayedSet::new(contacts.clone());
        sorted.sort(&comparator(category).unwrap());

        let mut book = AddressBook::new(contacts);
        FilterRequest::new(category, count).apply(&mut book).unwrap();

        let expected = &sorted.as_slice()[..count.min(sorted.len())];
        prop_assert_eq!(book.filtered_list(), expected);
    }
}
