//! Folding a predicate set into one predicate.

use std::fmt;

use crate::predicate::Predicate;

/// How the predicates of one query are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every predicate must hold (empty set holds vacuously).
    #[default]
    All,
    /// At least one predicate must hold (empty set never holds).
    Any,
}

impl Mode {
    /// Returns `true` for [`Mode::All`].
    pub fn is_conjunction(self) -> bool {
        matches!(self, Mode::All)
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Any => "any",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combines `predicates` into one predicate under `mode`.
///
/// Members are evaluated in insertion order and evaluation stops as soon as
/// the outcome is decided.
pub fn combine(predicates: Vec<Predicate>, mode: Mode) -> Predicate {
    match mode {
        Mode::All => Predicate::new(move |c| predicates.iter().all(|p| p.test(c))),
        Mode::Any => Predicate::new(move |c| predicates.iter().any(|p| p.test(c))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn named(name: &'static str) -> Predicate {
        Predicate::new(move |c| c.name == name)
    }

    #[test]
    fn empty_conjunction_is_true() {
        assert!(combine(vec![], Mode::All).test(&Contact::new("x")));
    }

    #[test]
    fn empty_disjunction_is_false() {
        assert!(!combine(vec![], Mode::Any).test(&Contact::new("x")));
    }

    #[test]
    fn conjunction_requires_all() {
        let p = combine(
            vec![named("a"), Predicate::new(|c| c.age == Some(1))],
            Mode::All,
        );
        assert!(p.test(&Contact::new("a").with_age(1)));
        assert!(!p.test(&Contact::new("a").with_age(2)));
        assert!(!p.test(&Contact::new("b").with_age(1)));
    }

    #[test]
    fn disjunction_requires_one() {
        let p = combine(vec![named("a"), named("b")], Mode::Any);
        assert!(p.test(&Contact::new("a")));
        assert!(p.test(&Contact::new("b")));
        assert!(!p.test(&Contact::new("c")));
    }

    #[test]
    fn short_circuits_in_insertion_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = Predicate::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let p = combine(vec![Predicate::new(|_| true), counted], Mode::Any);
        assert!(p.test(&Contact::new("x")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn mode_names() {
        assert!(Mode::All.is_conjunction());
        assert!(!Mode::Any.is_conjunction());
        assert_eq!(Mode::Any.to_string(), "any");
    }
}
