//! Core traits for the rule system
//!
//! This module defines the capability interface every rule implements and
//! the conversion seam that lets a rule chain capture flexible subjects.

use crate::foundation::Violation;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The core trait every rule implements.
///
/// A rule is one named check over a value. It is pure: it inspects the
/// input and either passes or describes a single [`Violation`]. Rules never
/// panic on valid inputs of their `Input` type and never carry state across
/// checks.
///
/// The trait is generic over the input type so presence rules can inspect
/// an `Option` while value rules stay typed to `str`; a chain composes them
/// into an ordered list of independent appends.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::{Rule, Violation};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Rule for MinLength {
///     type Input = str;
///
///     fn check(&self, input: &str) -> Result<(), Violation> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(Violation::new(
///                 format!("Minimum length is {} characters.", self.min),
///                 "Please enter more characters.",
///             ))
///         }
///     }
/// }
/// ```
pub trait Rule {
    /// The type of input being checked.
    ///
    /// Use `?Sized` inputs like `str` for value rules; presence rules check
    /// `Option<String>` so absence itself is inspectable.
    type Input: ?Sized;

    /// Checks the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the rule passes
    /// * `Err(Violation)` describing the failure otherwise
    fn check(&self, input: &Self::Input) -> Result<(), Violation>;
}

// ============================================================================
// SUBJECT CONVERSION
// ============================================================================

/// Conversion into the subject a rule chain captures.
///
/// A chain's subject is `Option<String>`: `None` models a field that is
/// absent from the input record. Implementations exist for the common
/// string shapes so `string("abc")`, `string(value)` inside a schema
/// closure, and `string(&record.nickname)` all read the same.
pub trait Subject {
    /// Converts into the captured subject value.
    fn into_subject(self) -> Option<String>;
}

impl Subject for String {
    fn into_subject(self) -> Option<String> {
        Some(self)
    }
}

impl Subject for &str {
    fn into_subject(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl Subject for &String {
    fn into_subject(self) -> Option<String> {
        Some(self.clone())
    }
}

impl Subject for Option<String> {
    fn into_subject(self) -> Option<String> {
        self
    }
}

impl Subject for Option<&str> {
    fn into_subject(self) -> Option<String> {
        self.map(str::to_owned)
    }
}

impl Subject for &Option<String> {
    fn into_subject(self) -> Option<String> {
        self.as_deref().map(str::to_owned)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPasses;

    impl Rule for AlwaysPasses {
        type Input = str;

        fn check(&self, _input: &Self::Input) -> Result<(), Violation> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        type Input = str;

        fn check(&self, _input: &Self::Input) -> Result<(), Violation> {
            Err(Violation::new("always fails", "nothing to be done"))
        }
    }

    #[test]
    fn test_rule_trait() {
        assert!(AlwaysPasses.check("anything").is_ok());
        assert!(AlwaysFails.check("anything").is_err());
    }

    #[test]
    fn test_subject_present_shapes() {
        assert_eq!("abc".into_subject(), Some("abc".to_owned()));
        assert_eq!("abc".to_owned().into_subject(), Some("abc".to_owned()));
        assert_eq!(Some("abc").into_subject(), Some("abc".to_owned()));
        assert_eq!(
            (&Some("abc".to_owned())).into_subject(),
            Some("abc".to_owned())
        );
    }

    #[test]
    fn test_subject_absent_shapes() {
        assert_eq!(None::<&str>.into_subject(), None);
        assert_eq!(None::<String>.into_subject(), None);
        assert_eq!((&None::<String>).into_subject(), None);
    }
}
