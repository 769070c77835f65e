//! Caller-supplied predicate rule
//!
//! [`Predicate`] lifts a closure into the rule system. The closure returns a
//! tagged result instead of a bare boolean: `Ok(())` passes, and
//! `Err(correction)` fails with the suggested correction to show the user.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Rule, Violation};

/// A rule backed by a caller-supplied check.
///
/// The closure's `Err` payload becomes the violation's correction; the
/// message is fixed per rule, defaulting to "Validation failed.".
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::rules::{Predicate, predicate};
///
/// let no_spaces = predicate(|value| {
///     if value.contains(' ') {
///         Err("Remove the spaces.".to_owned())
///     } else {
///         Ok(())
///     }
/// });
///
/// let named = Predicate::new(starts_uppercase)
///     .with_message("Must start with a capital letter.");
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    message: Cow<'static, str>,
    check: F,
}

impl<F> Predicate<F>
where
    F: Fn(&str) -> Result<(), String>,
{
    /// Creates a predicate rule with the default message.
    #[must_use]
    pub fn new(check: F) -> Self {
        Self {
            message: Cow::Borrowed("Validation failed."),
            check,
        }
    }

    /// Overrides the violation message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl<F> Rule for Predicate<F>
where
    F: Fn(&str) -> Result<(), String>,
{
    type Input = str;

    fn check(&self, input: &str) -> Result<(), Violation> {
        (self.check)(input)
            .map_err(|correction| Violation::new(self.message.clone(), correction))
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .field("check", &"<function>")
            .finish()
    }
}

/// Creates a [`Predicate`] rule with the default message.
pub fn predicate<F>(check: F) -> Predicate<F>
where
    F: Fn(&str) -> Result<(), String>,
{
    Predicate::new(check)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_admin(value: &str) -> Result<(), String> {
        if value.eq_ignore_ascii_case("admin") {
            Err("Pick a name that is not reserved.".to_owned())
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_predicate_passes() {
        assert!(predicate(reject_admin).check("alice").is_ok());
    }

    #[test]
    fn test_predicate_default_message_and_correction() {
        let err = predicate(reject_admin).check("admin").unwrap_err();
        assert_eq!(err.message, "Validation failed.");
        assert_eq!(err.correction, "Pick a name that is not reserved.");
    }

    #[test]
    fn test_predicate_custom_message() {
        let rule = Predicate::new(reject_admin).with_message("Reserved username.");
        let err = rule.check("ADMIN").unwrap_err();
        assert_eq!(err.message, "Reserved username.");
    }

    #[test]
    fn test_predicate_always_ok_never_fails() {
        let rule = Predicate::new(|_| Ok(())).with_message("unused");
        assert!(rule.check("").is_ok());
        assert!(rule.check("anything").is_ok());
    }

    #[test]
    fn test_predicate_debug_hides_closure() {
        let rendered = format!("{:?}", predicate(reject_admin));
        assert!(rendered.contains("<function>"));
    }
}
