//! String content rules
//!
//! Rules for checking string content against regular expressions.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Rule, Violation};
use crate::rules::RuleError;

/// The email heuristic: no whitespace, exactly one `@`, a dot in the domain.
///
/// Deliberately loose rather than RFC-5322-complete; it catches the common
/// shapes of mistyped addresses without rejecting unusual valid ones.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex")
});

// ============================================================================
// EMAIL RULE
// ============================================================================

crate::rule! {
    /// Validates email shape.
    ///
    /// Uses the loose [`EMAIL_PATTERN`] heuristic.
    pub Email { pattern: Regex } for str;
    check(self, input) { self.pattern.is_match(input) }
    violation(self, input) {
        Violation::new(
            "Invalid email format.",
            "Please enter a valid email address (e.g., user@example.com).",
        )
    }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// MATCHES RULE
// ============================================================================

/// Validates that a string matches a caller-supplied regular expression.
///
/// Matching uses `Regex::is_match` semantics: the pattern may hit anywhere
/// in the string, and anchoring is the caller's responsibility. The message
/// defaults to "Invalid format." and can be overridden; the correction is
/// fixed.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::rules::{Matches, matches};
///
/// let rule = matches(r"^[a-z]{3}-\d{4}$")?;
/// let named = Matches::new(r"^\d+$")?.with_message("Digits only.");
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    /// The compiled pattern.
    pub pattern: Regex,
    message: Cow<'static, str>,
}

impl Matches {
    /// Compiles `pattern` into a rule with the default message.
    ///
    /// Returns [`RuleError::Pattern`] when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self::from_regex(&Regex::new(pattern)?))
    }

    /// Creates a rule from an already compiled regex.
    ///
    /// Cloning a `Regex` is cheap (the compiled program is shared), so this
    /// is the right entry point for patterns kept in `LazyLock` statics.
    #[must_use]
    pub fn from_regex(pattern: &Regex) -> Self {
        Self {
            pattern: pattern.clone(),
            message: Cow::Borrowed("Invalid format."),
        }
    }

    /// Overrides the violation message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl Rule for Matches {
    type Input = str;

    fn check(&self, input: &str) -> Result<(), Violation> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(Violation::new(
                self.message.clone(),
                "Please follow the correct format.",
            ))
        }
    }
}

/// Compiles `pattern` into a [`Matches`] rule.
pub fn matches(pattern: &str) -> Result<Matches, RuleError> {
    Matches::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_address() {
        let rule = email();
        assert!(rule.check("user@example.com").is_ok());
        assert!(rule.check("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(email().check("user@ex@ample.com").is_err());
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(email().check("user.example.com").is_err());
    }

    #[test]
    fn test_email_rejects_missing_tld_dot() {
        assert!(email().check("user@example").is_err());
    }

    #[test]
    fn test_email_rejects_whitespace() {
        assert!(email().check("us er@example.com").is_err());
    }

    #[test]
    fn test_email_violation_content() {
        let err = email().check("nope").unwrap_err();
        assert_eq!(err.message, "Invalid email format.");
        assert_eq!(
            err.correction,
            "Please enter a valid email address (e.g., user@example.com)."
        );
    }

    #[test]
    fn test_matches_default_message() {
        let rule = matches(r"^\d{3}-\d{4}$").unwrap();
        assert!(rule.check("123-4567").is_ok());

        let err = rule.check("invalid").unwrap_err();
        assert_eq!(err.message, "Invalid format.");
        assert_eq!(err.correction, "Please follow the correct format.");
    }

    #[test]
    fn test_matches_custom_message() {
        let rule = Matches::new(r"^[a-z]+$")
            .unwrap()
            .with_message("Lowercase letters only.");
        let err = rule.check("ABC").unwrap_err();
        assert_eq!(err.message, "Lowercase letters only.");
    }

    #[test]
    fn test_matches_unanchored_semantics() {
        // Anchors belong to the caller, as with `regex.test`.
        let rule = matches("bc").unwrap();
        assert!(rule.check("abcd").is_ok());
    }

    #[test]
    fn test_matches_rejects_bad_pattern() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn test_from_regex_shares_compilation() {
        let compiled = Regex::new(r"^\d+$").unwrap();
        let rule = Matches::from_regex(&compiled);
        assert!(rule.check("42").is_ok());
        assert!(rule.check("x").is_err());
    }
}
