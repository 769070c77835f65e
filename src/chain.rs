//! The rule chain
//!
//! [`StringRules`] captures one subject value and applies rules in call
//! order, accumulating their violations. It is a builder value: every rule
//! method consumes the chain and returns the updated one, so a schema
//! closure reads as a single fluent expression.

use std::borrow::Cow;

use regex::Regex;

use crate::foundation::{Rule, Subject, Violation, Violations};
use crate::rules::{
    Alphanumeric, Email, Matches, MaxLength, MinLength, Predicate, Required,
};

// ============================================================================
// STRING RULES
// ============================================================================

/// An ordered rule chain over a single string subject.
///
/// The subject is captured at construction and never mutated; `None` models
/// a field absent from the input record. Each rule method checks the subject
/// immediately and appends at most one [`Violation`]; rules are independent
/// appends, so chain order determines violation order and repeated rules
/// repeat their violations.
///
/// Absent subjects fail [`required`](Self::required) and silently skip every
/// value rule; a chain never panics on a missing field.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let rules = string("us").required().min(3).max(30).alphanum();
/// assert!(!rules.is_valid());
/// assert_eq!(rules.violations().len(), 1); // only the min rule fails
/// ```
#[derive(Debug, Clone)]
pub struct StringRules {
    value: Option<String>,
    violations: Violations,
}

impl StringRules {
    /// Captures a subject and starts an empty chain.
    ///
    /// Accepts the common string shapes (`&str`, `String`, `Option<&str>`,
    /// `Option<String>`, `&Option<String>`) via [`Subject`].
    pub fn new(subject: impl Subject) -> Self {
        Self {
            value: subject.into_subject(),
            violations: Violations::new(),
        }
    }

    /// Starts a chain over an absent subject.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            value: None,
            violations: Violations::new(),
        }
    }

    /// Returns the captured subject, if present.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Applies any value rule to the subject.
    ///
    /// This is the extension seam: rules created with [`rule!`](crate::rule!)
    /// or hand-implemented [`Rule`]s plug into a chain here. Skipped when the
    /// subject is absent.
    #[must_use]
    pub fn apply(mut self, rule: impl Rule<Input = str>) -> Self {
        if let Some(value) = &self.value {
            if let Err(violation) = rule.check(value) {
                self.violations.push(violation);
            }
        }
        self
    }

    /// Requires a present, non-blank subject.
    ///
    /// The one rule that runs even when the subject is absent.
    #[must_use]
    pub fn required(mut self) -> Self {
        if let Err(violation) = Required.check(&self.value) {
            self.violations.push(violation);
        }
        self
    }

    /// Requires at least `length` characters.
    #[must_use]
    pub fn min(self, length: usize) -> Self {
        self.apply(MinLength::new(length))
    }

    /// Requires at most `length` characters.
    #[must_use]
    pub fn max(self, length: usize) -> Self {
        self.apply(MaxLength::new(length))
    }

    /// Requires the subject to match `pattern` ("Invalid format." on failure).
    #[must_use]
    pub fn pattern(self, pattern: &Regex) -> Self {
        self.apply(Matches::from_regex(pattern))
    }

    /// Requires the subject to match `pattern`, with a custom message.
    #[must_use]
    pub fn pattern_with(self, pattern: &Regex, message: impl Into<Cow<'static, str>>) -> Self {
        self.apply(Matches::from_regex(pattern).with_message(message))
    }

    /// Requires one or more ASCII letters or digits.
    #[must_use]
    pub fn alphanum(self) -> Self {
        self.apply(Alphanumeric)
    }

    /// Requires an email-shaped subject.
    #[must_use]
    pub fn email(self) -> Self {
        self.apply(Email::new())
    }

    /// Applies a caller-supplied check ("Validation failed." on failure).
    ///
    /// The closure returns `Ok(())` to pass or `Err(correction)` to fail
    /// with a suggested correction.
    #[must_use]
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String>,
    {
        self.apply(Predicate::new(check))
    }

    /// Applies a caller-supplied check with a custom message.
    #[must_use]
    pub fn custom_with<F>(self, message: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String>,
    {
        self.apply(Predicate::new(check).with_message(message))
    }

    /// Returns true iff no rule has failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in rule invocation order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        self.violations.as_slice()
    }

    /// Consumes the chain and returns its violation sequence.
    #[must_use]
    pub fn into_violations(self) -> Violations {
        self.violations
    }
}

/// Starts a rule chain over `subject`.
///
/// The schema-closure counterpart of [`StringRules::new`]:
///
/// ```rust,ignore
/// Schema::new().field("username", |v| string(v).required().min(3))
/// ```
pub fn string(subject: impl Subject) -> StringRules {
    StringRules::new(subject)
}

// ============================================================================
// TESTS
// ============================================================================
