//! Built-in rules
//!
//! One module per concern, mirroring the checks a field chain exposes:
//!
//! - [`presence`] — `Required`
//! - [`length`] — `MinLength`, `MaxLength`
//! - [`pattern`] — `Alphanumeric`
//! - [`content`] — `Email`, `Matches`
//! - [`custom`] — `Predicate`
//!
//! Every rule is a plain value implementing [`Rule`](crate::foundation::Rule)
//! and is usable on its own or through a
//! [`StringRules`](crate::chain::StringRules) chain.

pub mod content;
pub mod custom;
pub mod length;
pub mod pattern;
pub mod presence;

pub use content::{EMAIL_PATTERN, Email, Matches, email, matches};
pub use custom::{Predicate, predicate};
pub use length::{LengthMode, MaxLength, MinLength, max_length, min_length};
pub use pattern::{Alphanumeric, alphanumeric};
pub use presence::{Required, required};

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

/// Errors raised while *constructing* a rule.
///
/// Distinct from validation violations: a [`Violation`](crate::foundation::Violation)
/// is expected data describing bad input, while a `RuleError` means the rule
/// itself could not be built and is propagated to the caller as a failure.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The caller-supplied pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
