//! Character-class rules
//!
//! Checks over the characters a string may contain.

use crate::foundation::Violation;

crate::rule! {
    /// Validates that a string consists of one or more ASCII letters or
    /// digits.
    ///
    /// The empty string fails: at least one character is required. Non-ASCII
    /// letters fail too, matching the anchored `[a-zA-Z0-9]+` contract.
    pub Alphanumeric for str;
    check(input) {
        !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric())
    }
    violation(input) {
        Violation::new(
            "Only alphanumeric characters are allowed.",
            "Please use only letters and numbers.",
        )
    }
    fn alphanumeric();
}

// ============================================================================
// TESTS
// ============================================================================
