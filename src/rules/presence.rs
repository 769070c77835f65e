//! Presence rule
//!
//! [`Required`] is the only rule that inspects absence itself: its input is
//! the chain's captured `Option<String>` rather than a borrowed `str`, so a
//! missing field and a whitespace-only value fail the same way.

use crate::foundation::Violation;

crate::rule! {
    /// Validates that a value is present and not blank.
    ///
    /// Fails when the value is absent or, after trimming leading and
    /// trailing whitespace, empty.
    pub Required for Option<String>;
    check(input) { input.as_deref().is_some_and(|value| !value.trim().is_empty()) }
    violation(input) {
        Violation::new("This field is required.", "Please enter a value.")
    }
    fn required();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_required_accepts_non_blank() {
        let rule = required();
        assert!(rule.check(&Some("hello".to_owned())).is_ok());
        assert!(rule.check(&Some(" x ".to_owned())).is_ok());
    }

    #[test]
    fn test_required_rejects_empty() {
        assert!(required().check(&Some(String::new())).is_err());
    }

    #[test]
    fn test_required_rejects_whitespace_only() {
        assert!(required().check(&Some("   ".to_owned())).is_err());
        assert!(required().check(&Some("\t\n".to_owned())).is_err());
    }

    #[test]
    fn test_required_rejects_absent() {
        assert!(required().check(&None).is_err());
    }

    #[test]
    fn test_required_violation_content() {
        let err = required().check(&None).unwrap_err();
        assert_eq!(err.message, "This field is required.");
        assert_eq!(err.correction, "Please enter a value.");
    }
}
