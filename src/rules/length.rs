//! String length rules
//!
//! This module provides rules for checking string length bounds.
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructor for byte-length counting when performance
//! is critical and the input is known to be ASCII.

use crate::foundation::Violation;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    check(self, input) { self.mode.measure(input) >= self.min }
    violation(self, input) {
        Violation::new(
            format!("Minimum length is {} characters.", self.min),
            format!(
                "Please enter at least {} characters. Current length is {}.",
                self.min,
                self.mode.measure(input),
            ),
        )
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length rule that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    check(self, input) { self.mode.measure(input) <= self.max }
    violation(self, input) {
        Violation::new(
            format!("Maximum length is {} characters.", self.max),
            format!(
                "Please enter no more than {} characters. Current length is {}.",
                self.max,
                self.mode.measure(input),
            ),
        )
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length rule that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
