//! Violation types for failed rules
//!
//! A [`Violation`] pairs a human-readable message with a suggested
//! correction. [`Violations`] is the ordered sequence a rule chain
//! accumulates, and [`ErrorMap`] is the per-field collection a schema
//! validation produces.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of the fixed built-in messages.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VIOLATION
// ============================================================================

/// One failed rule: what went wrong and how to fix it.
///
/// Violations are immutable once created and never propagate as `Err`;
/// they are plain data, surfaced through [`Violations`] and [`ErrorMap`].
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::foundation::Violation;
///
/// // Static strings — zero allocation:
/// let v = Violation::new("This field is required.", "Please enter a value.");
///
/// // Dynamic strings — allocates only when needed:
/// let v = Violation::new(
///     format!("Minimum length is {} characters.", 3),
///     format!("Please enter at least {} characters. Current length is {}.", 3, 2),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Human-readable description of the failed rule.
    pub message: Cow<'static, str>,

    /// Suggested correction shown alongside the message.
    pub correction: Cow<'static, str>,
}

impl Violation {
    /// Creates a new violation from a message and a correction.
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        correction: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message: message.into(),
            correction: correction.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Help: {}", self.message, self.correction)
    }
}

// ============================================================================
// VIOLATION SEQUENCE
// ============================================================================

/// An ordered sequence of violations.
///
/// Insertion order is rule invocation order, and the sequence only grows;
/// rules append independently and never inspect or remove earlier entries.
///
/// Backed by a small-vector optimization: a failing field rarely carries
/// more than a handful of violations, so the common case stays inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(SmallVec<[Violation; 4]>);

impl Violations {
    /// Creates a new empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no rule has failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the violations in accumulation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Iterates over the violations in accumulation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = smallvec::IntoIter<[Violation; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} violation(s):", self.0.len())?;
        for (i, violation) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Per-field validation outcome: field name to ordered violation list.
///
/// Contains entries only for fields that failed at least one rule, in the
/// order the schema evaluated them. Produced fresh per
/// [`validate`](crate::schema::validate) call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    fields: IndexMap<String, Violations>,
}

impl ErrorMap {
    /// Creates a new empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Records a field's violation list under its name.
    ///
    /// Re-inserting a field replaces its list but keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, violations: Violations) {
        self.fields.insert(field.into(), violations);
    }

    /// Returns the violations recorded for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Violations> {
        self.fields.get(field)
    }

    /// Returns true if the field failed at least one rule.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over failing fields in evaluation order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Violations> {
        self.fields.iter()
    }

    /// Converts the map to a JSON value (for API payloads).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(field, violations)| {
                let list = violations
                    .iter()
                    .map(|v| {
                        serde_json::json!({
                            "message": v.message,
                            "correction": v.correction,
                        })
                    })
                    .collect();
                (field.clone(), serde_json::Value::Array(list))
            })
            .collect();
        serde_json::Value::Object(fields)
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a String, &'a Violations);
    type IntoIter = indexmap::map::Iter<'a, String, Violations>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, Violations);
    type IntoIter = indexmap::map::IntoIter<String, Violations>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.fields.len())?;
        for (field, violations) in &self.fields {
            writeln!(f, "  {field}:")?;
            for (i, violation) in violations.iter().enumerate() {
                writeln!(f, "    {}. {}", i + 1, violation)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
