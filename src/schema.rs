//! Schema runner
//!
//! A [`Schema`] maps field names to factory closures that configure a rule
//! chain for that field's value; [`validate`] applies it to a data record
//! and collects the per-field violation lists into an [`ErrorMap`].

use std::fmt;

use indexmap::IndexMap;

use crate::chain::StringRules;
use crate::foundation::ErrorMap;

// ============================================================================
// SCHEMA
// ============================================================================

/// A factory producing a configured rule chain for one field's value.
///
/// Receives `None` when the field is absent from the data record.
type FieldFactory = Box<dyn Fn(Option<&str>) -> StringRules + Send + Sync>;

/// An ordered mapping from field name to rule-chain factory.
///
/// Field registration order is evaluation order. Factories are `Send + Sync`
/// so a schema can live in a `LazyLock` static and be shared across threads;
/// the runner itself holds no mutable state.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::prelude::*;
///
/// let schema = Schema::new()
///     .field("username", |v| string(v).required().min(3).max(30).alphanum())
///     .field("email", |v| string(v).required().email());
/// ```
#[derive(Default)]
pub struct Schema {
    fields: IndexMap<String, FieldFactory>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Registers a field and its rule-chain factory.
    ///
    /// Re-registering a field replaces its factory but keeps its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(
        mut self,
        name: impl Into<String>,
        factory: impl Fn(Option<&str>) -> StringRules + Send + Sync + 'static,
    ) -> Self {
        self.fields.insert(name.into(), Box::new(factory));
        self
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over registered field names in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// VALIDATE
// ============================================================================

/// Applies `schema` to `data`, collecting violations per failing field.
///
/// For each schema field in registration order, the factory is invoked with
/// the field's value (`None` when absent from `data`); the whole rule chain
/// runs synchronously inside that call. Only failing fields appear in the
/// returned map. Fields present in `data` but not in `schema` are ignored.
///
/// # Examples
///
/// ```rust,ignore
/// let errors = validate(&schema, &data);
/// if errors.is_empty() {
///     println!("Validation successful!");
/// } else {
///     eprintln!("{errors}");
/// }
/// ```
pub fn validate(schema: &Schema, data: &IndexMap<String, String>) -> ErrorMap {
    run(schema, |name| data.get(name).map(String::as_str))
}

/// Applies `schema` to a JSON record.
///
/// JSON strings are present values; `null`, missing keys, non-string values,
/// and a non-object `data` all count as absent (they fail `required` and
/// skip value rules, same as a missing field).
pub fn validate_json(schema: &Schema, data: &serde_json::Value) -> ErrorMap {
    run(schema, |name| data.get(name).and_then(serde_json::Value::as_str))
}

fn run<'a>(schema: &Schema, lookup: impl Fn(&str) -> Option<&'a str>) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for (name, factory) in &schema.fields {
        let rules = factory(lookup(name));
        if rules.is_valid() {
            tracing::trace!(field = %name, "field passed validation");
        } else {
            tracing::debug!(
                field = %name,
                violations = rules.violations().len(),
                "field failed validation"
            );
            errors.insert(name.clone(), rules.into_violations());
        }
    }
    errors
}

// ============================================================================
// TESTS
// ============================================================================
