//! # fieldcheck
//!
//! Chainable field validation with human-readable corrections.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let rules = string("us").required().min(3).max(30).alphanum();
//! assert!(!rules.is_valid());
//! assert_eq!(rules.violations()[0].message, "Minimum length is 3 characters.");
//! ```
//!
//! ## Validating a record
//!
//! A [`Schema`](schema::Schema) maps field names to closures that configure a
//! rule chain for that field's value. [`validate`](schema::validate) applies
//! the schema to a data record and collects per-field violation lists:
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("username", |v| string(v).required().min(3).max(30).alphanum())
//!     .field("email", |v| string(v).required().email());
//!
//! let errors = validate(&schema, &data);
//! if !errors.is_empty() {
//!     eprintln!("{errors}");
//! }
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate rules, or implement
//! [`Rule`](foundation::Rule) manually for complex cases. Every built-in rule
//! is also reachable from the [`StringRules`](chain::StringRules) chain.
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required)
//! - **Length**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength)
//! - **Pattern**: [`Alphanumeric`](rules::Alphanumeric), [`Matches`](rules::Matches)
//! - **Content**: [`Email`](rules::Email)
//! - **Custom**: [`Predicate`](rules::Predicate)

pub mod chain;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod schema;
