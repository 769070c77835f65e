//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in all
//! commonly needed traits, types, rules, and the schema runner.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("username", |v| string(v).required().min(3).max(30).alphanum());
//! let errors = validate(&schema, &data);
//! ```

// ============================================================================
// FOUNDATION: Core traits and violation types
// ============================================================================

pub use crate::foundation::{ErrorMap, Rule, Subject, Violation, Violations};

// ============================================================================
// CHAIN: The fluent rule engine
// ============================================================================

pub use crate::chain::{StringRules, string};

// ============================================================================
// RULES: Built-in rules and their factories
// ============================================================================

pub use crate::rules::{
    Alphanumeric, Email, LengthMode, Matches, MaxLength, MinLength, Predicate, Required,
    RuleError, alphanumeric, email, matches, max_length, min_length, predicate, required,
};

// ============================================================================
// SCHEMA: Runner
// ============================================================================

pub use crate::schema::{Schema, validate, validate_json};
