//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a complete rule (struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::rule;
//! use fieldcheck::foundation::{Rule, Violation};
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub Alphanumeric for str;
//!     check(input) { input.chars().all(|c| c.is_ascii_alphanumeric()) }
//!     violation(input) {
//!         Violation::new("Only alphanumeric characters are allowed.",
//!                        "Please use only letters and numbers.")
//!     }
//!     fn alphanumeric();
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     check(self, input) { input.chars().count() >= self.min }
//!     violation(self, input) {
//!         Violation::new(format!("Minimum length is {} characters.", self.min),
//!                        "Please enter more characters.")
//!     }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Alphanumeric for str;
///     check(input) { input.chars().all(|c| c.is_ascii_alphanumeric()) }
///     violation(input) { Violation::new("not alphanumeric", "letters and digits only") }
///     fn alphanumeric();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(PartialEq, Eq, Hash)]
///     pub Forbidden { word: String } for str;
///     check(self, input) { !input.contains(&self.word) }
///     violation(self, input) {
///         Violation::new(format!("Must not contain '{}'.", self.word), "Remove it.")
///     }
///     fn forbidden(word: String);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize, mode: LengthMode } for str;
///     check(self, input) { self.mode.measure(input) >= self.min }
///     violation(self, input) { /* ... */ }
///     new(min: usize) { Self { min, mode: LengthMode::Chars } }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        check($inp:ident) $check:block
        violation($vinp:ident) $viol:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name for $input;
            check($inp) $check
            violation($vinp) $viol
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        check($inp:ident) $check:block
        violation($vinp:ident) $viol:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $check {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($viol)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        violation($self2:ident, $vinp:ident) $viol:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            check($self_, $inp) $check
            violation($self2, $vinp) $viol
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        violation($self2:ident, $vinp:ident) $viol:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $check {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($viol)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        violation($self2:ident, $vinp:ident) $viol:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            check($self_, $inp) $check
            violation($self2, $vinp) $viol
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $inp:ident) $check:block
        violation($self2:ident, $vinp:ident) $viol:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn check(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $check {
                    Ok(())
                } else {
                    let $vinp = $inp;
                    Err($viol)
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
