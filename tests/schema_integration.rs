//! End-to-end schema runner tests for fieldcheck.

use std::sync::LazyLock;

use fieldcheck::prelude::*;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

static PASSWORD_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,30}$").expect("password pattern compiles"));

fn signup_schema() -> Schema {
    Schema::new()
        .field("username", |v| string(v).required().min(3).max(30).alphanum())
        .field("email", |v| string(v).required().email())
        .field("password", |v| {
            string(v).required().min(8).max(30).pattern_with(
                &PASSWORD_SHAPE,
                "Password must be 3-30 alphanumeric characters.",
            )
        })
}

fn record(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// ============================================================================
// FULL SIGNUP SCENARIO
// ============================================================================

#[test]
fn broken_signup_record_reports_every_field() {
    let data = record(&[
        ("username", "us"),
        ("email", "user@ex@ample.com"),
        ("password", "pa"),
    ]);

    let errors = validate(&signup_schema(), &data);

    assert_eq!(errors.len(), 3);

    let username = errors.get("username").expect("username failed");
    assert_eq!(
        username
            .iter()
            .map(|v| v.message.as_ref())
            .collect::<Vec<_>>(),
        vec!["Minimum length is 3 characters."]
    );
    assert_eq!(
        username.as_slice()[0].correction,
        "Please enter at least 3 characters. Current length is 2."
    );

    let email = errors.get("email").expect("email failed");
    assert_eq!(email.len(), 1);
    assert_eq!(email.as_slice()[0].message, "Invalid email format.");

    // Both the length rule and the shape rule fail, in chain order.
    let password = errors.get("password").expect("password failed");
    assert_eq!(
        password
            .iter()
            .map(|v| v.message.as_ref())
            .collect::<Vec<_>>(),
        vec![
            "Minimum length is 8 characters.",
            "Password must be 3-30 alphanumeric characters.",
        ]
    );
}

#[test]
fn clean_signup_record_passes() {
    let data = record(&[
        ("username", "alice42"),
        ("email", "alice@example.com"),
        ("password", "hunter2hunter2"),
    ]);

    let errors = validate(&signup_schema(), &data);
    assert!(errors.is_empty());
    assert_eq!(errors.to_json_value(), serde_json::json!({}));
}

#[test]
fn missing_fields_fail_required_without_panicking() {
    let errors = validate(&signup_schema(), &IndexMap::new());

    assert_eq!(errors.len(), 3);
    for (_, violations) in &errors {
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.as_slice()[0].message, "This field is required.");
    }
}

// ============================================================================
// PARAMETERIZED RULE CASES
// ============================================================================

#[rstest]
#[case::plain("user@example.com", true)]
#[case::subdomain("a@b.co", true)]
#[case::double_at("user@ex@ample.com", false)]
#[case::no_at("user.example.com", false)]
#[case::no_dot("user@example", false)]
#[case::space("us er@example.com", false)]
fn email_shapes(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(string(input).email().is_valid(), valid, "input: {input:?}");
}

#[rstest]
#[case::letters_digits("user1", true)]
#[case::digits_only("12345", true)]
#[case::empty("", false)]
#[case::underscore("user_1", false)]
#[case::space("user 1", false)]
#[case::accented("caf\u{e9}", false)]
fn alphanum_shapes(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(string(input).alphanum().is_valid(), valid, "input: {input:?}");
}

#[rstest]
#[case::empty("", false)]
#[case::spaces("   ", false)]
#[case::tab_newline("\t\n", false)]
#[case::word("hello", true)]
#[case::padded(" x ", true)]
fn required_shapes(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(string(input).required().is_valid(), valid, "input: {input:?}");
}

// ============================================================================
// SERIALIZATION SURFACE
// ============================================================================

#[test]
fn error_map_serializes_messages_and_corrections() {
    let data = record(&[
        ("username", "us"),
        ("email", "alice@example.com"),
        ("password", "hunter2hunter2"),
    ]);
    let errors = validate(&signup_schema(), &data);

    let json = serde_json::to_value(&errors).expect("error map serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "username": [{
                "message": "Minimum length is 3 characters.",
                "correction": "Please enter at least 3 characters. Current length is 2.",
            }],
        })
    );
}

#[test]
fn json_record_and_native_record_agree() {
    let native = record(&[
        ("username", "us"),
        ("email", "user@ex@ample.com"),
        ("password", "pa"),
    ]);
    let json = serde_json::json!({
        "username": "us",
        "email": "user@ex@ample.com",
        "password": "pa",
    });

    let schema = signup_schema();
    assert_eq!(
        validate(&schema, &native).to_json_value(),
        validate_json(&schema, &json).to_json_value()
    );
}

#[test]
fn display_summary_names_each_failing_field() {
    let data = record(&[("username", ""), ("email", "nope"), ("password", "pw12345678")]);
    let rendered = validate(&signup_schema(), &data).to_string();

    assert!(rendered.starts_with("Validation failed for 2 field(s):"));
    assert!(rendered.contains("  username:"));
    assert!(rendered.contains("  email:"));
    assert!(!rendered.contains("password"));
}
