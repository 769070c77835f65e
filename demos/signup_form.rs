//! Signup form validation demo
//!
//! Runs a fixed schema against a deliberately broken record and prints the
//! error summary. Run with `cargo run --example signup_form`.

use std::sync::LazyLock;

use fieldcheck::prelude::*;
use regex::Regex;

static PASSWORD_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,30}$").expect("password pattern compiles"));

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema = Schema::new()
        .field("username", |v| {
            string(v)
                .required()
                .min(3)
                .max(30)
                .alphanum()
                .custom_with("Reserved username.", |name| {
                    if name.eq_ignore_ascii_case("admin") {
                        Err("Pick a name that is not reserved.".to_owned())
                    } else {
                        Ok(())
                    }
                })
        })
        .field("email", |v| string(v).required().email())
        .field("password", |v| {
            string(v).required().min(8).max(30).pattern_with(
                &PASSWORD_SHAPE,
                "Password must be 3-30 alphanumeric characters.",
            )
        });

    let data = serde_json::json!({
        "username": "us",
        "email": "user@ex@ample.com",
        "password": "pa",
    });

    let errors = validate_json(&schema, &data);

    if errors.is_empty() {
        println!("Validation successful!");
    } else {
        eprintln!("{errors}");
        eprintln!("As JSON: {}", errors.to_json_value());
    }
}
