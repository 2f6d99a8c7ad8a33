//! Integration tests for the prelude module.
//!
//! Verifies that `use valtree::prelude::*` brings in everything a consumer
//! needs to build a tree, run it and report the findings.

use pretty_assertions::assert_eq;
use serde_json::json;
use valtree::prelude::*;

#[derive(Debug)]
struct Signup {
    username: String,
    email: Option<String>,
    referrer: Option<String>,
}

fn signup_validator() -> ConfigResult<Composite<Signup>> {
    let username = Composite::on(|s: &Signup| &s.username)
        .stop_on_first_error(true)
        .with(NotEmpty::new().with_message(Message::field(
            "username",
            "username.empty",
            "Username is required",
        )))
        .with(StringLength::new(Some(3), Some(16))?.with_message(
            Message::field("username", "username.length", "Username must be {0} to {1} characters")
                .with_params([3, 16]),
        ))
        .with(Pattern::new("[a-z0-9_]+")?.with_message(Message::field(
            "username",
            "username.pattern",
            "Username may only contain a-z, 0-9 and _",
        )));

    let email = Pattern::on(|s: &Signup| &s.email, r"[^@\s]+@[^@\s]+")?
        .with_message(Message::field("email", "email.format", "Email {1} is not valid"))
        .when(|s: &Signup| s.email.is_some());

    let referrer = Required::on(|s: &Signup| &s.referrer)
        .with_message(Message::field("referrer", "referrer.missing", "No referrer given"))
        .with_severity(Severity::Info);

    Ok(Composite::new().with(username).with(email).with(referrer))
}

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_traits() {
    let v = NotEmpty::<str>::new();
    let mut messages = Messages::new();
    v.validate("", &mut messages);
    assert!(messages.has_errors());
    assert!(v.evaluate("x").is_empty());
}

#[test]
fn valid_signup_has_only_info() {
    let validator = signup_validator().unwrap();
    let signup = Signup {
        username: "ada_l".to_string(),
        email: None,
        referrer: None,
    };

    let messages = validator.evaluate(&signup);
    assert!(!messages.has_errors());
    assert_eq!(messages.rendered(Severity::Info), vec!["No referrer given".to_string()]);
}

#[test]
fn invalid_signup_reports_first_username_error_and_email() {
    let validator = signup_validator().unwrap();
    let signup = Signup {
        username: "AB".to_string(),
        email: Some("nobody".to_string()),
        referrer: Some("friend".to_string()),
    };

    let messages = validator.evaluate(&signup);
    assert_eq!(
        messages.rendered(Severity::Error),
        vec![
            "Username must be 3 to 16 characters".to_string(),
            "Email nobody is not valid".to_string(),
        ]
    );
}

#[test]
fn json_report_via_prelude() {
    let validator = signup_validator().unwrap();
    let signup = Signup {
        username: String::new(),
        email: None,
        referrer: Some("friend".to_string()),
    };

    assert_eq!(
        validator.evaluate(&signup).to_json_value(),
        json!({
            "valid": false,
            "error_count": 1,
            "messages": [{
                "severity": "error",
                "field": "username",
                "code": "username.empty",
                "message": "Username is required",
            }],
        })
    );
}

#[test]
fn config_errors_surface_at_construction() {
    let err = Pattern::<str>::new("(").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}
