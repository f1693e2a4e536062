//! Rule schemas compile to the same composite as builder code.

use loginkit_validator::prelude::*;
use pretty_assertions::assert_eq;

const LOGIN_SCHEMA: &str = r#"{
    "fields": [
        { "name": "email",    "rules": ["required", "email"] },
        { "name": "password", "rules": ["required", { "min": 5 }] }
    ]
}"#;

#[test]
fn schema_matches_builder() {
    let from_schema = FormSchema::from_json(LOGIN_SCHEMA).unwrap().compile();
    let from_builder = ValidationComposite::build([
        ValidationBuilder::field("email").required().email().build(),
        ValidationBuilder::field("password").required().min(5).build(),
    ]);
    assert_eq!(from_schema, from_builder);
}

#[test]
fn schema_composite_reports_first_errors() {
    let composite = FormSchema::from_json(LOGIN_SCHEMA).unwrap().compile();
    let values: FieldValues =
        serde_json::from_str(r#"{"email": "user@", "password": "abc"}"#).unwrap();

    let errors: Vec<String> = composite
        .validate_all(&values)
        .into_iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        errors,
        [
            "[email] invalid_email: Invalid email address",
            "[password] min_length: Must be at least 5 characters (params: [min=5, actual=3])",
        ]
    );
}

#[test]
fn schema_round_trips_through_json() {
    let schema = FormSchema::from_json(LOGIN_SCHEMA).unwrap();
    let json = serde_json::to_string(&schema).unwrap();
    assert_eq!(FormSchema::from_json(&json).unwrap(), schema);
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let err = FormSchema::from_json(r#"{"fields": [], "extra": true}"#).unwrap_err();
    assert!(matches!(err, SchemaError::Parse(_)));
}
