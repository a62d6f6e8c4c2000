use super::*;
use crate::net::types::{Category, Growth, Settings};

#[test]
fn decode_unwraps_success_envelope() {
    let body = r#"{"success":true,"data":[{"id":1,"name":"Web","description":"Frontend"}]}"#;
    let categories: Vec<Category> = decode(body).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Web");
}

#[test]
fn decode_accepts_bare_payload() {
    let body = r#"{"id":1,"name":"Academy","defaultLanguage":"en"}"#;
    let settings: Settings = decode(body).unwrap();
    assert_eq!(settings.name, "Academy");
    assert_eq!(settings.default_language, "en");
}

#[test]
fn decode_accepts_bare_empty_array() {
    let categories: Vec<Category> = decode("[]").unwrap();
    assert!(categories.is_empty());
}

#[test]
fn decode_failed_envelope_uses_server_message() {
    let body = r#"{"success":false,"message":"Invalid credentials"}"#;
    let err = decode::<Settings>(body).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Invalid credentials".to_owned()));
}

#[test]
fn decode_failed_envelope_without_message_uses_default() {
    let body = r#"{"success":false,"message":"  "}"#;
    let err = decode::<Settings>(body).unwrap_err();
    assert_eq!(err, ApiError::Rejected("request was rejected".to_owned()));
}

#[test]
fn decode_success_without_data_is_decode_error() {
    let err = decode::<Vec<Category>>(r#"{"success":true}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_malformed_json_is_decode_error() {
    let err = decode::<Settings>("not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_wrapped_mismatched_data_is_decode_error() {
    let err = decode::<Settings>(r#"{"success":true,"data":"oops"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_wrapped_mismatched_growth_is_decode_error() {
    let err = decode::<Growth>(r#"{"success":true,"data":[{"month":1}]}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_object_without_boolean_success_is_bare() {
    let settings: Settings = decode(r#"{"success":"yes","name":"Academy"}"#).unwrap();
    assert_eq!(settings.name, "Academy");
}
