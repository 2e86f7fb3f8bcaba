//! Reduces any raised error to a single message string.
//!
//! Upstream integrations fail with loosely shaped objects. Known shapes are
//! tried in order and the first match decides the message. Shapes that need
//! a specific HTTP status are rewritten into a coded message
//! (`"<status>:<text>"`) for the exception filter to decode.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::{CodedMessage, RaisedError, GENERIC_ERROR_MESSAGE};

/// Driver error code for a unique index violation
const DUPLICATE_KEY_CODE: f64 = 11000.0;

/// Marker of a failed cast of a path parameter to a document id
const OBJECT_ID_CAST_MARKER: &str = "Cast to ObjectId";

/// Fields that may describe an upstream failure, in order of preference
const MESSAGE_POINTERS: [&str; 4] = ["/message", "/data/message", "/data/error", "/error"];

static OBJECT_ID_CAST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"value\s+"([^"]+)"[\s\S]+path\s+"([^"]+)""#)
        .expect("Invalid regex pattern for ObjectId cast errors")
});

/// Recognized shape of an upstream error object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorShape<'a> {
    /// Unique index violation; holds the first offending value
    DuplicateKey { value: String },
    /// Carries a descriptive message in one of the known fields
    Described(&'a str),
    /// Nothing usable
    Opaque,
}

type ShapeMatcher = for<'a> fn(&'a Value) -> Option<ErrorShape<'a>>;

/// Matchers in precedence order
const SHAPE_MATCHERS: [ShapeMatcher; 2] = [match_duplicate_key, match_described];

impl<'a> ErrorShape<'a> {
    pub fn of(value: &'a Value) -> Self {
        SHAPE_MATCHERS
            .iter()
            .find_map(|matcher| matcher(value))
            .unwrap_or(ErrorShape::Opaque)
    }
}

/// Produce the message for a raised error. The result may carry an embedded
/// status prefix.
pub fn normalize_error_message(error: &RaisedError) -> String {
    match error {
        RaisedError::Message(message) => message.clone(),
        RaisedError::Http(exception) if exception.message.is_empty() => {
            GENERIC_ERROR_MESSAGE.to_string()
        }
        RaisedError::Http(exception) => rewrite_object_id_cast(&exception.message),
        RaisedError::Object(Value::String(message)) => message.clone(),
        RaisedError::Object(value) => match ErrorShape::of(value) {
            ErrorShape::DuplicateKey { value } => {
                CodedMessage::coded(StatusCode::CONFLICT, format!("{value} is already in use."))
                    .to_string()
            }
            ErrorShape::Described(message) => rewrite_object_id_cast(message),
            ErrorShape::Opaque => GENERIC_ERROR_MESSAGE.to_string(),
        },
    }
}

fn match_duplicate_key(value: &Value) -> Option<ErrorShape<'_>> {
    let response = value.get("errorResponse")?;
    if response.get("code").and_then(Value::as_f64) != Some(DUPLICATE_KEY_CODE) {
        return None;
    }

    // First key in document order, not sorted order
    let (_, offending) = response
        .get("keyValue")
        .and_then(Value::as_object)
        .and_then(first_entry)?;

    Some(ErrorShape::DuplicateKey {
        value: display_value(offending),
    })
}

fn match_described(value: &Value) -> Option<ErrorShape<'_>> {
    MESSAGE_POINTERS
        .iter()
        .filter_map(|pointer| value.pointer(pointer))
        .filter_map(Value::as_str)
        .find(|message| !message.is_empty())
        .map(ErrorShape::Described)
}

fn first_entry(map: &Map<String, Value>) -> Option<(&String, &Value)> {
    map.iter().next()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Rewrite a failed ObjectId cast into a 400 naming the value and field.
/// Messages that do not match pass through unchanged.
fn rewrite_object_id_cast(message: &str) -> String {
    if !message.contains(OBJECT_ID_CAST_MARKER) {
        return message.to_string();
    }

    match OBJECT_ID_CAST.captures(message) {
        Some(captures) => CodedMessage::coded(
            StatusCode::BAD_REQUEST,
            format!(
                "The provided value [{}] is not a valid ObjectId for the field [{}].",
                &captures[1], &captures[2]
            ),
        )
        .to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HttpException;
    use serde_json::json;

    const CAST_MESSAGE: &str =
        r#"Cast to ObjectId failed for value "abc" (type string) at path "id" for model "User""#;

    #[test]
    fn test_strings_pass_through_unchanged() {
        for message in ["Not found", "404:Not found", CAST_MESSAGE] {
            assert_eq!(normalize_error_message(&RaisedError::from(message)), message);
        }
    }

    #[test]
    fn test_duplicate_key_reports_conflict() {
        let error = RaisedError::from(json!({
            "errorResponse": { "code": 11000, "keyValue": { "email": "a@b.com" } }
        }));
        assert_eq!(normalize_error_message(&error), "409:a@b.com is already in use.");
    }

    #[test]
    fn test_duplicate_key_uses_first_key_in_document_order() {
        let error = RaisedError::from(json!({
            "errorResponse": {
                "code": 11000,
                "keyValue": { "username": "zed", "email": "a@b.com" }
            }
        }));
        assert_eq!(normalize_error_message(&error), "409:zed is already in use.");
    }

    #[test]
    fn test_duplicate_key_renders_non_string_values() {
        let error = RaisedError::from(json!({
            "errorResponse": { "code": 11000, "keyValue": { "phone": 5551234 } }
        }));
        assert_eq!(normalize_error_message(&error), "409:5551234 is already in use.");
    }

    #[test]
    fn test_other_driver_codes_are_not_conflicts() {
        let error = RaisedError::from(json!({
            "errorResponse": { "code": 121, "keyValue": { "email": "a@b.com" } },
            "message": "Document failed validation"
        }));
        assert_eq!(normalize_error_message(&error), "Document failed validation");
    }

    #[test]
    fn test_duplicate_key_without_values_falls_through() {
        let error = RaisedError::from(json!({
            "errorResponse": { "code": 11000, "keyValue": {} },
            "message": "E11000 duplicate key error"
        }));
        assert_eq!(normalize_error_message(&error), "E11000 duplicate key error");
    }

    #[test]
    fn test_message_fallback_chain_order() {
        let cases = [
            (json!({ "message": "a", "data": { "message": "b" }, "error": "d" }), "a"),
            (json!({ "data": { "message": "b", "error": "c" }, "error": "d" }), "b"),
            (json!({ "data": { "error": "c" }, "error": "d" }), "c"),
            (json!({ "error": "d" }), "d"),
        ];
        for (value, expected) in cases {
            assert_eq!(normalize_error_message(&RaisedError::from(value)), expected);
        }
    }

    #[test]
    fn test_empty_and_non_string_fields_are_skipped() {
        let error = RaisedError::from(json!({
            "message": "",
            "data": { "message": null, "error": { "nested": true } },
            "error": "upstream timeout"
        }));
        assert_eq!(normalize_error_message(&error), "upstream timeout");
    }

    #[test]
    fn test_missing_fields_degrade_to_generic_message() {
        for value in [
            json!({}),
            json!({ "data": null }),
            json!({ "data": "not an object" }),
            json!(null),
            json!(42),
            json!([1, 2, 3]),
        ] {
            assert_eq!(
                normalize_error_message(&RaisedError::from(value.clone())),
                GENERIC_ERROR_MESSAGE,
                "{value}"
            );
        }
    }

    #[test]
    fn test_object_id_cast_is_rewritten() {
        let error = RaisedError::from(json!({ "message": CAST_MESSAGE }));
        assert_eq!(
            normalize_error_message(&error),
            "400:The provided value [abc] is not a valid ObjectId for the field [id]."
        );
    }

    #[test]
    fn test_object_id_cast_spanning_lines() {
        let error = RaisedError::from(json!({
            "message": "Cast to ObjectId failed for value \"x1\"\nat path \"owner\""
        }));
        assert_eq!(
            normalize_error_message(&error),
            "400:The provided value [x1] is not a valid ObjectId for the field [owner]."
        );
    }

    #[test]
    fn test_unmatched_object_id_cast_passes_through() {
        let error = RaisedError::from(json!({ "message": "Cast to ObjectId failed" }));
        assert_eq!(normalize_error_message(&error), "Cast to ObjectId failed");
    }

    #[test]
    fn test_declared_exception_message_is_used() {
        let error = RaisedError::from(HttpException::new(StatusCode::NOT_FOUND, "User missing"));
        assert_eq!(normalize_error_message(&error), "User missing");

        let cast = RaisedError::from(HttpException::new(StatusCode::NOT_FOUND, CAST_MESSAGE));
        assert!(normalize_error_message(&cast).starts_with("400:"));

        let empty = RaisedError::from(HttpException::new(StatusCode::NOT_FOUND, ""));
        assert_eq!(normalize_error_message(&empty), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_shape_precedence() {
        let value = json!({
            "errorResponse": { "code": 11000, "keyValue": { "email": "a@b.com" } },
            "message": "E11000 duplicate key error"
        });
        assert_eq!(
            ErrorShape::of(&value),
            ErrorShape::DuplicateKey {
                value: "a@b.com".to_string()
            }
        );
        assert_eq!(ErrorShape::of(&json!({ "x": 1 })), ErrorShape::Opaque);
    }
}
