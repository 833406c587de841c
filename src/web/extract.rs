// src/web/extract.rs
//! `Json` and `Query` wrappers whose rejections go through `AppError`, so a
//! body or query string that fails to deserialize still gets the JSON error
//! shape with a per-field entry.
use crate::error::AppError;
use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    FromRequest, FromRequestParts,
};

/// Key used when a rejection cannot be pinned to a single field.
pub const BODY_FIELD: &str = "__body__";

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        malformed(&rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        malformed(&rejection.body_text())
    }
}

fn malformed(body_text: &str) -> AppError {
    // "<what failed>: <serde path>: <serde message>"
    let detail = body_text
        .split_once(": ")
        .map(|(_, rest)| rest)
        .unwrap_or(body_text);
    let field = rejected_field(detail).unwrap_or_else(|| BODY_FIELD.to_string());
    AppError::Malformed {
        field,
        message: detail.to_string(),
    }
}

/// Pulls the offending field name out of a serde error message.
fn rejected_field(detail: &str) -> Option<String> {
    if let Some((_, rest)) = detail.split_once("missing field `") {
        return rest.split_once('`').map(|(name, _)| name.to_string());
    }
    let (path, _) = detail.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    if !is_path {
        return None;
    }
    // "courses[1]" -> "courses"
    let name = path.split(['.', '[']).next().unwrap_or(path);
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_named() {
        let detail = "missing field `education` at line 1 column 180";
        assert_eq!(rejected_field(detail).as_deref(), Some("education"));
    }

    #[test]
    fn bad_value_uses_serde_path() {
        assert_eq!(
            rejected_field("price: invalid digit found in string").as_deref(),
            Some("price")
        );
        assert_eq!(
            rejected_field("courses[1]: invalid type: string \"x\", expected i64 at line 1 column 20")
                .as_deref(),
            Some("courses")
        );
    }

    #[test]
    fn syntax_errors_fall_back_to_body() {
        assert_eq!(rejected_field("expected value at line 1 column 1"), None);
        assert_eq!(rejected_field("invalid type: integer `3`, expected a map"), None);

        let AppError::Malformed { field, .. } =
            malformed("Failed to parse the request body as JSON: expected value at line 1 column 1")
        else {
            panic!("expected a malformed-input error");
        };
        assert_eq!(field, BODY_FIELD);
    }
}
