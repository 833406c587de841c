// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::{borrow::Cow, collections::BTreeMap};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to process password")]
    PasswordHashingError,

    // Field-level rejections; nothing has been written when this is returned.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    // Body or query string that did not deserialize.
    #[error("Malformed input for {field}: {message}")]
    Malformed { field: String, message: String },

    #[error("Course {0} does not exist")]
    UnknownCourse(i64),

    #[error("{0} {1} does not exist")]
    UnknownReference(&'static str, i64),

    #[error("Not found")]
    NotFound,

    #[error("Unexpected internal error")]
    InternalServerError,
}

impl AppError {
    /// Builds a validation error carrying a single field message.
    pub fn field(field: &'static str, code: &'static str, message: &'static str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new(code).with_message(Cow::Borrowed(message)));
        AppError::Validation(errors)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Vec<String>>,
}

/// Flattens validator output into `field -> [messages]`.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = BTreeMap::new();

        let (status, message) = match &self {
            AppError::Validation(errors) => {
                tracing::warn!("Rejected input: {}", errors);
                fields = field_messages(errors);
                (StatusCode::UNPROCESSABLE_ENTITY, "Some fields are invalid.".to_string())
            }
            AppError::Malformed { field, message } => {
                tracing::warn!("Rejected input: {}: {}", field, message);
                fields.insert(field.clone(), vec![message.clone()]);
                (StatusCode::UNPROCESSABLE_ENTITY, "Some fields are invalid.".to_string())
            }
            AppError::UnknownCourse(_) | AppError::UnknownReference(..) => {
                tracing::warn!("Referential error: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found.".to_string()),
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                tracing::error!("Processed error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to access data.".to_string())
            }
            AppError::EnvVarError(_) | AppError::Config(_) => {
                tracing::error!("Processed error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error.".to_string())
            }
            AppError::PasswordHashingError => {
                tracing::error!("Processed error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process credentials.".to_string())
            }
            AppError::InternalServerError => {
                tracing::error!("Processed error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred.".to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
            fields,
        });

        (status, body).into_response()
    }
}

// Default Result type for the application
pub type AppResult<T = ()> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_helper_produces_keyed_message() {
        let err = AppError::field("username", "unique", "A user with that username already exists.");
        let AppError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        let fields = field_messages(&errors);
        assert_eq!(
            fields.get("username"),
            Some(&vec!["A user with that username already exists.".to_string()])
        );
    }

    #[test]
    fn referential_errors_map_to_bad_request() {
        let response = AppError::UnknownCourse(42).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
