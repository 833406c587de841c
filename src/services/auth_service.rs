// src/services/auth_service.rs
use crate::error::{AppError, AppResult};

/// Hashes a password with bcrypt at the given cost.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Generating bcrypt hash (cost {})...", cost);
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("spawn_blocking task failed (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("bcrypt error while hashing password: {:?}", e);
        AppError::PasswordHashingError
    })
}
