// src/services/mod.rs
pub mod auth_service;
pub mod course_service;
pub mod filter_service;
pub mod grade_service;
pub mod people_service;
pub mod registration_service;
pub mod stats_service;

use crate::error::AppResult;
use sqlx::SqliteConnection;

/// `table` is always one of our own table names, never user input.
pub(crate) async fn row_exists(conn: &mut SqliteConnection, table: &'static str, id: i64) -> AppResult<bool> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", table);
    let exists: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(&mut *conn).await?;
    Ok(exists)
}
