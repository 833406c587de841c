// src/web/home_handlers.rs
use crate::{
    error::AppResult,
    models::stats::SchoolStats,
    services::stats_service,
    state::AppState,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// GET /health
pub async fn health(State(db_pool): State<SqlitePool>) -> AppResult<StatusCode> {
    sqlx::query("SELECT 1").execute(&db_pool).await?;
    Ok(StatusCode::OK)
}

/// GET /stats
pub async fn show_stats(State(state): State<AppState>) -> AppResult<Json<SchoolStats>> {
    let stats = stats_service::calc_school_stats(&state.db_pool).await?;
    Ok(Json(stats))
}
