// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool(database_url: &str) -> AppResult<SqlitePool> {
    tracing::info!("Connecting to database: {}", database_url);

    // Cascades on lessons/grades/profiles depend on foreign_keys being on.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Applies the embedded files in ./migrations.
pub async fn run_migrations(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete.");
    Ok(())
}
