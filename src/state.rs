// src/state.rs
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    // Work factor used when hashing passwords at registration
    pub bcrypt_cost: u32,
}

// Lets handlers extract the pool directly
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
