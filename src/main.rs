// src/main.rs
use axum::serve;
use schoolsite::{config::Config, db, state::AppState, web};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Logging (tracing) ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolsite=debug,tower_http=info,sqlx=warn".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Starting schoolsite server...");

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    // --- Database ---
    let db_pool = match db::create_db_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Critical failure initialising the database: {}", e);
            return Err(anyhow::anyhow!("Failed to connect/migrate DB: {}", e));
        }
    };

    let app_state = AppState {
        db_pool,
        bcrypt_cost: config.bcrypt_cost,
    };

    // --- Listener ---
    tracing::info!("📡 Server listening on http://{}", config.bind_addr);
    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Failed to bind {}: {}", config.bind_addr, e);
            return Err(e.into());
        }
    };

    // --- Router and middleware ---
    let app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    tracing::info!("👂 Server ready to accept connections...");
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Fatal server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
