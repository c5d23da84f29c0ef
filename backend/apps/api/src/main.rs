//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use accounts::{MemoryAccountStore, PgAccountStore, accounts_router, accounts_router_generic};
use arcade::{
    MemoryActivePlayerRegistry, MemoryLeaderboardStore, PgLeaderboardStore, leaderboard_router,
    leaderboard_router_generic, players_router,
};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,accounts=info,arcade=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection is optional: without DATABASE_URL the server
    // runs entirely on seeded in-memory stores
    let database_pool = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            Some(pool)
        }
        Err(_) => {
            tracing::info!("DATABASE_URL not set, using in-memory stores");
            None
        }
    };

    // Account and leaderboard routers share one account store so that
    // score submissions see users signed up in the same process
    let (auth_routes, leaderboard_routes) = match &database_pool {
        Some(pool) => {
            let account_store = PgAccountStore::new(pool.clone());
            let leaderboard_store = PgLeaderboardStore::new(pool.clone());
            (
                accounts_router(account_store.clone()),
                leaderboard_router(leaderboard_store, account_store),
            )
        }
        None => {
            let account_store = MemoryAccountStore::with_demo_accounts();
            let leaderboard_store = MemoryLeaderboardStore::with_demo_scores();
            (
                accounts_router_generic(account_store.clone()),
                leaderboard_router_generic(leaderboard_store, account_store),
            )
        }
    };

    // Live board state never touches the database
    let players_routes = players_router(MemoryActivePlayerRegistry::new());

    // CORS configuration; bearer tokens ride the Authorization header,
    // cookies are not used, so credentials stay disabled in both arms
    let cors = match env::var("FRONTEND_ORIGINS") {
        Ok(frontend_origins) => {
            let allowed_origins: Vec<http::HeaderValue> = frontend_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(AllowMethods::list([
                    Method::GET,
                    Method::POST,
                    Method::OPTIONS,
                ]))
                .allow_headers(AllowHeaders::list([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::ACCEPT,
                ]))
        }
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    // Build router
    let app = Router::new()
        .route("/", get(root))
        .nest("/auth", auth_routes)
        .nest("/leaderboard", leaderboard_routes)
        .nest("/players", players_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /
async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Snake Arcade API is running" }))
}
