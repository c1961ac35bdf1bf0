use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Json,
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;

mod config;
mod error;
mod handlers {
    pub mod contact_handlers;
}
mod models {
    pub mod contact_models;
}
mod repositories {
    pub mod contact_repository;
}
mod schema;

use handlers::contact_handlers;
use repositories::contact_repository::{ContactRepository, ContactStore};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub struct AppState {
    pub contact_repository: Arc<dyn ContactStore>,
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    config::validate_env();

    let manager = ConnectionManager::<MysqlConnection>::new(config::database_url());
    let pool = r2d2::Pool::builder()
        // One insert per request; ten live connections is plenty. Excess
        // acquisitions wait in line instead of failing.
        .max_size(10)
        .build(manager)
        .expect("Failed to create pool");

    {
        let mut conn = pool.get().expect("Failed to get DB connection for migrations");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
    }

    let state = Arc::new(AppState {
        contact_repository: Arc::new(ContactRepository::new(pool)),
    });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state);

    use tokio::net::TcpListener;
    let port = config::port();
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}
