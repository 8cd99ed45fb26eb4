mod advisor;
mod auth;
mod catalog;
mod config;
mod dashboard;
mod db;
mod errors;
mod llm_client;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::CareerAdvisor;
use crate::auth::tokens::AuthKeys;
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::llm_client::{AnthropicClient, ChatProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    let crate_directive = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", crate_directive, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EduPath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await;

    // Signing keys: loaded once, never rotated at runtime
    let auth = AuthKeys::new(&config.jwt_secret, config.jwt_ttl_minutes);

    // Provider client with the model bound for the process lifetime
    let provider = AnthropicClient::new(
        config.anthropic_api_key.clone(),
        config.advisor_model.clone(),
    );
    info!("LLM client initialized (model: {})", provider.model());
    let advisor = CareerAdvisor::new(Arc::new(provider) as Arc<dyn ChatProvider>);

    let state = AppState {
        db: pool,
        auth,
        advisor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
