use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod config;
pub mod error;


use api::AppState;
use config::Config;
use namecraft_ai::AIService;
use namecraft_config::constants;
use namecraft_generator::NameGenerator;

const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize tracing subscriber for structured logging
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(false)
        .compact()
        .init();
}

/// Log filter from `RUST_LOG`, defaulting to `info`
pub(crate) fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(constants::RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;

    let service = AIService::new(config.ai.clone())?;
    info!("Generation model: {}", service.model());

    let state = AppState {
        generator: Arc::new(NameGenerator::new(service)),
    };

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = api::create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server listening on http://{}", addr);
    info!("CORS origin: {}", config.cors_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
