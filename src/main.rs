use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod render;
mod upstream;

use crate::config::Config;
use crate::error::AppResult;
use crate::render::Templates;
use crate::upstream::PsRestfulClient;

/// Shared application state — cheap to clone (client pool and templates behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub upstream: PsRestfulClient,
    pub templates: Templates,
}

impl AppState {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            upstream: PsRestfulClient::new(config)?,
            templates: Templates::new()?,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inventory_dashboard=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!(
        upstream = %config.upstream_host,
        timeout_secs = config.upstream_timeout.map(|t| t.as_secs()),
        "Proxying PSRESTful API"
    );
    if config.upstream_timeout.is_none() {
        info!("No upstream timeout configured; set UPSTREAM_TIMEOUT_SECS to bound calls");
    }

    let state = AppState::new(&config)?;
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::home))
        .route("/products", get(handlers::products::list_products))
        .route(
            "/inventory/:supplier_code/:product_id",
            get(handlers::inventory::product_inventory),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
