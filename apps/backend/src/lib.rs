pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::collection::CardCollection;
use crate::services::sheet::{FetchError, SheetClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sheet: Arc<SheetClient>,
    pub cards: Arc<RwLock<CardCollection>>,
}

impl AppState {
    pub fn new(config: Config, sheet: SheetClient) -> Self {
        Self {
            config: Arc::new(config),
            sheet: Arc::new(sheet),
            cards: Arc::new(RwLock::new(CardCollection::default())),
        }
    }

    /// Refetch the sheet and replace the collection.
    /// On failure the previous collection stays in place.
    pub async fn reload(&self) -> Result<usize, FetchError> {
        let cards = self.sheet.fetch(&self.config.columns).await?;
        let loaded = cards.len();

        *self.cards.write().await = CardCollection::new(cards);
        tracing::info!(loaded, "Card collection replaced");

        Ok(loaded)
    }
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/cards", get(routes::cards::list))
        .route("/api/cards/random", get(routes::cards::random))
        .route("/api/cards/reload", post(routes::cards::reload))
        .route("/api/cards/:id", get(routes::cards::show))
        .route("/api/cards/:id/feedback", post(routes::feedback::link))
        .route("/api/markup/furigana", post(routes::markup::furigana))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    tracing::debug!(
        columns = config.columns.max_index() + 1,
        "Expecting sheet rows at least this wide"
    );
    let sheet = SheetClient::new(config.sheet_tsv_url.clone());
    let state = AppState::new(config, sheet);

    tracing::info!("Loading cards...");
    if let Err(err) = state.reload().await {
        // Serve anyway; POST /api/cards/reload can retry.
        tracing::error!(error = %err, "Failed to load cards");
    }

    let router = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
