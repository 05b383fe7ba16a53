//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the application router to a local fixture sheet
//! - A throwaway HTTP server standing in for the published spreadsheet
//!
//! No external network access is needed: the sheet is served from
//! 127.0.0.1 on an ephemeral port.

pub mod fixtures;

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

use sheet_cards_backend::config::{Config, FeedbackForm};
use sheet_cards_backend::services::sheet::SheetClient;
use sheet_cards_backend::{app, AppState};
use sheet_cards_core::ColumnMap;

/// Test context containing application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Serve `sample_tsv(num_cards)` and load it into the collection.
    pub async fn new(num_cards: usize) -> Self {
        let ctx = Self::with_sheet(
            StatusCode::OK,
            fixtures::sample_tsv(num_cards).into_bytes(),
            Some(fixtures::feedback_form()),
        )
        .await;

        ctx.state
            .reload()
            .await
            .expect("Failed to load fixture sheet");

        ctx
    }

    /// Point the app at a sheet answering with `status` and `body`.
    ///
    /// The collection starts empty; call `state.reload()` to fetch.
    pub async fn with_sheet(
        status: StatusCode,
        body: Vec<u8>,
        feedback_form: Option<FeedbackForm>,
    ) -> Self {
        let url = serve_sheet(status, body).await;
        Self::with_sheet_url(url, feedback_form)
    }

    /// Point the app at an arbitrary sheet URL.
    pub fn with_sheet_url(url: String, feedback_form: Option<FeedbackForm>) -> Self {
        let config = Config {
            sheet_tsv_url: url.clone(),
            media_base_url: fixtures::MEDIA_BASE_URL.to_string(),
            columns: ColumnMap::default(),
            feedback_form,
            host: "127.0.0.1".to_string(),
            port: 0,
        };

        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to build HTTP client");

        let state = AppState::new(config, SheetClient::with_client(client, url));
        let app = app(state.clone());

        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// URL on a local port with nothing listening behind it.
pub async fn closed_sheet_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind unused port");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);

    format!("http://{}/sheet.tsv", addr)
}

/// Serve a fixed sheet response and return its URL.
pub async fn serve_sheet(status: StatusCode, body: Vec<u8>) -> String {
    let router = Router::new().route(
        "/sheet.tsv",
        get(move || {
            let body = body.clone();
            async move { (status, body) }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Fixture server has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fixture server failed");
    });

    format!("http://{}/sheet.tsv", addr)
}
