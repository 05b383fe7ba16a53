//! Fetches the published sheet export.

use reqwest::Client;
use sheet_cards_core::{parse_payload, CardRecord, ColumnMap, ParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse sheet: {0}")]
    Parse(#[from] ParseError),
}

/// Client for the TSV export of a published spreadsheet.
pub struct SheetClient {
    client: Client,
    url: String,
}

impl SheetClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Download the sheet and parse it into cards. No retries.
    pub async fn fetch(&self, columns: &ColumnMap) -> Result<Vec<CardRecord>, FetchError> {
        tracing::info!(url = %self.url, "Fetching sheet");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "Downloaded sheet payload");

        let cards = parse_payload(&body, columns)?;
        tracing::info!(cards = cards.len(), "Parsed sheet");
        Ok(cards)
    }
}
