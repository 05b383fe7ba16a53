//! Service configuration read from the environment.

use anyhow::{Context, Result};
use reqwest::Url;
use sheet_cards_core::ColumnMap;

/// Published sheet the cards are read from.
pub const DEFAULT_SHEET_ID: &str = "1pYsAecaF7djbzj6xB8kfNxcqTKhp9AtFKlkJv4lmrW8";

/// Raw media files referenced by `[sound:..]` and `<img src="..">`.
pub const DEFAULT_MEDIA_BASE_URL: &str =
    "https://raw.githubusercontent.com/NeonGooRoo/AnkiDeckEdit/main/jlabfiles/";

const FORM_URL_PLACEHOLDER: &str = "YOUR_FORM_ID";
const FORM_FIELD_PLACEHOLDER: &str = "YOUR_";

/// TSV export URL for a published Google sheet.
pub fn sheet_export_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=tsv")
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sheet_tsv_url: String,
    pub media_base_url: String,
    pub columns: ColumnMap,
    pub feedback_form: Option<FeedbackForm>,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - SHEET_TSV_URL: full export URL (overrides SHEET_ID)
    /// - SHEET_ID: published sheet ID
    /// - MEDIA_BASE_URL: prefix for media file names
    /// - COLUMN_MAP: JSON object of column offsets, e.g. `{"romaji": 27}`
    /// - FEEDBACK_FORM_URL, FORM_FIELD_CARD_ID, FORM_FIELD_COMMENT: pre-filled form
    /// - HOST, PORT
    pub fn from_env() -> Result<Self> {
        let sheet_tsv_url = match std::env::var("SHEET_TSV_URL") {
            Ok(url) => url,
            Err(_) => {
                let sheet_id =
                    std::env::var("SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.to_string());
                sheet_export_url(&sheet_id)
            }
        };

        let media_base_url = std::env::var("MEDIA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_MEDIA_BASE_URL.to_string());

        let columns = match std::env::var("COLUMN_MAP") {
            Ok(json) => parse_column_map(&json)?,
            Err(_) => ColumnMap::default(),
        };

        let feedback_form = match (
            std::env::var("FEEDBACK_FORM_URL"),
            std::env::var("FORM_FIELD_CARD_ID"),
            std::env::var("FORM_FIELD_COMMENT"),
        ) {
            (Ok(url), Ok(card_id_field), Ok(comment_field)) => {
                FeedbackForm::new(&url, &card_id_field, &comment_field)?
            }
            _ => None,
        };
        if feedback_form.is_none() {
            tracing::warn!("Feedback form is not configured; feedback links are disabled");
        }

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            sheet_tsv_url,
            media_base_url,
            columns,
            feedback_form,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a (possibly partial) column map override.
pub fn parse_column_map(json: &str) -> Result<ColumnMap> {
    serde_json::from_str(json).context("COLUMN_MAP must be a JSON object of column offsets")
}

/// Pre-filled external form receiving card feedback.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    url: Url,
    card_id_field: String,
    comment_field: String,
}

impl FeedbackForm {
    /// Returns `Ok(None)` while any part still holds a template placeholder.
    pub fn new(url: &str, card_id_field: &str, comment_field: &str) -> Result<Option<Self>> {
        let placeholder_url = url.trim().is_empty() || url.contains(FORM_URL_PLACEHOLDER);
        let placeholder_field = [card_id_field, comment_field]
            .iter()
            .any(|field| field.trim().is_empty() || field.contains(FORM_FIELD_PLACEHOLDER));
        if placeholder_url || placeholder_field {
            return Ok(None);
        }

        let url = Url::parse(url).context("FEEDBACK_FORM_URL must be an absolute URL")?;
        Ok(Some(Self {
            url,
            card_id_field: card_id_field.to_string(),
            comment_field: comment_field.to_string(),
        }))
    }

    /// Form URL with the card ID and comment appended as query parameters.
    pub fn link(&self, card_id: &str, comment: &str) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair(&self.card_id_field, card_id)
            .append_pair(&self.comment_field, comment);
        url
    }
}
