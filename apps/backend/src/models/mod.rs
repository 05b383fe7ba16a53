//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from sheet-cards-core
pub use sheet_cards_core::{AnnotatedToken, CardRecord, CardView, FeedbackKind};

/// Response for GET /api/cards
#[derive(Debug, Serialize, Deserialize)]
pub struct CardListResponse {
    pub cards: Vec<CardRecord>,
    pub total: usize,
}

/// Response for POST /api/cards/reload
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub loaded: usize,
}

/// Request for POST /api/cards/:id/feedback
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub kind: FeedbackKind,
    pub comment: String,
}

/// Response for POST /api/cards/:id/feedback
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub url: String,
}

/// Request for POST /api/markup/furigana
#[derive(Debug, Serialize, Deserialize)]
pub struct FuriganaRequest {
    pub text: String,
}

/// Response for POST /api/markup/furigana
#[derive(Debug, Serialize, Deserialize)]
pub struct FuriganaResponse {
    pub tokens: Vec<AnnotatedToken>,
}
