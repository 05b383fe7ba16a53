//! Markup endpoints

use axum::Json;
use sheet_cards_core::tokenize_annotated_text;

use crate::models::*;

/// POST /api/markup/furigana
pub async fn furigana(Json(request): Json<FuriganaRequest>) -> Json<FuriganaResponse> {
    Json(FuriganaResponse {
        tokens: tokenize_annotated_text(&request.text),
    })
}
