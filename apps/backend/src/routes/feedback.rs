//! Feedback endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use sheet_cards_core::compose_comment;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/cards/:id/feedback
///
/// Builds a pre-filled form link; the client opens it to submit.
pub async fn link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>> {
    let comment = compose_comment(request.kind, &request.comment)
        .ok_or_else(|| ApiError::BadRequest("Comment must not be empty".to_string()))?;

    let form = state.config.feedback_form.as_ref().ok_or_else(|| {
        ApiError::FeedbackDisabled("Feedback form is not configured".to_string())
    })?;

    let collection = state.cards.read().await;
    let card = collection
        .find(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Card {}", id)))?;

    let url = form.link(&card.id, &comment);
    tracing::info!(card_id = %card.id, kind = ?request.kind, "Built feedback link");

    Ok(Json(FeedbackResponse {
        url: url.to_string(),
    }))
}
