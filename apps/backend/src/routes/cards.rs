//! Card endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/cards
pub async fn list(State(state): State<AppState>) -> Json<CardListResponse> {
    let collection = state.cards.read().await;
    Json(CardListResponse {
        cards: collection.cards().to_vec(),
        total: collection.len(),
    })
}

/// GET /api/cards/random
pub async fn random(State(state): State<AppState>) -> Result<Json<CardView>> {
    let collection = state.cards.read().await;
    let card = collection
        .random()
        .ok_or_else(|| ApiError::NotFound("No cards available".to_string()))?;

    Ok(Json(CardView::build(card, &state.config.media_base_url)))
}

/// GET /api/cards/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CardView>> {
    let collection = state.cards.read().await;
    let card = collection
        .find(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Card {}", id)))?;

    Ok(Json(CardView::build(card, &state.config.media_base_url)))
}

/// POST /api/cards/reload
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>> {
    let loaded = state.reload().await?;
    Ok(Json(ReloadResponse { loaded }))
}
