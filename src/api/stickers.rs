//! Sticker inventory endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::{self, StickerEnvelope};
use crate::AppState;

/// Query parameters for the stickers listing.
///
/// `min` arrives as raw text so an unparsable value can fall back to "no
/// filter" instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct StickersQuery {
    #[serde(default)]
    pub min: Option<String>,
}

/// GET /api/stickers - List stickers with at least `min` in stock.
pub async fn list_stickers(
    State(state): State<AppState>,
    Query(query): Query<StickersQuery>,
) -> Json<StickerEnvelope> {
    let threshold = models::effective_min(query.min.as_deref().unwrap_or(""));

    // Simulated network latency; a fixed delay also keeps responses in
    // request order for local callers.
    if !state.config.response_delay.is_zero() {
        tokio::time::sleep(state.config.response_delay).await;
    }

    let value = state.catalog.filter_by_min(threshold);
    tracing::debug!("Serving {} stickers at threshold {}", value.len(), threshold);

    Json(StickerEnvelope { value })
}
