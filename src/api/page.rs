//! Server-rendered inventory page.
//!
//! A bare shell around the view component, with no site chrome of its own.
//! The filter form round-trips through `GET /`, so the button and the
//! confirm key both re-apply the filter.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::inventory::{
    self, HttpStickerSource, InventoryView, ListApiStickerSource, StickerSource, ViewOptions,
};
use crate::AppState;

/// Query parameters for the page shell.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub min: Option<String>,
}

/// GET / - Render the inventory page.
pub async fn inventory_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let source: Arc<dyn StickerSource> = match &state.config.list_api_url {
        Some(web_url) => Arc::new(ListApiStickerSource::new(web_url.clone())),
        None => Arc::new(HttpStickerSource::new(state.page_base_url.clone())),
    };
    let options = ViewOptions {
        image_height: state.config.image_height,
    };
    let view = InventoryView::with_options(source, options);

    match query.min {
        // First visit: mount at the configured threshold.
        None => view.initialize(state.config.initial_min).await,
        // Filter round trip: raw input, parsed by the view itself.
        Some(raw) => {
            view.set_filter_text(raw);
            view.apply_filter().await;
        }
    }

    let snapshot = view.state();
    if let Some(error) = &snapshot.error {
        tracing::warn!("Inventory page rendered with a fetch failure: {}", error);
    }

    Html(inventory::render_page(&view.render()))
}
