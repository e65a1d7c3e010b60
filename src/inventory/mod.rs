//! The inventory view component.
//!
//! Owns the fetch-filter-render cycle: one [`ViewState`], a data source, and
//! the render contract. The component keeps no guard against overlapping
//! requests; when two fetches are in flight, whichever settles last writes
//! the state. The lock below covers individual transitions, not ordering.

mod render;
mod source;

pub use render::*;
pub use source::*;

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local};

use crate::models::{self, StickerRecord};

/// Everything the render contract reads, owned exclusively by one view.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// A request is in flight; records were cleared when it started.
    pub loading: bool,
    /// Current result set, replaced wholesale on every successful fetch.
    pub records: Vec<StickerRecord>,
    /// Raw filter input, not yet parsed.
    pub filter_text: String,
    /// User-facing failure text; mutually exclusive with records within one
    /// completed cycle.
    pub error: Option<String>,
    /// When the last fetch cycle settled.
    pub last_updated: Option<DateTime<Local>>,
}

/// One mounted inventory view over a data source.
pub struct InventoryView<S> {
    source: S,
    options: ViewOptions,
    state: Mutex<ViewState>,
}

impl<S: StickerSource> InventoryView<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, ViewOptions::default())
    }

    pub fn with_options(source: S, options: ViewOptions) -> Self {
        Self {
            source,
            options,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Snapshot of the current state, for hosts and assertions.
    pub fn state(&self) -> ViewState {
        self.lock().clone()
    }

    /// Mount-time entry point: one fetch at the host-supplied threshold.
    pub async fn initialize(&self, min_threshold: i64) {
        self.fetch_stickers(min_threshold).await;
    }

    /// Record raw filter input. Pure state update; no fetch, no parsing.
    pub fn set_filter_text(&self, text: impl Into<String>) {
        self.lock().filter_text = text.into();
    }

    /// Parse the current filter text and fetch at the resulting threshold.
    pub async fn apply_filter(&self) {
        let raw = self.lock().filter_text.clone();
        self.fetch_stickers(models::effective_min(&raw)).await;
    }

    /// Render the current state per the render contract.
    pub fn render(&self) -> String {
        let state = self.lock();
        render::render_inventory(&state, &self.options)
    }

    /// One full fetch cycle. Clears records and any previous error before
    /// the request goes out, then writes the outcome; `loading` drops last,
    /// on every path.
    async fn fetch_stickers(&self, threshold: i64) {
        {
            let mut state = self.lock();
            state.loading = true;
            state.records.clear();
            state.error = None;
        }

        let outcome = self.source.fetch_stickers(threshold).await;

        let mut state = self.lock();
        match outcome {
            Ok(records) => {
                tracing::debug!("Fetched {} stickers at threshold {}", records.len(), threshold);
                state.records = records;
            }
            Err(err) => {
                tracing::warn!("Fetch at threshold {} failed: {}", threshold, err);
                state.error = Some(err.user_message());
            }
        }
        state.last_updated = Some(Local::now());
        state.loading = false;
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().expect("view state lock poisoned")
    }
}
