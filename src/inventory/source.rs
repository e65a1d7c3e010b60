//! Data sources for the inventory view.
//!
//! The two hosting shells differ only in where records come from: the
//! standalone page reads the data service's JSON endpoint, the embedded
//! variant reads a host-platform list API. Both are adapters behind one
//! capability trait, so the view itself never changes.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::errors::FetchError;
use crate::models::{StickerEnvelope, StickerRecord};

/// Capability the view depends on: fetch records at a minimum-stock threshold.
#[async_trait]
pub trait StickerSource: Send + Sync {
    /// Fetch all records with at least `threshold` in stock; a threshold of
    /// 0 or below requests the full catalog.
    async fn fetch_stickers(&self, threshold: i64) -> Result<Vec<StickerRecord>, FetchError>;
}

/// Sources are often shared between a host and several mounted views.
#[async_trait]
impl<S: StickerSource + ?Sized> StickerSource for Arc<S> {
    async fn fetch_stickers(&self, threshold: i64) -> Result<Vec<StickerRecord>, FetchError> {
        (**self).fetch_stickers(threshold).await
    }
}

/// Standalone adapter: the data service's `/api/stickers` endpoint.
#[derive(Debug, Clone)]
pub struct HttpStickerSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStickerSource {
    /// `base_url` is scheme plus authority, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl StickerSource for HttpStickerSource {
    async fn fetch_stickers(&self, threshold: i64) -> Result<Vec<StickerRecord>, FetchError> {
        let mut url = format!("{}/api/stickers", self.base_url);
        if threshold > 0 {
            url.push_str(&format!("?min={}", threshold));
        }
        fetch_envelope(&self.client, &url).await
    }
}

/// Title of the host list holding the sticker records.
const LIST_TITLE: &str = "Inventory";

/// Embedded adapter: the host platform's list API, OData flavored.
///
/// Ordering comes from the host (`Modified desc`); the threshold becomes a
/// `Total ge N` filter clause so the selection rule stays server-side here
/// too.
#[derive(Debug, Clone)]
pub struct ListApiStickerSource {
    client: reqwest::Client,
    web_url: String,
}

impl ListApiStickerSource {
    /// `web_url` is the absolute URL of the hosting web, without a trailing
    /// slash.
    pub fn new(web_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            web_url: web_url.into(),
        }
    }
}

#[async_trait]
impl StickerSource for ListApiStickerSource {
    async fn fetch_stickers(&self, threshold: i64) -> Result<Vec<StickerRecord>, FetchError> {
        let mut url = format!(
            "{}/_api/web/lists/getbytitle('{}')/items?$select=Id,Title,Description,Image,Price,Total&$orderby=Modified desc",
            self.web_url, LIST_TITLE
        );
        if threshold > 0 {
            url.push_str(&format!("&$filter=Total ge {}", threshold));
        }
        fetch_envelope(&self.client, &url).await
    }
}

/// Issue the GET and decode the `{ "value": [...] }` envelope.
///
/// Transport failures and undecodable bodies both surface as
/// [`FetchError::Transport`]; a non-success status carries its code.
async fn fetch_envelope(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<StickerRecord>, FetchError> {
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let envelope: StickerEnvelope = response.json().await?;
    Ok(envelope.value)
}
