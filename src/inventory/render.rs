//! Render contract for the inventory view.
//!
//! Rust precomputes a flat context per record; the tera templates own the
//! markup. Exactly one state block renders at a time: spinner while loading,
//! then error banner, card grid, or empty panel. The filter bar and refresh
//! stamp are part of the frame and render in every state.

use once_cell::sync::Lazy;
use serde::Serialize;
use tera::Tera;

use super::ViewState;
use crate::models::StickerRecord;

/// Image CDN base; the transform segment carries the display size.
const IMAGE_BASE: &str = "https://ik.imagekit.io/pyodstickers";

/// Height used when the host supplies no hint.
const DEFAULT_IMAGE_HEIGHT: u32 = 200;

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(
        "inventory.html",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/inventory.html")),
    )
    .expect("inventory template must parse");
    tera.add_raw_template(
        "page.html",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/page.html")),
    )
    .expect("page template must parse");
    tera
});

/// Host-supplied presentation options for an embedded view.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Display height for sticker images, in pixels.
    pub image_height: Option<u32>,
}

/// Stock tier, a pure classification of the stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTier {
    High,
    Medium,
    Low,
}

impl StockTier {
    /// Above 25 is high, above 10 up to 25 is medium, everything at or below
    /// 10 (zero and negative included) is low.
    pub fn from_total(total: i64) -> Self {
        if total > 25 {
            StockTier::High
        } else if total > 10 {
            StockTier::Medium
        } else {
            StockTier::Low
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockTier::High => "bg-green-100 text-green-800",
            StockTier::Medium => "bg-yellow-100 text-yellow-800",
            StockTier::Low => "bg-red-100 text-red-800",
        }
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            StockTier::High => "In stock",
            StockTier::Medium => "Limited stock",
            StockTier::Low => "Low stock",
        }
    }
}

/// Two-decimal price display; blank when the record carried no usable price.
pub fn format_price(price: Option<f64>) -> String {
    price.map(|p| format!("{:.2}", p)).unwrap_or_default()
}

/// CDN display URL for a record image at the given height.
///
/// The filename arrives off the wire; percent-encoding keeps it one path
/// segment and lets the template inline the URL unescaped.
pub fn image_url(image: &str, height: u32) -> String {
    format!(
        "{}/tr:w-400,h-{}/stickers/{}",
        IMAGE_BASE,
        height,
        urlencoding::encode(image)
    )
}

#[derive(Debug, Serialize)]
struct CardContext {
    title: String,
    description: String,
    image_url: String,
    image_height: u32,
    price: String,
    total: String,
    badge_class: &'static str,
    badge_label: &'static str,
}

impl CardContext {
    fn from_record(record: &StickerRecord, height: u32) -> Self {
        // An absent stock count classifies as 0 for the badge but renders
        // blank as a number.
        let tier = StockTier::from_total(record.total.unwrap_or(0));
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            image_url: image_url(&record.image, height),
            image_height: height,
            price: format_price(record.price),
            total: record.total.map(|t| t.to_string()).unwrap_or_default(),
            badge_class: tier.badge_class(),
            badge_label: tier.badge_label(),
        }
    }
}

#[derive(Debug, Serialize)]
struct InventoryContext<'a> {
    loading: bool,
    error: Option<&'a str>,
    filter_text: &'a str,
    updated: Option<String>,
    cards: Vec<CardContext>,
}

/// Render the component markup for a state snapshot.
pub fn render_inventory(state: &ViewState, options: &ViewOptions) -> String {
    let height = options.image_height.unwrap_or(DEFAULT_IMAGE_HEIGHT);
    let context = InventoryContext {
        loading: state.loading,
        error: state.error.as_deref(),
        filter_text: &state.filter_text,
        updated: state
            .last_updated
            .map(|at| at.format("%H:%M:%S").to_string()),
        cards: state
            .records
            .iter()
            .map(|record| CardContext::from_record(record, height))
            .collect(),
    };

    let context =
        tera::Context::from_serialize(&context).expect("inventory context must serialize");
    TEMPLATES
        .render("inventory.html", &context)
        .expect("inventory template must render")
}

/// Wrap rendered component markup in the standalone page shell.
pub fn render_page(component: &str) -> String {
    let mut context = tera::Context::new();
    context.insert("component", component);
    TEMPLATES
        .render("page.html", &context)
        .expect("page template must render")
}
