//! In-memory sticker catalog.
//!
//! The catalog is an immutable, ordered snapshot seeded at startup; requests
//! scan it with a single stock comparison. There is no persistence behind it.

use crate::models::StickerRecord;

/// The catalog served by the data service.
#[derive(Debug, Clone)]
pub struct Catalog {
    stickers: Vec<StickerRecord>,
}

impl Catalog {
    /// Build a catalog from records, preserving their order for every response.
    pub fn new(stickers: Vec<StickerRecord>) -> Self {
        Self { stickers }
    }

    /// The built-in catalog of six stickers.
    pub fn seeded() -> Self {
        Self::new(vec![
            StickerRecord::new(
                1,
                "Suffering is only temporary, giving up lasts forever",
                "This sticker carries a powerful message of resilience and hope. It is dedicated to Yves, a dear friend who faced cancer with incredible strength and determination. Yves never gave up, even in the toughest moments.",
                "2025-kotk-yves.webp",
                5.00,
                50,
            ),
            StickerRecord::new(
                2,
                "Even servers need downtime",
                "This witty sticker is a must-have for IT professionals and tech enthusiasts who know the value of rest—both for servers and humans!",
                "2025-even-servers-need-downtime.webp",
                3.50,
                20,
            ),
            StickerRecord::new(
                3,
                "Smiley Flower Sticker",
                "Add a splash of sparkle and attitude with this holographic daisy sticker that says precisely what you're thinking. Featuring a cheerful flower with a not-so-cheerful message — “F**k Off, Don’t Ask Me Again” — it’s perfect for your laptop, water bottle, or anywhere that needs a little bit of sass and shine. Cute but fierce 🌸🔥",
                "2025-fck-off.webp",
                4.00,
                5,
            ),
            StickerRecord::new(
                4,
                "It's brave to ask for help",
                "This uplifting sticker serves as a gentle reminder that seeking help is a sign of strength, not weakness.",
                "2025-its-brave-to-ask-for-help.webp",
                4.50,
                30,
            ),
            StickerRecord::new(
                5,
                "It's ok, not to be ok",
                "This heartfelt sticker delivers a message of compassion and self-care with the phrase \"It's ok, not to be ok.\" Designed to remind everyone that it’s perfectly normal to have tough days, it’s a comforting addition to any workspace or personal item.",
                "2025-its-ok-not-to-be-ok.webp",
                6.00,
                15,
            ),
            StickerRecord::new(
                6,
                "Permission granted! Take a break.",
                "This cheerful sticker is the perfect nudge for workaholics and productivity enthusiasts alike! Featuring the phrase \"Permission granted! Take a break.",
                "2025-permission-granted-take-a-break.webp",
                4.00,
                8,
            ),
        ])
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    /// Records with at least `min` in stock, in catalog order. A threshold of
    /// 0 or below returns the full set; records without a stock count never
    /// match a positive threshold.
    pub fn filter_by_min(&self, min: i64) -> Vec<StickerRecord> {
        if min <= 0 {
            return self.stickers.clone();
        }
        self.stickers
            .iter()
            .filter(|sticker| sticker.total.unwrap_or(0) >= min)
            .cloned()
            .collect()
    }
}
