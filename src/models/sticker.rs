//! Sticker record model matching the wire contract of the inventory endpoints.
//!
//! Field names are capitalized on the wire (`Id`, `Title`, ...); the data
//! service and the host list API both serve exactly this casing.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry.
///
/// Deserialization is deliberately lenient: records coming back from a host
/// list can miss fields or carry extras, and the view keeps rendering instead
/// of rejecting the whole result set. Only the envelope itself is strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StickerRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Opaque filename used to build the display URL.
    #[serde(default)]
    pub image: String,
    /// Unit price; `None` when the source record carried nothing usable.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    /// Stock count; may be negative, `None` when missing or unparsable.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total: Option<i64>,
}

impl StickerRecord {
    /// Fully populated record, for seed data and fixtures.
    pub fn new(
        id: i64,
        title: &str,
        description: &str,
        image: &str,
        price: f64,
        total: i64,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            price: Some(price),
            total: Some(total),
        }
    }
}

/// The `{ "value": [...] }` wrapper around the record array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickerEnvelope {
    pub value: Vec<StickerRecord>,
}

/// Accept any JSON value for a numeric field; only numbers survive.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// As [`lenient_f64`], truncating fractional stock counts toward zero.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_capitalized_field_names() {
        let record = StickerRecord::new(2, "Even servers need downtime", "witty", "a.webp", 3.5, 20);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["Id"], 2);
        assert_eq!(json["Title"], "Even servers need downtime");
        assert_eq!(json["Description"], "witty");
        assert_eq!(json["Image"], "a.webp");
        assert_eq!(json["Price"], 3.5);
        assert_eq!(json["Total"], 20);
    }

    #[test]
    fn test_missing_fields_default_instead_of_failing() {
        let record: StickerRecord =
            serde_json::from_str(r#"{ "Id": 1, "Title": "Incomplete", "Image": "test1.webp" }"#)
                .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.title, "Incomplete");
        assert_eq!(record.description, "");
        assert_eq!(record.price, None);
        assert_eq!(record.total, None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"{
            "Id": 1, "Title": "Extended", "Description": "d", "Image": "x.webp",
            "Price": 6.5, "Total": 30,
            "category": "dev-stickers",
            "metadata": { "tags": ["react"], "featured": true }
        }"#;
        let record: StickerRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.title, "Extended");
        assert_eq!(record.total, Some(30));
    }

    #[test]
    fn test_unparsable_numerics_become_none() {
        let raw = r#"{ "Id": 2, "Title": "Odd", "Price": "free", "Total": null }"#;
        let record: StickerRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.price, None);
        assert_eq!(record.total, None);
    }

    #[test]
    fn test_fractional_totals_truncate_toward_zero() {
        let up: StickerRecord = serde_json::from_str(r#"{ "Id": 1, "Total": 10.9 }"#).unwrap();
        let down: StickerRecord = serde_json::from_str(r#"{ "Id": 1, "Total": -3.7 }"#).unwrap();

        assert_eq!(up.total, Some(10));
        assert_eq!(down.total, Some(-3));
    }

    #[test]
    fn test_envelope_requires_the_value_wrapper() {
        let ok: StickerEnvelope =
            serde_json::from_str(r#"{ "value": [{ "Id": 1, "Title": "One" }] }"#).unwrap();
        assert_eq!(ok.value.len(), 1);

        let missing = serde_json::from_str::<StickerEnvelope>(r#"{ "items": [] }"#);
        assert!(missing.is_err());
    }
}
