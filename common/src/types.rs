//! Disc record types
//!
//! One `DiscRecord` is one product listing returned by `POST /api/search`.
//! Every attribute is optional; the backend fills in what it could scrape.

use serde::{Deserialize, Deserializer, Serialize};

/// Stock status of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    Limited,
    #[default]
    #[serde(other)]
    Unknown,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Limited => "limited",
            StockStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Limited => "Limited",
            StockStatus::Unknown => "Unknown",
        }
    }
}

/// One catalog listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub mold: Option<String>,
    pub plastic_type: Option<String>,
    pub plastic_color: Option<String>,
    pub rim_color: Option<String>,
    pub stamp_foil: Option<String>,

    /// grams
    pub weight: Option<f64>,
    pub scaled_weight: Option<f64>,
    /// 1-10
    pub flatness: Option<f64>,
    /// 1-10
    pub stiffness: Option<f64>,

    /// Decimal string as sent by the backend ("18.00")
    #[serde(deserialize_with = "deserialize_price")]
    pub price: Option<String>,
    #[serde(deserialize_with = "deserialize_stock")]
    pub stock: StockStatus,

    pub image_url: Option<String>,
    pub product_url: Option<String>,

    /// Verbatim row text from the product page, used for Ctrl+F matching
    pub raw_row_text: Option<String>,
}

impl DiscRecord {
    /// Price as a number; unparseable prices count as absent
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .as_deref()
            .and_then(|p| p.trim().trim_start_matches('$').parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// "Star Wraith" style display name
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.plastic_type.as_deref(), self.mold.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();

        if parts.is_empty() {
            "Unknown disc".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Formats a number without a trailing ".0" for whole values
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawPrice> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPrice::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(RawPrice::Number(n)) if n.is_finite() => Some(format!("{:.2}", n)),
        _ => None,
    })
}

fn deserialize_stock<'de, D>(deserializer: D) -> Result<StockStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<StockStatus> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_record_default() {
        let disc = DiscRecord::default();
        assert!(disc.mold.is_none());
        assert_eq!(disc.stock, StockStatus::Unknown);
        assert!(disc.price_value().is_none());
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "brand": "Innova",
            "mold": "Wraith",
            "plastic_type": "Star",
            "plastic_color": "Blue",
            "rim_color": null,
            "stamp_foil": "Silver",
            "weight": 174,
            "flatness": 7.5,
            "price": "18.00",
            "stock": "in_stock",
            "product_url": "https://otbdiscs.com/wraith",
            "raw_row_text": "174g Blue Silver $18.00"
        }"#;

        let disc: DiscRecord = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(disc.mold.as_deref(), Some("Wraith"));
        assert_eq!(disc.weight, Some(174.0));
        assert_eq!(disc.flatness, Some(7.5));
        assert_eq!(disc.stiffness, None);
        assert_eq!(disc.price.as_deref(), Some("18.00"));
        assert_eq!(disc.price_value(), Some(18.0));
        assert_eq!(disc.stock, StockStatus::InStock);
        assert!(disc.rim_color.is_none());
    }

    #[test]
    fn test_price_accepts_number() {
        let disc: DiscRecord = serde_json::from_str(r#"{"price": 20}"#).unwrap();
        assert_eq!(disc.price.as_deref(), Some("20.00"));
        assert_eq!(disc.price_value(), Some(20.0));
    }

    #[test]
    fn test_unparseable_price_is_absent_for_filtering() {
        let disc: DiscRecord = serde_json::from_str(r#"{"price": "call us"}"#).unwrap();
        assert_eq!(disc.price.as_deref(), Some("call us"));
        assert!(disc.price_value().is_none());
    }

    #[test]
    fn test_unknown_stock_values() {
        let disc: DiscRecord = serde_json::from_str(r#"{"stock": "backordered"}"#).unwrap();
        assert_eq!(disc.stock, StockStatus::Unknown);

        let disc: DiscRecord = serde_json::from_str(r#"{"stock": null}"#).unwrap();
        assert_eq!(disc.stock, StockStatus::Unknown);

        let disc: DiscRecord = serde_json::from_str(r#"{"stock": "limited"}"#).unwrap();
        assert_eq!(disc.stock, StockStatus::Limited);
    }

    #[test]
    fn test_display_name() {
        let disc = DiscRecord {
            mold: Some("Wraith".into()),
            plastic_type: Some("Star".into()),
            ..Default::default()
        };
        assert_eq!(disc.display_name(), "Star Wraith");

        let disc = DiscRecord {
            mold: Some("Destroyer".into()),
            ..Default::default()
        };
        assert_eq!(disc.display_name(), "Destroyer");
        assert_eq!(DiscRecord::default().display_name(), "Unknown disc");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(174.0), "174");
        assert_eq!(format_number(174.5), "174.5");
        assert_eq!(format_number(0.0), "0");
    }
}
