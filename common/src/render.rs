//! Presentational projection of disc records
//!
//! `DiscView` holds the display strings both the card grid and the table
//! render, so the web and terminal front ends show the same thing.

use crate::cart::cart_key;
use crate::types::{format_number, DiscRecord, StockStatus};

/// localStorage key of the cards/table preference
pub const VIEW_PREFERENCE_KEY: &str = "discViewPreference";

/// Placeholder text for a missing attribute
pub const NOT_AVAILABLE: &str = "N/A";

/// Table header, in column order
pub const TABLE_COLUMNS: [&str; 10] = [
    "Image",
    "Plastic",
    "Stamp Foil",
    "Color",
    "Weight",
    "Flatness",
    "Stiffness",
    "Price",
    "Stock",
    "Action",
];

/// Results layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Cards => "cards",
            ViewMode::Table => "table",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cards" | "card" => Some(ViewMode::Cards),
            "table" => Some(ViewMode::Table),
            _ => None,
        }
    }

    /// Stored preference; anything unrecognized falls back to cards
    pub fn from_stored(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

/// Stock badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTone {
    Positive,
    Negative,
    Neutral,
}

impl StockTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            StockTone::Positive => "stock-in",
            StockTone::Negative => "stock-out",
            StockTone::Neutral => "stock-unknown",
        }
    }
}

impl From<StockStatus> for StockTone {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::InStock => StockTone::Positive,
            StockStatus::OutOfStock => StockTone::Negative,
            StockStatus::Limited | StockStatus::Unknown => StockTone::Neutral,
        }
    }
}

/// Image slot: a picture, or the "No Image" placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscImage {
    Url { src: String, alt: String },
    Placeholder,
}

impl DiscImage {
    pub const PLACEHOLDER_TEXT: &'static str = "No Image";
}

/// Display strings for one record
#[derive(Debug, Clone, PartialEq)]
pub struct DiscView {
    pub key: String,
    pub name: String,
    pub plastic: String,
    pub stamp_foil: String,
    pub weight: String,
    pub plastic_color: Option<String>,
    pub rim_color: Option<String>,
    pub flatness: Option<String>,
    pub stiffness: Option<String>,
    pub price: Option<String>,
    pub stock_label: &'static str,
    pub stock_tone: StockTone,
    pub image: DiscImage,
    pub product_url: Option<String>,
}

impl DiscView {
    pub fn from_record(disc: &DiscRecord) -> Self {
        let text = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);

        let image = match text(&disc.image_url) {
            Some(src) => DiscImage::Url {
                src,
                alt: format!(
                    "{} - {}",
                    disc.mold.as_deref().unwrap_or(NOT_AVAILABLE),
                    disc.plastic_type.as_deref().unwrap_or(NOT_AVAILABLE)
                ),
            },
            None => DiscImage::Placeholder,
        };

        Self {
            key: cart_key(disc),
            name: disc.display_name(),
            plastic: text(&disc.plastic_type).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            stamp_foil: text(&disc.stamp_foil).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            weight: disc
                .weight
                .map(|w| format!("{}g", format_number(w)))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            plastic_color: text(&disc.plastic_color),
            rim_color: text(&disc.rim_color),
            flatness: disc.flatness.map(format_number),
            stiffness: disc.stiffness.map(format_number),
            price: text(&disc.price).map(|p| format!("${}", p.trim_start_matches('$'))),
            stock_label: disc.stock.label(),
            stock_tone: disc.stock.into(),
            image,
            product_url: text(&disc.product_url),
        }
    }

    /// Table cells after the image column, before the action column
    pub fn table_cells(&self) -> [String; 8] {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
        [
            self.plastic.clone(),
            self.stamp_foil.clone(),
            or_na(&self.plastic_color),
            self.weight.clone(),
            or_na(&self.flatness),
            or_na(&self.stiffness),
            or_na(&self.price),
            self.stock_label.to_string(),
        ]
    }
}

/// `Found N discs in Xms`
pub fn search_info(total: usize, elapsed_ms: f64) -> String {
    format!("Found {} discs in {}ms", total, format_number(elapsed_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wraith() -> DiscRecord {
        DiscRecord {
            mold: Some("Wraith".into()),
            plastic_type: Some("Star".into()),
            plastic_color: Some("Blue".into()),
            weight: Some(174.0),
            flatness: Some(7.5),
            price: Some("18.00".into()),
            stock: StockStatus::InStock,
            image_url: Some("https://img/wraith.jpg".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_view_mode() {
        assert_eq!(ViewMode::default(), ViewMode::Cards);
        assert_eq!(ViewMode::parse("table"), Some(ViewMode::Table));
        assert_eq!(ViewMode::parse("grid"), None);
        assert_eq!(ViewMode::from_stored(Some("garbage")), ViewMode::Cards);
        assert_eq!(ViewMode::from_stored(None), ViewMode::Cards);
        assert_eq!(ViewMode::Table.as_str(), "table");
    }

    #[test]
    fn test_disc_view() {
        let view = DiscView::from_record(&wraith());
        assert_eq!(view.key, "Wraith-Star-Blue-174-None");
        assert_eq!(view.name, "Star Wraith");
        assert_eq!(view.weight, "174g");
        assert_eq!(view.stamp_foil, "N/A");
        assert_eq!(view.flatness.as_deref(), Some("7.5"));
        assert_eq!(view.price.as_deref(), Some("$18.00"));
        assert_eq!(view.stock_label, "In Stock");
        assert_eq!(view.stock_tone, StockTone::Positive);
        assert_eq!(
            view.image,
            DiscImage::Url {
                src: "https://img/wraith.jpg".into(),
                alt: "Wraith - Star".into()
            }
        );
    }

    #[test]
    fn test_disc_view_placeholders() {
        let view = DiscView::from_record(&DiscRecord::default());
        assert_eq!(view.image, DiscImage::Placeholder);
        assert_eq!(view.plastic, "N/A");
        assert_eq!(view.weight, "N/A");
        assert!(view.price.is_none());
        assert_eq!(view.stock_tone, StockTone::Neutral);
    }

    #[test]
    fn test_table_cells() {
        let cells = DiscView::from_record(&wraith()).table_cells();
        assert_eq!(cells[0], "Star");
        assert_eq!(cells[5], "N/A");
        assert_eq!(cells[6], "$18.00");
        assert_eq!(cells.len() + 2, TABLE_COLUMNS.len());
    }

    #[test]
    fn test_search_info() {
        assert_eq!(search_info(12, 845.0), "Found 12 discs in 845ms");
        assert_eq!(search_info(3, 1204.37), "Found 3 discs in 1204.37ms");
    }
}
