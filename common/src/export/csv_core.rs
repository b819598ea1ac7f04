//! CSV export of filtered results

use crate::error::{Error, Result};
use crate::types::{format_number, DiscRecord};
use chrono::{NaiveDate, Utc};

pub const CSV_HEADER: [&str; 10] = [
    "Brand",
    "Mold",
    "Plastic Type",
    "Color",
    "Weight",
    "Flatness",
    "Stiffness",
    "Price",
    "Stock",
    "URL",
];

/// `otb-discs-2024-05-01.csv`
pub fn csv_filename(date: NaiveDate) -> String {
    format!("otb-discs-{}.csv", date.format("%Y-%m-%d"))
}

pub fn csv_filename_today() -> String {
    csv_filename(Utc::now().date_naive())
}

/// Header plus one row per record, newline separated. Absent fields are empty.
pub fn export_csv(discs: &[DiscRecord]) -> Result<String> {
    if discs.is_empty() {
        return Err(Error::EmptyExport);
    }

    let mut lines = Vec::with_capacity(discs.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for disc in discs {
        let row = csv_row(disc);
        lines.push(
            row.iter()
                .map(|f| escape_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    tracing::debug!(rows = discs.len(), "csv export built");
    Ok(lines.join("\n"))
}

fn csv_row(disc: &DiscRecord) -> [String; 10] {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let number = |v: Option<f64>| v.map(format_number).unwrap_or_default();
    [
        text(&disc.brand),
        text(&disc.mold),
        text(&disc.plastic_type),
        text(&disc.plastic_color),
        number(disc.weight),
        number(disc.flatness),
        number(disc.stiffness),
        text(&disc.price),
        disc.stock.as_str().to_string(),
        text(&disc.product_url),
    ]
}

/// Quotes a field containing a comma, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StockStatus;

    #[test]
    fn test_export_two_records() {
        let discs = vec![
            DiscRecord {
                mold: Some("Wraith".into()),
                weight: Some(174.0),
                price: Some("18.00".into()),
                stock: StockStatus::InStock,
                ..Default::default()
            },
            DiscRecord {
                mold: Some("Destroyer".into()),
                weight: Some(170.0),
                price: Some("20.00".into()),
                ..Default::default()
            },
        ];

        let csv = export_csv(&discs).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Brand,Mold,Plastic Type,Color,Weight,Flatness,Stiffness,Price,Stock,URL"
        );
        assert_eq!(lines[1], ",Wraith,,,174,,,18.00,in_stock,");
        assert_eq!(lines[2], ",Destroyer,,,170,,,20.00,unknown,");
    }

    #[test]
    fn test_export_empty_is_error() {
        assert!(matches!(export_csv(&[]), Err(Error::EmptyExport)));
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("Blue"), "Blue");
        assert_eq!(escape_field("Blue, Red"), "\"Blue, Red\"");
        assert_eq!(escape_field("6\" rim"), "\"6\"\" rim\"");
    }

    #[test]
    fn test_csv_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(csv_filename(date), "otb-discs-2024-05-01.csv");
    }
}
