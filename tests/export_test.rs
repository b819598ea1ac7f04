//! CSV export and checkout plan over a filtered search result

use otb_helper_common::{
    build_checkout_plan, csv_filename, export_csv, CartItem, DiscRecord, FilterSession,
    FilterState, SelectField, StockStatus, CSV_HEADER,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn disc(mold: &str, color: &str, weight: f64, price: &str, url: Option<&str>) -> DiscRecord {
    DiscRecord {
        brand: Some("Innova".into()),
        mold: Some(mold.into()),
        plastic_type: Some("Star".into()),
        plastic_color: Some(color.into()),
        weight: Some(weight),
        price: Some(price.into()),
        stock: StockStatus::InStock,
        product_url: url.map(str::to_string),
        ..Default::default()
    }
}

fn catalog() -> Vec<DiscRecord> {
    vec![
        disc("Wraith", "Blue", 174.0, "18.00", Some("https://otbdiscs.com/wraith")),
        disc("Destroyer", "Red, White", 175.0, "19.99", None),
        disc("Wraith", "Pink", 168.0, "18.00", Some("https://otbdiscs.com/wraith")),
    ]
}

#[test]
fn test_export_filtered_subset() {
    let mut session = FilterSession::new();
    session.replace_records(catalog());

    let mut filters = FilterState::new();
    filters.select(SelectField::Mold, ["Destroyer"]);
    session.apply(filters);

    let csv = export_csv(session.filtered()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(lines[1], "Innova,Destroyer,Star,\"Red, White\",175,,,19.99,in_stock,");
}

#[test]
fn test_export_empty_subset() {
    let mut session = FilterSession::new();
    session.replace_records(catalog());

    let mut filters = FilterState::new();
    filters.select(SelectField::Mold, ["Firebird"]);
    session.apply(filters);

    assert!(session.filtered().is_empty());
    assert!(export_csv(session.filtered()).is_err());
}

#[test]
fn test_csv_filename() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    assert_eq!(csv_filename(date), "otb-discs-2024-05-01.csv");
}

#[test]
fn test_checkout_plan_from_cart() {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let items: Vec<CartItem> = catalog().into_iter().map(|d| CartItem::new(d, at)).collect();

    let plan = build_checkout_plan(&items).unwrap();
    assert_eq!(plan.linked.len(), 2);
    assert_eq!(plan.unlinked.len(), 1);
    assert_eq!(plan.linked[0].position, 1);
    assert_eq!(plan.linked[1].position, 2);
    assert_eq!(plan.linked[0].quick_find, "174g Blue $18.00");
    assert_eq!(
        plan.summary.lines().next(),
        Some("Star Wraith - Blue (174g) - $18.00")
    );
    assert_eq!(plan.summary.lines().count(), 3);
}
