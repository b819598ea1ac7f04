//! Terminal rendering of results, cart and checkout plan

use indicatif::{ProgressBar, ProgressStyle};
use otb_helper_common::{
    CartItem, CheckoutPlan, DiscImage, DiscRecord, DiscView, Notice, NoticeLevel, ViewMode,
};
use std::time::Duration;

/// Spinner shown while the backend scrapes product pages
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

pub fn notice_line(notice: &Notice) -> String {
    let mark = match notice.level {
        NoticeLevel::Success => "✔",
        NoticeLevel::Info => "ℹ",
        NoticeLevel::Error => "✖",
    };
    format!("{} {}", mark, notice.message)
}

pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Error => eprintln!("{}", notice_line(notice)),
        _ => println!("{}", notice_line(notice)),
    }
}

pub fn print_results(discs: &[DiscRecord], mode: ViewMode) {
    if discs.is_empty() {
        println!("No discs match the current filters.");
        return;
    }
    let views: Vec<DiscView> = discs.iter().map(DiscView::from_record).collect();
    let text = match mode {
        ViewMode::Cards => render_cards(&views),
        ViewMode::Table => render_table(&views),
    };
    println!("{}", text);
}

pub fn render_cards(views: &[DiscView]) -> String {
    let mut out = Vec::new();
    for view in views {
        let mut card = vec![format!(
            "■ {}{}",
            view.plastic,
            view.price.as_ref().map(|p| format!("  {}", p)).unwrap_or_default()
        )];
        card.push(format!("  Disc: {}", view.name));
        card.push(format!("  Stamp Foil: {}", view.stamp_foil));
        card.push(format!("  Weight: {}", view.weight));
        let optional = [
            ("Plastic Color", &view.plastic_color),
            ("Rim", &view.rim_color),
            ("Flatness", &view.flatness),
            ("Stiffness", &view.stiffness),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                card.push(format!("  {}: {}", label, value));
            }
        }
        card.push(format!("  Stock: {}", view.stock_label));
        match &view.image {
            DiscImage::Url { src, .. } => card.push(format!("  Image: {}", src)),
            DiscImage::Placeholder => card.push(format!("  Image: {}", DiscImage::PLACEHOLDER_TEXT)),
        }
        if let Some(url) = &view.product_url {
            card.push(format!("  Link: {}", url));
        }
        card.push(format!("  Key: {}", view.key));
        out.push(card.join("\n"));
    }
    out.join("\n\n")
}

const TABLE_HEADER: [&str; 9] = [
    "Key", "Plastic", "Stamp Foil", "Color", "Weight", "Flatness", "Stiffness", "Price", "Stock",
];

pub fn render_table(views: &[DiscView]) -> String {
    let rows: Vec<Vec<String>> = views
        .iter()
        .map(|v| {
            let mut row = vec![v.key.clone()];
            row.extend(v.table_cells());
            row
        })
        .collect();

    let mut widths: Vec<usize> = TABLE_HEADER.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = TABLE_HEADER.iter().map(|h| h.to_string()).collect();
    let mut out = vec![line(header.as_slice())];
    out.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    out.extend(rows.iter().map(|r| line(r.as_slice())));
    out.join("\n")
}

pub fn print_cart(items: &[CartItem]) {
    if items.is_empty() {
        println!("Your cart is empty");
        return;
    }
    println!("🛒 Cart ({})", items.len());
    for item in items {
        println!("  {}  {}", item.disc.display_name(), item.price_label());
        println!("    {}", item.detail_line());
        println!("    key: {}", item.id);
    }
}

pub fn render_checkout(plan: &CheckoutPlan) -> String {
    let mut out = vec![format!("✅ Items with Direct Links ({})", plan.linked.len())];
    for entry in &plan.linked {
        out.push(format!(
            "  {}. {}  {}",
            entry.position,
            entry.item.disc.display_name(),
            entry.item.price_label()
        ));
        out.push(format!("     Find: {}", entry.quick_find));
        out.push(format!("     Open: {}", entry.url));
    }
    if !plan.unlinked.is_empty() {
        out.push(String::new());
        out.push(format!("⚠️ Items to Add Manually ({})", plan.unlinked.len()));
        for item in &plan.unlinked {
            out.push(format!("  {}  {}", item.disc.display_name(), item.price_label()));
        }
    }
    out.push(String::new());
    out.push("Open each page and use Cmd+F/Ctrl+F with the Find text to locate your exact disc.".into());
    out.push(String::new());
    out.push("Cart summary:".into());
    out.push(plan.summary.clone());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use otb_helper_common::StockStatus;

    fn wraith() -> DiscRecord {
        DiscRecord {
            mold: Some("Wraith".into()),
            plastic_type: Some("Star".into()),
            plastic_color: Some("Blue".into()),
            weight: Some(174.0),
            price: Some("18.00".into()),
            stock: StockStatus::InStock,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let views = vec![DiscView::from_record(&wraith())];
        let table = render_table(&views);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Key"));
        assert!(lines[2].starts_with("Wraith-Star-Blue-174-None"));
        assert!(lines[2].contains("$18.00"));
        assert!(lines[2].contains("In Stock"));
    }

    #[test]
    fn test_render_cards_placeholder_image() {
        let views = vec![DiscView::from_record(&wraith())];
        let cards = render_cards(&views);
        assert!(cards.contains("Weight: 174g"));
        assert!(cards.contains("Image: No Image"));
        assert!(!cards.contains("Rim:"));
    }

    #[test]
    fn test_notice_line() {
        assert_eq!(notice_line(&Notice::success("done")), "✔ done");
        assert_eq!(notice_line(&Notice::error("bad")), "✖ bad");
    }
}
