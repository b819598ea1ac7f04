//! Human-assisted checkout
//!
//! The store has no cart API, so checkout means opening each product page
//! and finding the exact disc with Ctrl+F. Each linked item gets a
//! quick-find string tuned for that.

use crate::cart::CartItem;
use crate::error::{Error, Result};
use crate::render::NOT_AVAILABLE;
use crate::types::{format_number, DiscRecord};

/// A cart item that has a product page
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutEntry {
    /// 1-based
    pub position: usize,
    pub item: CartItem,
    pub quick_find: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPlan {
    pub linked: Vec<CheckoutEntry>,
    /// Items to look up manually
    pub unlinked: Vec<CartItem>,
    /// One line per cart item
    pub summary: String,
}

impl CheckoutPlan {
    /// Copyable per-item criteria for every linked entry
    pub fn criteria_text(&self) -> String {
        self.linked
            .iter()
            .map(|entry| criteria_block(entry.position, &entry.item.disc, &entry.quick_find))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Toast text shown when a product page is opened
    pub fn opening_message(&self, position: usize) -> String {
        format!(
            "Opening item {}/{} - look for the disc matching the criteria shown",
            position,
            self.linked.len()
        )
    }
}

pub fn build_checkout_plan(items: &[CartItem]) -> Result<CheckoutPlan> {
    if items.is_empty() {
        return Err(Error::EmptyCart);
    }

    let (with_url, without_url): (Vec<&CartItem>, Vec<&CartItem>) = items
        .iter()
        .partition(|item| has_text(&item.disc.product_url));

    if with_url.is_empty() {
        return Err(Error::NoDirectLinks);
    }

    let linked = with_url
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let url = item.disc.product_url.clone()?;
            Some(CheckoutEntry {
                position: i + 1,
                quick_find: quick_find_string(&item.disc),
                item: item.clone(),
                url,
            })
        })
        .collect();

    let summary = items
        .iter()
        .map(|item| summary_line(&item.disc))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(CheckoutPlan {
        linked,
        unlinked: without_url.into_iter().cloned().collect(),
        summary,
    })
}

/// Search text for locating one disc on its product page.
///
/// Verbatim row text wins. Otherwise weight, color, foil, rim and price are
/// combined, but only when at least two of them are known; a single
/// fragment is too ambiguous, so plastic + mold is used instead.
pub fn quick_find_string(disc: &DiscRecord) -> String {
    if let Some(raw) = disc.raw_row_text.as_deref() {
        if !raw.trim().is_empty() {
            return raw.to_string();
        }
    }

    let mut parts = Vec::new();
    if let Some(weight) = disc.weight.filter(|w| *w != 0.0) {
        parts.push(format!("{}g", format_number(weight)));
    }
    for value in [&disc.plastic_color, &disc.stamp_foil, &disc.rim_color] {
        if let Some(v) = known(value) {
            parts.push(v.to_string());
        }
    }
    if let Some(price) = known(&disc.price) {
        parts.push(format!("${}", price.trim_start_matches('$')));
    }

    if parts.len() >= 2 {
        parts.join(" ")
    } else {
        format!(
            "{} {}",
            disc.plastic_type.as_deref().unwrap_or(NOT_AVAILABLE),
            disc.mold.as_deref().unwrap_or(NOT_AVAILABLE)
        )
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn known(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty() && *v != NOT_AVAILABLE)
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn weight_text(disc: &DiscRecord) -> String {
    disc.weight
        .map(|w| format!("{}g", format_number(w)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn price_text(disc: &DiscRecord) -> String {
    format!("${}", or_na(&disc.price).trim_start_matches('$'))
}

/// `Star Wraith - Blue (174g) - $18.00`
fn summary_line(disc: &DiscRecord) -> String {
    format!(
        "{} - {} ({}) - {}",
        disc.display_name(),
        or_na(&disc.plastic_color),
        weight_text(disc),
        price_text(disc)
    )
}

fn criteria_block(position: usize, disc: &DiscRecord, quick_find: &str) -> String {
    let look_weight = disc
        .weight
        .map(|w| format!("{}g", format_number(w)))
        .unwrap_or_else(|| "any".to_string());
    format!(
        "Item {}: {}\n\
         - Color: {}\n\
         - Weight: {}\n\
         - Stamp Foil: {}\n\
         - Price: {}\n\
         - Quick Find: {}\n\
         - Raw Row Text: {}\n\
         - Look for: {} color, {} weight, {} foil\n",
        position,
        disc.display_name(),
        or_na(&disc.plastic_color),
        weight_text(disc),
        or_na(&disc.stamp_foil),
        price_text(disc),
        quick_find,
        disc.raw_row_text.as_deref().unwrap_or("Not available"),
        disc.plastic_color.as_deref().unwrap_or("Any"),
        look_weight,
        disc.stamp_foil.as_deref().unwrap_or("any"),
    )
}
