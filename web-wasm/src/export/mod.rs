//! CSV download and clipboard helpers

pub mod js_bindings;

use js_bindings::{copy_text_js, download_text_js, open_in_new_tab_js};
use leptos::logging::error;
use otb_helper_common::{csv_filename_today, export_csv, DiscRecord, Notice};

/// Downloads the filtered subset as CSV and returns the notice to show
pub fn download_csv(all: &[DiscRecord], filtered: &[DiscRecord]) -> Notice {
    if all.is_empty() {
        return Notice::nothing_to_export();
    }
    match export_csv(filtered) {
        Ok(csv) => {
            download_text_js(&csv, &csv_filename_today(), "text/csv");
            Notice::exported(filtered.len())
        }
        Err(e) => Notice::from(&e),
    }
}

/// Copies text and returns a success or failure notice naming `what`
pub async fn copy_to_clipboard(text: &str, what: &str) -> Notice {
    match copy_text_js(text).await {
        Ok(_) => Notice::copied(what),
        Err(e) => {
            error!("Failed to copy {}: {:?}", what, e);
            Notice::error(format!("Failed to copy {}", what.to_lowercase()))
        }
    }
}

pub fn open_product_page(url: &str) {
    open_in_new_tab_js(url);
}
