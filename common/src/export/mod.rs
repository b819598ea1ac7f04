//! Export core modules shared across CLI and WASM wrappers.

pub mod checkout_core;
pub mod csv_core;

pub use checkout_core::{build_checkout_plan, quick_find_string, CheckoutEntry, CheckoutPlan};
pub use csv_core::{csv_filename, csv_filename_today, export_csv, CSV_HEADER};
