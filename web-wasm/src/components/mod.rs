//! UI components

pub mod cart_panel;
pub mod checkout_modal;
pub mod filter_panel;
pub mod header;
pub mod loading_indicator;
pub mod results_view;
pub mod search_form;
pub mod toast;
