//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Please enter a disc name to search for")]
    EmptyQuery,

    #[error("No results match current filters")]
    EmptyExport,

    #[error("Your cart is empty!")]
    EmptyCart,

    #[error("No items have direct product links. Please search for these items manually on OTB.")]
    NoDirectLinks,
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
