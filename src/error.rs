use otb_helper_common::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OtbError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Common(#[from] otb_helper_common::Error),

    #[error("{}", .0.user_message())]
    Search(#[from] SearchError),

    #[error("Unable to connect: {0}")]
    Health(String),

    #[error("Invalid view mode: {0} (expected cards or table)")]
    InvalidView(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OtbError>;
