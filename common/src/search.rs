//! Search request/response types and the search failure taxonomy

use crate::error::{Error, Result};
use crate::notice::Notice;
use crate::render::search_info;
use crate::types::DiscRecord;
use serde::{Deserialize, Serialize};

pub const SEARCH_PATH: &str = "/api/search";
pub const HEALTH_PATH: &str = "/health";

/// Product pages the backend may fetch per search
pub const DEFAULT_MAX_RESULTS: u32 = 3;

/// Client-side deadline, independent of the server's own budget
pub const SEARCH_TIMEOUT_MS: u32 = 30_000;

/// Body of `POST /api/search`. Filtering stays client-side, so no
/// `filters` object is ever sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub product_name: String,
    pub max_results: u32,
}

impl SearchRequest {
    pub fn new(query: &str, max_results: u32) -> Result<Self> {
        let product_name = query.trim();
        if product_name.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self {
            product_name: product_name.to_string(),
            max_results: max_results.max(1),
        })
    }
}

/// Body returned by `POST /api/search`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_found: usize,
    #[serde(default)]
    pub search_time_ms: Option<f64>,
    #[serde(default)]
    pub results: Vec<DiscRecord>,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Header text for any failed health check
pub const HEALTH_UNREACHABLE: &str = "Unable to connect";

impl HealthResponse {
    /// The server's message, else its status
    pub fn status_line(self) -> String {
        if self.message.is_empty() {
            self.status.unwrap_or_else(|| "ok".into())
        } else {
            self.message
        }
    }
}

/// A non-2xx status or an unreadable body both read as unreachable
pub fn health_outcome(
    status_ok: bool,
    body: Option<HealthResponse>,
) -> std::result::Result<String, &'static str> {
    match body {
        Some(body) if status_ok => Ok(body.status_line()),
        _ => Err(HEALTH_UNREACHABLE),
    }
}

/// A completed search, ready to install into a `FilterSession`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub total_found: usize,
    pub elapsed_ms: f64,
    pub records: Vec<DiscRecord>,
}

impl SearchOutcome {
    /// Prefers the server-reported time over the client-measured one
    pub fn from_response(response: SearchResponse, client_elapsed_ms: f64) -> Self {
        Self {
            query: response.query,
            total_found: response.total_found,
            elapsed_ms: response.search_time_ms.unwrap_or(client_elapsed_ms),
            records: response.results,
        }
    }

    /// `Found N discs in Xms`
    pub fn info_line(&self) -> String {
        search_info(self.total_found, self.elapsed_ms)
    }
}

/// Why a search failed. Each variant is one user-facing category.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),
}

impl SearchError {
    /// Plain-language toast text; detail stays in the logs
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Timeout => "Search timed out. The server is fetching detailed disc information. Please try again.".to_string(),
            SearchError::Http { status } => {
                format!("Search failed: HTTP error! status: {}. Please try again.", status)
            }
            SearchError::Network(_) => {
                "Search failed. Please check your connection and try again.".to_string()
            }
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

/// Identifies one issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Single-flight gate: only the most recently issued ticket may apply its result
#[derive(Debug, Clone, Default)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new search, superseding any outstanding one
    pub fn issue(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Makes every outstanding ticket stale
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}
