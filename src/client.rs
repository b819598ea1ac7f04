//! HTTP client for the search backend

use crate::error::{OtbError, Result};
use otb_helper_common::{
    HealthResponse, SearchError, SearchOutcome, SearchRequest, SearchResponse, HEALTH_PATH,
    SEARCH_PATH,
};
use reqwest::Client;
use std::time::{Duration, Instant};

pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/search`. Failures collapse into the three user-facing categories.
    pub async fn search(&self, request: &SearchRequest) -> std::result::Result<SearchOutcome, SearchError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        tracing::debug!(%url, query = %request.product_name, max_results = request.max_results, "search request");

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "search failed");
            return Err(SearchError::Http { status: status.as_u16() });
        }

        let body: SearchResponse = response.json().await.map_err(classify)?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(found = body.total_found, elapsed_ms, "search complete");

        Ok(SearchOutcome::from_response(body, elapsed_ms))
    }

    /// `GET /health`; returns the server's status message
    pub async fn health(&self) -> Result<String> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OtbError::Health(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OtbError::Health(format!("Health check failed: {}", response.status())));
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|e| OtbError::Health(e.to_string()))?;
        Ok(body.status_line())
    }
}

fn classify(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        tracing::warn!("search timed out");
        SearchError::Timeout
    } else if let Some(status) = err.status() {
        SearchError::Http { status: status.as_u16() }
    } else {
        tracing::warn!(error = %err, "search transport error");
        SearchError::Network(err.to_string())
    }
}
