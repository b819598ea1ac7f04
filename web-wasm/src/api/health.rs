//! `GET /health`

use gloo::net::http::Request;
use leptos::logging::error;
use otb_helper_common::{health_outcome, HealthResponse, HEALTH_PATH, HEALTH_UNREACHABLE};

/// Status line for the header
pub async fn check_health() -> Result<String, String> {
    let response = Request::get(HEALTH_PATH).send().await.map_err(|e| {
        error!("Health check error: {}", e);
        HEALTH_UNREACHABLE.to_string()
    })?;

    if !response.ok() {
        error!("Health check returned {}", response.status());
        return health_outcome(false, None).map_err(str::to_string);
    }

    let body = match response.json::<HealthResponse>().await {
        Ok(body) => Some(body),
        Err(e) => {
            error!("Health check parse error: {}", e);
            None
        }
    };
    health_outcome(true, body).map_err(str::to_string)
}
