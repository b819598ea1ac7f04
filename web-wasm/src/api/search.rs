//! `POST /api/search` with a client-side abort timeout
//!
//! A new search aborts the previous request's `AbortController`, and only the
//! latest ticket may apply its result.

use gloo::timers::callback::Timeout;
use leptos::logging::{error, log};
use otb_helper_common::{
    SearchError, SearchOutcome, SearchRequest, SearchResponse, SearchSequencer, SearchTicket,
    SEARCH_PATH, SEARCH_TIMEOUT_MS,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

/// Tracks the in-flight search
#[derive(Default)]
pub struct SearchController {
    sequencer: SearchSequencer,
    in_flight: Option<AbortController>,
}

impl SearchController {
    /// Supersedes whatever is running and hands out a fresh ticket
    pub fn begin(&mut self) -> Result<(SearchTicket, AbortController), SearchError> {
        if let Some(previous) = self.in_flight.take() {
            log!("Aborting superseded search");
            previous.abort();
        }
        let controller = AbortController::new()
            .map_err(|e| SearchError::Network(format!("AbortController: {:?}", e)))?;
        self.in_flight = Some(controller.clone());
        Ok((self.sequencer.issue(), controller))
    }

    /// Clears the in-flight handle; true if the ticket is still the latest
    pub fn finish(&mut self, ticket: SearchTicket) -> bool {
        let current = self.sequencer.is_current(ticket);
        if current {
            self.in_flight = None;
        }
        current
    }
}

pub async fn post_search(
    request: &SearchRequest,
    controller: AbortController,
) -> Result<SearchOutcome, SearchError> {
    let started = js_sys::Date::now();

    let timed_out = Rc::new(Cell::new(false));
    let _deadline = {
        let timed_out = timed_out.clone();
        let controller = controller.clone();
        Timeout::new(SEARCH_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let result = fetch_search(request, &controller).await;
    let elapsed = js_sys::Date::now() - started;

    match result {
        Ok(response) => Ok(SearchOutcome::from_response(response, elapsed)),
        Err(FetchFailure::Status(status)) => Err(SearchError::Http { status }),
        Err(FetchFailure::Js(e)) => {
            error!("Search error: {:?}", e);
            if timed_out.get() {
                Err(SearchError::Timeout)
            } else {
                Err(SearchError::Network(format!("{:?}", e)))
            }
        }
    }
}

enum FetchFailure {
    Status(u16),
    Js(JsValue),
}

impl From<JsValue> for FetchFailure {
    fn from(value: JsValue) -> Self {
        FetchFailure::Js(value)
    }
}

async fn fetch_search(
    request: &SearchRequest,
    controller: &AbortController,
) -> Result<SearchResponse, FetchFailure> {
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));
    opts.set_signal(Some(&controller.signal()));

    let req = Request::new_with_str_and_init(SEARCH_PATH, &opts)?;
    req.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(FetchFailure::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: SearchResponse = serde_wasm_bindgen::from_value(json).map_err(JsValue::from)?;
    Ok(response)
}
