//! Loading indicator

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator">
            <div class="spinner"></div>
            <p>"Searching OTB Discs... fetching detailed disc information can take up to 30 seconds."</p>
        </div>
    }
}
