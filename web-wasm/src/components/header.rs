//! Header: title, backend status check, cart toggle

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::health::check_health;

#[derive(Clone, PartialEq)]
enum HealthStatus {
    Idle,
    Checking,
    Ok(String),
    Failed(String),
}

#[component]
pub fn Header(cart_count: Signal<usize>, cart_open: RwSignal<bool>) -> impl IntoView {
    let (health, set_health) = signal(HealthStatus::Idle);

    let on_check = move |_| {
        set_health.set(HealthStatus::Checking);
        spawn_local(async move {
            match check_health().await {
                Ok(message) => set_health.set(HealthStatus::Ok(message)),
                Err(message) => set_health.set(HealthStatus::Failed(message)),
            }
        });
    };

    view! {
        <header class="header">
            <h1>"OTB Helper - Disc Golf Disc Finder"</h1>
            <div class="header-actions">
                <button class="btn btn-secondary" on:click=on_check>"Check Status"</button>
                <span class="health-result">
                    {move || match health.get() {
                        HealthStatus::Idle => view! { <span></span> }.into_any(),
                        HealthStatus::Checking => view! { <span class="text-muted">"Checking..."</span> }.into_any(),
                        HealthStatus::Ok(message) => view! { <span class="status-success">"✓ " {message}</span> }.into_any(),
                        HealthStatus::Failed(message) => view! { <span class="status-error">"✗ " {message}</span> }.into_any(),
                    }}
                </span>
                <button class="btn btn-cart" on:click=move |ev| {
                    ev.stop_propagation();
                    cart_open.update(|o| *o = !*o);
                }>
                    "🛒 Cart "
                    <span class="cart-count" class:hidden=move || cart_count.get() == 0>
                        {move || cart_count.get()}
                    </span>
                </button>
            </div>
        </header>
    }
}
