//! Checkout instructions: copy a quick-find string, open the product page,
//! Ctrl+F for the exact disc.

use leptos::prelude::*;
use leptos::task::spawn_local;
use otb_helper_common::{format_number, CheckoutEntry, CheckoutPlan, Notice};
use crate::export::{copy_to_clipboard, open_product_page};

fn copy(text: String, what: &'static str, notify: Callback<Notice>) {
    spawn_local(async move {
        notify.run(copy_to_clipboard(&text, what).await);
    });
}

#[component]
pub fn CheckoutModal(plan: RwSignal<Option<CheckoutPlan>>, notify: Callback<Notice>) -> impl IntoView {
    let close = move |_| plan.set(None);

    view! {
        {move || plan.get().map(|current| {
            let total = current.linked.len();
            let criteria = current.criteria_text();
            let summary = current.summary.clone();
            let unlinked = current.unlinked.clone();
            let has_unlinked = !unlinked.is_empty();

            view! {
                <div class="modal-overlay">
                    <div class="checkout-modal">
                        <div class="modal-header">
                            <h3>"🛒 Quick Add to OTB Cart"</h3>
                            <button class="modal-close" on:click=close>"×"</button>
                        </div>

                        <div class="checkout-help">
                            "Click \"Copy\" to copy the search string, then click \"Open Page\" to go to the product page. "
                            "Use Cmd+F/Ctrl+F to find your exact disc quickly!"
                        </div>

                        <h4>"✅ Items with Direct Links (" {total} ")"</h4>
                        <table class="results-table">
                            <thead>
                                <tr>
                                    <th>"Disc Name"</th>
                                    <th>"Color"</th>
                                    <th>"Weight"</th>
                                    <th>"Price"</th>
                                    <th>"Quick Find String"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {current
                                    .linked
                                    .iter()
                                    .map(|entry| {
                                        let opening = current.opening_message(entry.position);
                                        view! { <CheckoutRow entry=entry.clone() opening=opening notify=notify /> }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>

                        <Show when=move || has_unlinked>
                            <div class="checkout-manual">
                                <h4>"⚠️ Items to Add Manually (" {unlinked.len()} ")"</h4>
                                {unlinked
                                    .iter()
                                    .map(|item| view! {
                                        <div class="manual-item">
                                            <span>
                                                {item.disc.display_name()} " - "
                                                {item.disc.plastic_color.clone().unwrap_or_else(|| "N/A".into())}
                                            </span>
                                            <span class="price">{item.price_label()}</span>
                                        </div>
                                    })
                                    .collect_view()}
                                <p class="text-muted">"Search for these items manually on OTB Discs"</p>
                            </div>
                        </Show>

                        <div class="checkout-actions">
                            <button
                                class="btn btn-secondary"
                                on:click={
                                    let criteria = criteria.clone();
                                    move |_| copy(criteria.clone(), "Search criteria", notify)
                                }
                            >
                                "📋 Copy All Criteria"
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click={
                                    let summary = summary.clone();
                                    move |_| copy(summary.clone(), "Cart summary", notify)
                                }
                            >
                                "📋 Copy Cart Summary"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}

#[component]
fn CheckoutRow(entry: CheckoutEntry, opening: String, notify: Callback<Notice>) -> impl IntoView {
    let disc = &entry.item.disc;
    let color = disc.plastic_color.clone().unwrap_or_else(|| "N/A".into());
    let weight = disc
        .weight
        .map(|w| format!("{}g", format_number(w)))
        .unwrap_or_else(|| "N/A".into());
    let name = disc.display_name();
    let price = entry.item.price_label();
    let quick_find = entry.quick_find.clone();
    let url = entry.url.clone();

    view! {
        <tr>
            <td>{name}</td>
            <td>{color}</td>
            <td>{weight}</td>
            <td class="price">{price}</td>
            <td><code>{quick_find.clone()}</code></td>
            <td class="row-actions">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| copy(quick_find.clone(), "Search text", notify)
                >
                    "📋 Copy"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        open_product_page(&url);
                        notify.run(Notice::info(opening.clone()));
                    }
                >
                    "🔗 Open Page"
                </button>
            </td>
        </tr>
    }
}
