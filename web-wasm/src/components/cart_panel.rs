//! Slide-out cart panel

use gloo::events::EventListener;
use leptos::prelude::*;
use otb_helper_common::CartItem;

#[component]
pub fn CartPanel<FR, FC, FK>(
    items: RwSignal<Vec<CartItem>>,
    open: RwSignal<bool>,
    on_remove: FR,
    on_clear: FC,
    on_checkout: FK,
) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send,
    FK: Fn(()) + 'static + Clone + Send,
{
    let is_empty = move || items.with(|i| i.is_empty());

    // Clicks inside the panel stop at the aside, so any click reaching the
    // document came from outside it
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        EventListener::new(&document, "click", move |_| {
            if open.get_untracked() {
                open.set(false);
            }
        })
        .forget();
    }

    view! {
        <aside class="cart-panel" class:open=move || open.get() on:click=|ev| ev.stop_propagation()>
            <div class="cart-header">
                <h3>"🛒 Cart (" {move || items.with(|i| i.len())} ")"</h3>
                <button class="modal-close" on:click=move |_| open.set(false)>"×"</button>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="text-muted cart-empty">"Your cart is empty"</p> }
            >
                <ul class="cart-items">
                    <For
                        each=move || items.get()
                        key=|item| item.id.clone()
                        children={
                            let on_remove = on_remove.clone();
                            move |item: CartItem| {
                                let on_remove = on_remove.clone();
                                let key = item.id.clone();
                                view! {
                                    <li class="cart-item">
                                        <div>
                                            <div class="cart-item-name">{item.disc.display_name()}</div>
                                            <div class="cart-item-detail">{item.detail_line()}</div>
                                            <div class="cart-item-price">{item.price_label()}</div>
                                        </div>
                                        <button
                                            class="btn btn-link"
                                            title="Remove from cart"
                                            on:click=move |_| on_remove(key.clone())
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="cart-actions">
                <button
                    class="btn btn-primary"
                    disabled=is_empty
                    on:click={
                        let on_checkout = on_checkout.clone();
                        move |_| on_checkout(())
                    }
                >
                    "Checkout on OTB"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=is_empty
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "Clear Cart"
                </button>
            </div>
        </aside>
    }
}
