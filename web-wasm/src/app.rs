//! Main application component

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use otb_helper_common::{
    build_checkout_plan, AddOutcome, CartItem, CartStore, ChangeKind, CheckoutPlan, DiscRecord,
    DropdownGroup, FilterControls, FilterSession, Notice, SearchRequest, ViewMode,
    DEFAULT_MAX_RESULTS, NOTICE_DURATION_MS,
};

use crate::api::search::{post_search, SearchController};
use crate::components::{
    cart_panel::CartPanel,
    checkout_modal::CheckoutModal,
    filter_panel::FilterPanel,
    header::Header,
    loading_indicator::LoadingIndicator,
    results_view::{ImageModal, ResultsView},
    search_form::SearchForm,
    toast::{Toast, ToastStack},
};
use crate::debounce::Debouncer;
use crate::export::download_csv;
use crate::storage::{load_view_preference, save_view_preference, BrowserStorage};

/// Enlarged image shown in the modal
#[derive(Clone, Debug, PartialEq)]
pub struct ModalImage {
    pub src: String,
    pub alt: String,
}

#[component]
pub fn App() -> impl IntoView {
    // Search results and filters
    let session = RwSignal::new(FilterSession::new());
    let controls = RwSignal::new(FilterControls::new());
    let dropdowns = RwSignal::new(DropdownGroup::new());
    let search_info = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let view_mode = RwSignal::new(load_view_preference());

    // Cart
    let cart_items = RwSignal::new(Vec::<CartItem>::new());
    let cart_open = RwSignal::new(false);
    let checkout = RwSignal::new(None::<CheckoutPlan>);
    let cart = StoredValue::new_local({
        let mut store = CartStore::load(BrowserStorage);
        cart_items.set(store.items().to_vec());
        store.set_listener(move |items| cart_items.set(items.to_vec()));
        store
    });

    // Notices
    let toasts = RwSignal::new(Vec::<Toast>::new());
    let next_toast_id = StoredValue::new(0u64);
    let notify = Callback::new(move |notice: Notice| {
        let id = next_toast_id.get_value();
        next_toast_id.set_value(id + 1);
        toasts.update(|t| t.push(Toast { id, notice }));
        Timeout::new(NOTICE_DURATION_MS, move || {
            toasts.update(|t| t.retain(|toast| toast.id != id));
        })
        .forget();
    });

    let modal_image = RwSignal::new(None::<ModalImage>);
    let searcher = StoredValue::new_local(SearchController::default());
    let debouncer = Debouncer::new();

    // Outside click closes any open dropdown
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        EventListener::new(&document, "click", move |_| {
            dropdowns.update(|d| d.close_all());
        })
        .forget();
    }

    let apply_filters = move || {
        let snapshot = controls.get_untracked();
        session.update(|s| s.apply_controls(&snapshot));
    };

    let on_filter_change = Callback::new(move |kind: ChangeKind| match kind.delay_ms() {
        Some(delay) => debouncer.schedule(delay, apply_filters),
        None => {
            debouncer.cancel();
            apply_filters();
        }
    });

    let on_clear_filters = Callback::new(move |_: ()| {
        debouncer.cancel();
        controls.update(|c| c.clear());
        session.update(|s| s.clear_filters());
    });

    let on_search = Callback::new(move |query: String| {
        let request = match SearchRequest::new(&query, DEFAULT_MAX_RESULTS) {
            Ok(request) => request,
            Err(e) => {
                notify.run(Notice::from(&e));
                return;
            }
        };

        // A new search always starts from empty filters
        debouncer.cancel();
        controls.update(|c| c.clear());
        session.update(|s| s.clear_filters());
        dropdowns.update(|d| d.close_all());
        search_info.set(None);

        let started = searcher.try_update_value(|s| s.begin());
        let (ticket, abort) = match started {
            Some(Ok(pair)) => pair,
            Some(Err(e)) => {
                error!("Search setup failed: {}", e);
                notify.run(e.notice());
                return;
            }
            None => return,
        };

        is_loading.set(true);
        log!("Searching for {}", request.product_name);

        spawn_local(async move {
            let result = post_search(&request, abort).await;
            let current = searcher.try_update_value(|s| s.finish(ticket)).unwrap_or(false);
            if !current {
                log!("Discarding stale search result");
                return;
            }

            is_loading.set(false);
            match result {
                Ok(outcome) => {
                    search_info.set(Some(outcome.info_line()));
                    session.update(|s| s.replace_records(outcome.records));
                }
                Err(e) => {
                    error!("Search failed: {}", e);
                    notify.run(e.notice());
                }
            }
        });
    });

    let on_add_to_cart = Callback::new(move |disc: DiscRecord| {
        let outcome = cart.try_update_value(|c| c.add(&disc));
        match outcome {
            Some(Ok(AddOutcome::Added)) => notify.run(Notice::added_to_cart(&disc.display_name())),
            Some(Ok(AddOutcome::Duplicate)) => notify.run(Notice::duplicate_in_cart()),
            Some(Err(e)) => {
                error!("Error saving cart: {}", e);
                notify.run(Notice::from(&e));
            }
            None => {}
        }
    });

    let on_remove_from_cart = Callback::new(move |key: String| {
        match cart.try_update_value(|c| c.remove(&key)) {
            Some(Ok(_)) => notify.run(Notice::removed_from_cart()),
            Some(Err(e)) => notify.run(Notice::from(&e)),
            None => {}
        }
    });

    let on_clear_cart = Callback::new(move |_: ()| {
        match cart.try_update_value(|c| c.clear()) {
            Some(Ok(())) => notify.run(Notice::cart_cleared()),
            Some(Err(e)) => notify.run(Notice::from(&e)),
            None => {}
        }
    });

    let on_checkout = Callback::new(move |_: ()| {
        let plan = cart.with_value(|c| build_checkout_plan(c.items()));
        match plan {
            Ok(plan) => {
                cart_open.set(false);
                checkout.set(Some(plan));
            }
            Err(e) => notify.run(Notice::from(&e)),
        }
    });

    let on_export = Callback::new(move |_: ()| {
        let notice = session.with_untracked(|s| download_csv(s.records(), s.filtered()));
        notify.run(notice);
    });

    let on_view_change = Callback::new(move |mode: ViewMode| {
        view_mode.set(mode);
        save_view_preference(mode);
    });

    let on_image = Callback::new(move |image: ModalImage| modal_image.set(Some(image)));

    let has_results = move || search_info.with(|i| i.is_some()) && !is_loading.get();

    view! {
        <div class="container">
            <Header cart_count=Signal::derive(move || cart_items.with(|c| c.len())) cart_open=cart_open />

            <SearchForm is_loading=is_loading on_search=move |q: String| on_search.run(q) />

            <Show when=move || is_loading.get()>
                <LoadingIndicator />
            </Show>

            <Show when=has_results>
                <section class="search-results">
                    <FilterPanel
                        session=session
                        controls=controls
                        dropdowns=dropdowns
                        on_change=on_filter_change
                        on_clear=on_clear_filters
                        notify=notify
                    />
                    <ResultsView
                        session=session
                        search_info=search_info
                        view_mode=view_mode
                        on_view_change=on_view_change
                        on_add=on_add_to_cart
                        on_export=on_export
                        on_image=on_image
                    />
                </section>
            </Show>

            <CartPanel
                items=cart_items
                open=cart_open
                on_remove=move |key: String| on_remove_from_cart.run(key)
                on_clear=move |_: ()| on_clear_cart.run(())
                on_checkout=move |_: ()| on_checkout.run(())
            />

            <CheckoutModal plan=checkout notify=notify />
            <ImageModal image=modal_image />
            <ToastStack toasts=toasts />
        </div>
    }
}
