//! Search form

use leptos::prelude::*;

#[component]
pub fn SearchForm<F>(is_loading: RwSignal<bool>, on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search(query.get_untracked());
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                name="productName"
                placeholder="Enter a disc name (e.g. Wraith, Destroyer)"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Searching..." } else { "Search" }}
            </button>
        </form>
    }
}
