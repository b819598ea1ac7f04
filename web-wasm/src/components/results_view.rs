//! Results: card grid / table toggle, export button, image modal

use leptos::prelude::*;
use otb_helper_common::{DiscImage, DiscRecord, DiscView, FilterSession, ViewMode, TABLE_COLUMNS};
use crate::app::ModalImage;

#[component]
pub fn ResultsView(
    session: RwSignal<FilterSession>,
    search_info: RwSignal<Option<String>>,
    view_mode: RwSignal<ViewMode>,
    on_view_change: Callback<ViewMode>,
    on_add: Callback<DiscRecord>,
    on_export: Callback<()>,
    on_image: Callback<ModalImage>,
) -> impl IntoView {
    // Before any filtering the search line is shown; afterwards the count line
    let info = move || {
        session.with(|s| {
            if s.filters().is_empty() {
                search_info.get().unwrap_or_else(|| s.results_info())
            } else {
                s.results_info()
            }
        })
    };

    let is_empty = move || session.with(|s| s.filtered().is_empty());

    // Full re-render on every change
    let rows = move || session.with(|s| s.filtered().to_vec());

    view! {
        <div class="results">
            <div class="results-toolbar">
                <span class="results-info">{info}</span>
                <div class="view-toggle">
                    <button
                        class="btn btn-toggle"
                        class:active=move || view_mode.get() == ViewMode::Cards
                        on:click=move |_| on_view_change.run(ViewMode::Cards)
                    >
                        "Cards"
                    </button>
                    <button
                        class="btn btn-toggle"
                        class:active=move || view_mode.get() == ViewMode::Table
                        on:click=move |_| on_view_change.run(ViewMode::Table)
                    >
                        "Table"
                    </button>
                </div>
                <button class="btn btn-secondary" on:click=move |_| on_export.run(())>
                    "Export CSV"
                </button>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="text-muted">"No discs match the current filters."</p> }
            >
                {move || match view_mode.get() {
                    ViewMode::Cards => view! {
                        <div class="card-grid">
                            {rows()
                                .into_iter()
                                .map(|disc| view! { <DiscCard disc=disc on_add=on_add on_image=on_image /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    ViewMode::Table => view! {
                        <table class="results-table">
                            <thead>
                                <tr>
                                    {TABLE_COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows()
                                    .into_iter()
                                    .map(|disc| view! { <DiscRow disc=disc on_add=on_add on_image=on_image /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

/// Image with a "No Image" fallback when absent or failing to load
#[component]
fn DiscThumb(image: DiscImage, css: &'static str, on_image: Callback<ModalImage>) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    match image {
        DiscImage::Url { src, alt } => {
            let modal = ModalImage {
                src: src.clone(),
                alt: alt.clone(),
            };
            view! {
                <Show
                    when=move || !failed.get()
                    fallback=move || view! { <div class=format!("{} no-image", css)>{DiscImage::PLACEHOLDER_TEXT}</div> }
                >
                    <img
                        class=css
                        src=src.clone()
                        alt=alt.clone()
                        on:error=move |_| set_failed.set(true)
                        on:click={
                            let modal = modal.clone();
                            move |_| on_image.run(modal.clone())
                        }
                    />
                </Show>
            }
            .into_any()
        }
        DiscImage::Placeholder => {
            view! { <div class=format!("{} no-image", css)>{DiscImage::PLACEHOLDER_TEXT}</div> }.into_any()
        }
    }
}

#[component]
fn DiscCard(disc: DiscRecord, on_add: Callback<DiscRecord>, on_image: Callback<ModalImage>) -> impl IntoView {
    let view_data = DiscView::from_record(&disc);
    let detail = |label: &'static str, value: Option<String>| {
        value.map(|v| view! { <div><span class="detail-label">{label}": "</span>{v}</div> })
    };

    view! {
        <div class="disc-card">
            <DiscThumb image=view_data.image.clone() css="card-image" on_image=on_image />
            <div class="card-title">
                <h4>{view_data.plastic.clone()}</h4>
                {view_data.price.clone().map(|p| view! { <span class="price">{p}</span> })}
            </div>
            <div class="card-details">
                {detail("Stamp Foil", Some(view_data.stamp_foil.clone()))}
                {detail("Weight", Some(view_data.weight.clone()))}
                {detail("Plastic Color", view_data.plastic_color.clone())}
                {detail("Rim", view_data.rim_color.clone())}
                {detail("Flatness", view_data.flatness.clone())}
                {detail("Stiffness", view_data.stiffness.clone())}
            </div>
            <div class="card-footer">
                <span class=view_data.stock_tone.css_class()>{view_data.stock_label}</span>
                <button class="btn btn-primary" on:click=move |_| on_add.run(disc.clone())>
                    "🛒 Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[component]
fn DiscRow(disc: DiscRecord, on_add: Callback<DiscRecord>, on_image: Callback<ModalImage>) -> impl IntoView {
    let view_data = DiscView::from_record(&disc);
    let cells = view_data.table_cells();
    let stock_cell = cells[7].clone();
    let tone = view_data.stock_tone.css_class();

    view! {
        <tr>
            <td><DiscThumb image=view_data.image.clone() css="table-image" on_image=on_image /></td>
            {cells[..7].iter().cloned().map(|c| view! { <td>{c}</td> }).collect_view()}
            <td><span class=format!("stock-badge {}", tone)>{stock_cell}</span></td>
            <td>
                <button class="btn btn-primary" on:click=move |_| on_add.run(disc.clone())>
                    "🛒 Add to Cart"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn ImageModal(image: RwSignal<Option<ModalImage>>) -> impl IntoView {
    view! {
        <Show when=move || image.with(|i| i.is_some())>
            <div class="modal-overlay" on:click=move |_| image.set(None)>
                {move || image.get().map(|img| view! {
                    <div class="image-modal" on:click=|ev| ev.stop_propagation()>
                        <button class="modal-close" on:click=move |_| image.set(None)>"×"</button>
                        <img src=img.src alt=img.alt.clone() />
                        <p>{img.alt}</p>
                    </div>
                })}
            </div>
        </Show>
    }
}
