//! Filter panel: dropdown checklists, range inputs with dual sliders, summary

use leptos::prelude::*;
use otb_helper_common::filter::parse_bound;
use otb_helper_common::{
    format_number, Bounds, ChangeKind, DropdownGroup, FilterControls, FilterSession, Notice,
    RangeEnd, RangeField, SelectField, SliderTrack,
};

#[component]
pub fn FilterPanel(
    session: RwSignal<FilterSession>,
    controls: RwSignal<FilterControls>,
    dropdowns: RwSignal<DropdownGroup>,
    on_change: Callback<ChangeKind>,
    on_clear: Callback<()>,
    notify: Callback<Notice>,
) -> impl IntoView {
    let summary = move || session.with(|s| s.filters().summary());
    let meaningful = move || session.with(|s| s.filters().is_meaningful());

    view! {
        <div class="filter-panel">
            <div class="filter-header">
                <h3>"Filters"</h3>
                <span class="filter-summary">{summary}</span>
                <Show when=meaningful>
                    <button class="btn btn-link" on:click=move |_| on_clear.run(())>
                        "Clear All Filters"
                    </button>
                </Show>
            </div>

            <div class="filter-dropdowns">
                {SelectField::ALL
                    .into_iter()
                    .map(|field| view! {
                        <DropdownChecklist
                            field=field
                            session=session
                            controls=controls
                            dropdowns=dropdowns
                            on_change=on_change
                        />
                    })
                    .collect_view()}
            </div>

            <div class="filter-ranges">
                {RangeField::ALL
                    .into_iter()
                    .map(|field| view! {
                        <RangeFilter
                            field=field
                            session=session
                            controls=controls
                            on_change=on_change
                            notify=notify
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DropdownChecklist(
    field: SelectField,
    session: RwSignal<FilterSession>,
    controls: RwSignal<FilterControls>,
    dropdowns: RwSignal<DropdownGroup>,
    on_change: Callback<ChangeKind>,
) -> impl IntoView {
    let is_open = move || dropdowns.with(|d| d.is_open(field));
    let label = move || session.with(|s| s.dropdown_label(field));

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        dropdowns.update(|d| d.toggle(field));
    };

    let on_deselect_all = move |_| {
        controls.update(|c| c.uncheck_all(field));
        on_change.run(ChangeKind::Discrete);
    };

    let options = move || {
        session
            .with(|s| s.options(field))
            .into_iter()
            .map(|option| {
                let value = option.value.clone();
                let checked = {
                    let value = value.clone();
                    move || controls.with(|c| c.is_checked(field, &value))
                };
                let on_toggle_value = move |ev| {
                    let checked = event_target_checked(&ev);
                    controls.update(|c| c.set_checked(field, &value, checked));
                    on_change.run(ChangeKind::Discrete);
                };
                view! {
                    <label class="dropdown-option" class:unavailable=!option.available>
                        <input type="checkbox" prop:checked=checked on:change=on_toggle_value />
                        <span>{option.value}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dropdown-checklist" on:click=|ev| ev.stop_propagation()>
            <span class="filter-label">{field.label()}</span>
            <button class="dropdown-toggle" class:open=is_open on:click=on_toggle>
                {label}
            </button>
            <Show when=is_open>
                <div class="dropdown-options">
                    <button class="btn btn-link" on:click=on_deselect_all>"Deselect All"</button>
                    {options}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RangeFilter(
    field: RangeField,
    session: RwSignal<FilterSession>,
    controls: RwSignal<FilterControls>,
    on_change: Callback<ChangeKind>,
    notify: Callback<Notice>,
) -> impl IntoView {
    let placeholder = move |end: RangeEnd| {
        session
            .with(|s| s.observed_range(field))
            .map(|range| range.placeholder(end))
            .unwrap_or_else(|| match end {
                RangeEnd::Min => "Min".to_string(),
                RangeEnd::Max => "Max".to_string(),
            })
    };

    // Sliders follow the raw inputs so they move while typing is debounced
    let track = move || {
        let observed = session.with(|s| s.observed_range(field));
        let bounds = controls.with(|c| Bounds {
            min: parse_bound(c.input(field, RangeEnd::Min)),
            max: parse_bound(c.input(field, RangeEnd::Max)),
        });
        SliderTrack::new(field, observed, bounds)
    };

    let on_text_input = move |end: RangeEnd, raw: String| {
        controls.update(|c| c.set_input(field, end, raw));
        on_change.run(ChangeKind::Keystroke);
    };

    let on_blur = move |_| {
        let swapped = controls.try_update(|c| c.normalize_ranges()).unwrap_or_default();
        if !swapped.is_empty() {
            notify.run(Notice::ranges_adjusted());
            on_change.run(ChangeKind::Discrete);
        }
    };

    let on_slider_input = move |end: RangeEnd, raw: String| {
        controls.update(|c| {
            c.set_input(field, end, raw);
            // crossed thumbs swap immediately
            c.normalize_ranges();
        });
    };

    let step = SliderTrack::step(field).to_string();
    let (input_min, input_max) = match field {
        RangeField::Flatness | RangeField::Stiffness => ("1", Some("10")),
        _ => ("0", None),
    };

    let fill_style = move || {
        let (left, width) = track().fill();
        format!("left: {:.1}%; width: {:.1}%;", left, width)
    };

    view! {
        <div class="range-filter">
            <span class="filter-label">{field.label()}</span>
            <div class="range-inputs">
                <input
                    type="number"
                    min=input_min
                    max=input_max
                    step=step.clone()
                    name=field.bound_key(RangeEnd::Min)
                    placeholder=move || placeholder(RangeEnd::Min)
                    prop:value=move || controls.with(|c| c.input(field, RangeEnd::Min).to_string())
                    on:input=move |ev| on_text_input(RangeEnd::Min, event_target_value(&ev))
                    on:blur=on_blur
                />
                <span>"-"</span>
                <input
                    type="number"
                    min=input_min
                    max=input_max
                    step=step.clone()
                    name=field.bound_key(RangeEnd::Max)
                    placeholder=move || placeholder(RangeEnd::Max)
                    prop:value=move || controls.with(|c| c.input(field, RangeEnd::Max).to_string())
                    on:input=move |ev| on_text_input(RangeEnd::Max, event_target_value(&ev))
                    on:blur=on_blur
                />
            </div>
            <div class="dual-slider">
                <div class="slider-track"></div>
                <div class="slider-range" style=fill_style></div>
                <input
                    type="range"
                    class="slider-min"
                    step=step.clone()
                    min=move || format_number(track().lo)
                    max=move || format_number(track().hi)
                    prop:value=move || format_number(track().min_thumb)
                    on:input=move |ev| on_slider_input(RangeEnd::Min, event_target_value(&ev))
                    on:change=move |_| on_change.run(ChangeKind::Discrete)
                />
                <input
                    type="range"
                    class="slider-max"
                    step=step
                    min=move || format_number(track().lo)
                    max=move || format_number(track().hi)
                    prop:value=move || format_number(track().max_thumb)
                    on:input=move |ev| on_slider_input(RangeEnd::Max, event_target_value(&ev))
                    on:change=move |_| on_change.run(ChangeKind::Discrete)
                />
            </div>
        </div>
    }
}
