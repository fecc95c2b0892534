//! Slide-in filter drawer shell and its select control.
//!
//! DESIGN
//! ======
//! Pages compose concrete drawers from this shell plus `FilterSelect`
//! controls whose option lists come from the fetched arrays (via the state
//! modules' `*_options` helpers), so no extra endpoints are needed.

#[cfg(test)]
#[path = "filter_drawer_test.rs"]
mod filter_drawer_test;

use leptos::prelude::*;

/// Map a raw `<select>` value to a filter selection; the empty sentinel
/// option means "no filter".
fn selection_from_value(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Drawer shell with a title bar, arbitrary filter controls, and a clear
/// action. Visibility is owned by the caller (the shared UI state); the
/// drawer only reports close requests.
#[component]
pub fn FilterDrawer(
    open: Signal<bool>,
    #[prop(into)] title: String,
    on_clear: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
        </Show>
        <aside class="filter-drawer" class:filter-drawer--open=move || open.get()>
            <div class="filter-drawer__header">
                <h2>{title.clone()}</h2>
                <button class="btn" on:click=move |_| on_close.run(()) aria-label="Close filters">
                    "✕"
                </button>
            </div>
            <div class="filter-drawer__body">{children()}</div>
            <div class="filter-drawer__actions">
                <button class="btn" on:click=move |_| on_clear.run(())>
                    "Clear filters"
                </button>
            </div>
        </aside>
    }
}

/// A labelled select whose options are derived values from the fetched list.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    options: Signal<Vec<String>>,
    selection: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="filter-drawer__label">
            {label.clone()}
            <select
                class="filter-drawer__select"
                prop:value=move || selection.get().unwrap_or_default()
                on:change=move |ev| {
                    selection.set(selection_from_value(&event_target_value(&ev)));
                }
            >
                <option value="">"All"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|opt| {
                            view! { <option value=opt.clone()>{opt.clone()}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
