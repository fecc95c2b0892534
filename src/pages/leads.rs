//! Leads page: list view, filter drawer, create/edit modal, delete confirm.
//!
//! Overlay visibility (drawer, form modal, delete confirm) lives in the
//! shared [`UiState`] so it resets on route entry and stays inspectable from
//! one place; this page only reads and writes those fields.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::filter_drawer::{FilterDrawer, FilterSelect};
use crate::components::lead_form::LeadForm;
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::net::types::Lead;
use crate::state::leads::LeadsState;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

/// Secondary text for a lead row: phone, source, and city when present.
fn lead_row_detail(lead: &Lead) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(phone) = lead.phone.as_deref() {
        parts.push(phone);
    }
    if let Some(source) = lead.source.as_deref() {
        parts.push(source);
    }
    if let Some(city) = lead.city.as_deref() {
        parts.push(city);
    }
    parts.join(" · ")
}

/// Resolve the lead behind the edit modal's persisted id. A stale id (the
/// lead was deleted or the list refetched) renders no modal.
fn find_lead(items: &[Lead], id: &str) -> Option<Lead> {
    items.iter().find(|lead| lead.id == id).cloned()
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let leads = expect_context::<RwSignal<LeadsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);
    // Overlays from a previous visit must not reappear.
    ui.update(UiState::close_overlays);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || session.get().phase != SessionPhase::Active {
            return;
        }
        requested.set(true);
        leads.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_leads().await {
                Ok(items) => leads.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => leads.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
        });
    });

    let status_sel = RwSignal::new(None::<String>);
    let source_sel = RwSignal::new(None::<String>);
    let city_sel = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    // Mirror drawer selections into the shared filter state.
    Effect::new(move || {
        let status = status_sel.get();
        let source = source_sel.get();
        let city = city_sel.get();
        let query = search.get();
        leads.update(|s| {
            s.filters.status = status;
            s.filters.source = source;
            s.filters.city = city;
            s.filters.search = query;
        });
    });

    let on_clear = Callback::new(move |()| {
        status_sel.set(None);
        source_sel.set(None);
        city_sel.set(None);
        search.set(String::new());
    });

    let on_drawer_close = Callback::new(move |()| ui.update(|u| u.filter_drawer_open = false));

    let on_form_close = Callback::new(move |()| {
        ui.update(|u| {
            u.creating_lead = false;
            u.editing_lead_id = None;
        });
    });

    let on_delete_cancel = Callback::new(move |()| ui.update(|u| u.confirm_delete_id = None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = ui.get_untracked().confirm_delete_id else {
            return;
        };
        ui.update(|u| u.confirm_delete_id = None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_lead(&id).await {
                Ok(()) => leads.update(|s| s.remove(&id)),
                Err(e) => leads.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="leads-page">
            <Toolbar title="Leads".to_owned() />
            <SubscriptionBanner />

            <div class="list-controls">
                <input
                    class="list-controls__search"
                    type="search"
                    placeholder="Search leads"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button
                    class="btn"
                    class=("btn--active", move || !leads.get().filters.is_empty())
                    on:click=move |_| ui.update(|u| u.filter_drawer_open = true)
                >
                    "Filters"
                </button>
                <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.creating_lead = true)>
                    "+ New Lead"
                </button>
            </div>

            <Show when=move || leads.get().error.is_some()>
                <p class="leads-page__error">{move || leads.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !leads.get().loading fallback=move || view! { <p>"Loading leads..."</p> }>
                <ul class="list-table">
                    {move || {
                        leads
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|lead| {
                                let detail = lead_row_detail(&lead);
                                let edit_id = lead.id.clone();
                                let lead_id = lead.id.clone();
                                view! {
                                    <li class="list-table__row">
                                        <span class="list-table__name">{lead.name.clone()}</span>
                                        <span class="list-table__badge">{lead.status.clone()}</span>
                                        <span class="list-table__detail">{detail}</span>
                                        <button
                                            class="btn"
                                            on:click=move |_| {
                                                let id = edit_id.clone();
                                                ui.update(|u| u.editing_lead_id = Some(id));
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| {
                                                let id = lead_id.clone();
                                                ui.update(|u| u.confirm_delete_id = Some(id));
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <FilterDrawer
                open=Signal::derive(move || ui.get().filter_drawer_open)
                title="Lead Filters".to_owned()
                on_clear=on_clear
                on_close=on_drawer_close
            >
                <FilterSelect
                    label="Status".to_owned()
                    options=Signal::derive(move || leads.get().status_options())
                    selection=status_sel
                />
                <FilterSelect
                    label="Source".to_owned()
                    options=Signal::derive(move || leads.get().source_options())
                    selection=source_sel
                />
                <FilterSelect
                    label="City".to_owned()
                    options=Signal::derive(move || leads.get().city_options())
                    selection=city_sel
                />
            </FilterDrawer>

            <Show when=move || ui.get().creating_lead>
                <LeadForm on_close=on_form_close leads=leads />
            </Show>
            {move || {
                ui.get()
                    .editing_lead_id
                    .and_then(|id| find_lead(&leads.get().items, &id))
                    .map(|lead| view! { <LeadForm existing=lead on_close=on_form_close leads=leads /> })
            }}
            <Show when=move || ui.get().confirm_delete_id.is_some()>
                <ConfirmDialog
                    title="Delete Lead".to_owned()
                    message="This will permanently delete this lead.".to_owned()
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
