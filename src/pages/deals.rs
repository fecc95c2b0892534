//! Deals page: pipeline list with stage filter and search.

#[cfg(test)]
#[path = "deals_test.rs"]
mod deals_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_drawer::{FilterDrawer, FilterSelect};
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::state::deals::DealsState;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

/// Summary line for the list controls: visible count plus the summed value
/// of the visible deals.
fn pipeline_summary(visible: usize, value_total: i64) -> String {
    format!("{visible} visible · {value_total} total value")
}

#[component]
pub fn DealsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let deals = expect_context::<RwSignal<DealsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);
    ui.update(UiState::close_overlays);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || session.get().phase != SessionPhase::Active {
            return;
        }
        requested.set(true);
        deals.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_deals().await {
                Ok(items) => deals.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => deals.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
        });
    });

    let stage_sel = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    Effect::new(move || {
        let stage = stage_sel.get();
        let query = search.get();
        deals.update(|s| {
            s.filters.stage = stage;
            s.filters.search = query;
        });
    });

    let on_clear = Callback::new(move |()| {
        stage_sel.set(None);
        search.set(String::new());
    });

    let on_drawer_close = Callback::new(move |()| ui.update(|u| u.filter_drawer_open = false));

    view! {
        <div class="deals-page">
            <Toolbar title="Deals".to_owned() />
            <SubscriptionBanner />

            <div class="list-controls">
                <input
                    class="list-controls__search"
                    type="search"
                    placeholder="Search deals"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| ui.update(|u| u.filter_drawer_open = true)>
                    "Filters"
                </button>
                <span class="list-controls__total">
                    {move || {
                        let state = deals.get();
                        pipeline_summary(state.filtered().len(), state.filtered_value_total())
                    }}
                </span>
            </div>

            <Show when=move || deals.get().error.is_some()>
                <p class="deals-page__error">{move || deals.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !deals.get().loading fallback=move || view! { <p>"Loading deals..."</p> }>
                <ul class="list-table">
                    {move || {
                        deals
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|deal| {
                                view! {
                                    <li class="list-table__row">
                                        <span class="list-table__name">{deal.title.clone()}</span>
                                        <span class="list-table__badge">{deal.stage.clone()}</span>
                                        <span class="list-table__detail">
                                            {deal.value.map(|v| v.to_string()).unwrap_or_default()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <FilterDrawer
                open=Signal::derive(move || ui.get().filter_drawer_open)
                title="Deal Filters".to_owned()
                on_clear=on_clear
                on_close=on_drawer_close
            >
                <FilterSelect
                    label="Stage".to_owned()
                    options=Signal::derive(move || deals.get().stage_options())
                    selection=stage_sel
                />
            </FilterDrawer>
        </div>
    }
}
