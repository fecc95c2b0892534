//! Properties page: inventory list with kind/status/city filter drawer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_drawer::{FilterDrawer, FilterSelect};
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::state::properties::PropertiesState;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let properties = expect_context::<RwSignal<PropertiesState>>();
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
        properties.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_properties().await {
                Ok(items) => properties.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => properties.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
        });
    });

    let kind_sel = RwSignal::new(None::<String>);
    let status_sel = RwSignal::new(None::<String>);
    let city_sel = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    Effect::new(move || {
        let kind = kind_sel.get();
        let status = status_sel.get();
        let city = city_sel.get();
        let query = search.get();
        properties.update(|s| {
            s.filters.kind = kind;
            s.filters.status = status;
            s.filters.city = city;
            s.filters.search = query;
        });
    });

    let on_clear = Callback::new(move |()| {
        kind_sel.set(None);
        status_sel.set(None);
        city_sel.set(None);
        search.set(String::new());
    });

    let on_drawer_close = Callback::new(move |()| ui.update(|u| u.filter_drawer_open = false));

    view! {
        <div class="properties-page">
            <Toolbar title="Properties".to_owned() />
            <SubscriptionBanner />

            <div class="list-controls">
                <input
                    class="list-controls__search"
                    type="search"
                    placeholder="Search properties"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| ui.update(|u| u.filter_drawer_open = true)>
                    "Filters"
                </button>
            </div>

            <Show when=move || properties.get().error.is_some()>
                <p class="properties-page__error">{move || properties.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !properties.get().loading
                fallback=move || view! { <p>"Loading properties..."</p> }
            >
                <ul class="list-table">
                    {move || {
                        properties
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|property| {
                                view! {
                                    <li class="list-table__row">
                                        <span class="list-table__name">{property.title.clone()}</span>
                                        <span class="list-table__badge">{property.kind.clone()}</span>
                                        <span class="list-table__badge">{property.status.clone()}</span>
                                        <span class="list-table__detail">
                                            {property.city.clone().unwrap_or_default()}
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
                title="Property Filters".to_owned()
                on_clear=on_clear
                on_close=on_drawer_close
            >
                <FilterSelect
                    label="Kind".to_owned()
                    options=Signal::derive(move || properties.get().kind_options())
                    selection=kind_sel
                />
                <FilterSelect
                    label="Status".to_owned()
                    options=Signal::derive(move || properties.get().status_options())
                    selection=status_sel
                />
                <FilterSelect
                    label="City".to_owned()
                    options=Signal::derive(move || properties.get().city_options())
                    selection=city_sel
                />
            </FilterDrawer>
        </div>
    }
}
