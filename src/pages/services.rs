//! Services page: catalog list with category filter and active-only toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_drawer::{FilterDrawer, FilterSelect};
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::state::services::ServicesState;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let services = expect_context::<RwSignal<ServicesState>>();
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
        services.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_services().await {
                Ok(items) => services.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => services.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
        });
    });

    let category_sel = RwSignal::new(None::<String>);
    let active_only = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    Effect::new(move || {
        let category = category_sel.get();
        let only_active = active_only.get();
        let query = search.get();
        services.update(|s| {
            s.filters.category = category;
            s.filters.active_only = only_active;
            s.filters.search = query;
        });
    });

    let on_clear = Callback::new(move |()| {
        category_sel.set(None);
        active_only.set(false);
        search.set(String::new());
    });

    let on_drawer_close = Callback::new(move |()| ui.update(|u| u.filter_drawer_open = false));

    view! {
        <div class="services-page">
            <Toolbar title="Services".to_owned() />
            <SubscriptionBanner />

            <div class="list-controls">
                <input
                    class="list-controls__search"
                    type="search"
                    placeholder="Search catalog"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| ui.update(|u| u.filter_drawer_open = true)>
                    "Filters"
                </button>
            </div>

            <Show when=move || services.get().error.is_some()>
                <p class="services-page__error">{move || services.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !services.get().loading fallback=move || view! { <p>"Loading catalog..."</p> }>
                <ul class="list-table">
                    {move || {
                        services
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="list-table__row" class=("list-table__row--inactive", !item.active)>
                                        <span class="list-table__name">{item.name.clone()}</span>
                                        <span class="list-table__badge">
                                            {item.category.clone().unwrap_or_default()}
                                        </span>
                                        <span class="list-table__detail">
                                            {item.price.map(|p| p.to_string()).unwrap_or_default()}
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
                title="Catalog Filters".to_owned()
                on_clear=on_clear
                on_close=on_drawer_close
            >
                <FilterSelect
                    label="Category".to_owned()
                    options=Signal::derive(move || services.get().category_options())
                    selection=category_sel
                />
                <label class="filter-drawer__label">
                    <input
                        type="checkbox"
                        prop:checked=move || active_only.get()
                        on:change=move |_| active_only.update(|v| *v = !*v)
                    />
                    " Active items only"
                </label>
            </FilterDrawer>
        </div>
    }
}
