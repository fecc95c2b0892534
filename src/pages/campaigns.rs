//! Campaigns page: marketing campaign list with status filter.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::filter_drawer::{FilterDrawer, FilterSelect};
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::state::campaigns::CampaignsState;
use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let campaigns = expect_context::<RwSignal<CampaignsState>>();
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
        campaigns.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_campaigns().await {
                Ok(items) => campaigns.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => campaigns.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
        });
    });

    let status_sel = RwSignal::new(None::<String>);

    Effect::new(move || {
        let status = status_sel.get();
        campaigns.update(|s| s.status_filter = status);
    });

    let on_clear = Callback::new(move |()| status_sel.set(None));
    let on_drawer_close = Callback::new(move |()| ui.update(|u| u.filter_drawer_open = false));

    view! {
        <div class="campaigns-page">
            <Toolbar title="Campaigns".to_owned() />
            <SubscriptionBanner />

            <div class="list-controls">
                <button class="btn" on:click=move |_| ui.update(|u| u.filter_drawer_open = true)>
                    "Filters"
                </button>
                <span class="list-controls__total">
                    {move || format!("{} attributed leads", campaigns.get().filtered_leads_total())}
                </span>
            </div>

            <Show when=move || campaigns.get().error.is_some()>
                <p class="campaigns-page__error">{move || campaigns.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !campaigns.get().loading
                fallback=move || view! { <p>"Loading campaigns..."</p> }
            >
                <ul class="list-table">
                    {move || {
                        campaigns
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|campaign| {
                                view! {
                                    <li class="list-table__row">
                                        <span class="list-table__name">{campaign.name.clone()}</span>
                                        <span class="list-table__badge">{campaign.channel.clone()}</span>
                                        <span class="list-table__badge">{campaign.status.clone()}</span>
                                        <span class="list-table__detail">
                                            {format!("{} leads", campaign.leads_count)}
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
                title="Campaign Filters".to_owned()
                on_clear=on_clear
                on_close=on_drawer_close
            >
                <FilterSelect
                    label="Status".to_owned()
                    options=Signal::derive(move || campaigns.get().status_options())
                    selection=status_sel
                />
            </FilterDrawer>
        </div>
    }
}
