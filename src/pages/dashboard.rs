//! Dashboard page with the reporting summary cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the aggregated
//! summary once the session is active and renders it as stat cards.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::state::reports::ReportsState;
use crate::state::session::{SessionPhase, SessionState};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let reports = expect_context::<RwSignal<ReportsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || session.get().phase != SessionPhase::Active {
            return;
        }
        requested.set(true);
        reports.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_report_summary().await {
                Some(summary) => reports.update(|s| {
                    s.summary = Some(summary);
                    s.loading = false;
                    s.error = None;
                }),
                None => reports.update(|s| {
                    s.loading = false;
                    s.error = Some("could not load summary".to_owned());
                }),
            }
        });
    });

    let figure = move |pick: fn(&crate::net::types::ReportSummary) -> i64| {
        Signal::derive(move || reports.get().summary.as_ref().map(pick).unwrap_or(0))
    };

    view! {
        <div class="dashboard-page">
            <Toolbar title="Dashboard".to_owned() />
            <SubscriptionBanner />
            <Show when=move || reports.get().error.is_some()>
                <p class="dashboard-page__error">{move || reports.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !reports.get().loading
                fallback=move || view! { <p>"Loading summary..."</p> }
            >
                <div class="dashboard-page__cards">
                    <StatCard label="Total leads" value=figure(|s| s.leads_total) />
                    <StatCard label="New leads this month" value=figure(|s| s.leads_new_this_month) />
                    <StatCard label="Open deals" value=figure(|s| s.deals_open) />
                    <StatCard label="Deals won this month" value=figure(|s| s.deals_won_this_month) />
                    <StatCard label="Available properties" value=figure(|s| s.properties_available) />
                    <StatCard label="Running campaigns" value=figure(|s| s.campaigns_running) />
                </div>
            </Show>
        </div>
    }
}
