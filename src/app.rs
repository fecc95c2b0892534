//! App root: context providers, routing, and session manager installation.
//!
//! ARCHITECTURE
//! ============
//! Every piece of shared state is a plain struct provided here as an
//! `RwSignal` context; components mutate exclusively through those signals.
//! The session lifecycle manager is installed once from this root so its
//! poll task lives exactly as long as the app.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::net::session_sync::install_session_sync;
use crate::pages::campaigns::CampaignsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::deals::DealsPage;
use crate::pages::leads::LeadsPage;
use crate::pages::login::LoginPage;
use crate::pages::properties::PropertiesPage;
use crate::pages::services::ServicesPage;
use crate::pages::settings::SettingsPage;
use crate::state::campaigns::CampaignsState;
use crate::state::deals::DealsState;
use crate::state::leads::LeadsState;
use crate::state::properties::PropertiesState;
use crate::state::reports::ReportsState;
use crate::state::services::ServicesState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell used by the SSR server binary.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component: provides all shared state and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // `loading` starts true so route guards wait for the startup
    // authentication pass instead of bouncing to /login.
    let session = RwSignal::new(SessionState {
        loading: true,
        ..SessionState::default()
    });
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);
    provide_context(RwSignal::new(LeadsState::default()));
    provide_context(RwSignal::new(DealsState::default()));
    provide_context(RwSignal::new(PropertiesState::default()));
    provide_context(RwSignal::new(ServicesState::default()));
    provide_context(RwSignal::new(CampaignsState::default()));
    provide_context(RwSignal::new(ReportsState::default()));

    // Both helpers fall back to defaults outside the browser, so this init
    // is safe on the server as well.
    let dark = crate::util::theme::read_preference();
    crate::util::theme::apply(dark);
    let language = crate::pages::settings::load_language(&crate::util::storage::BrowserStore);
    ui.update(|u| {
        u.dark_mode = dark;
        u.language = language;
    });

    install_session_sync(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/keystone-crm.css" />
        <Title text="Keystone CRM" />
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/leads") view=LeadsPage />
                <Route path=path!("/deals") view=DealsPage />
                <Route path=path!("/properties") view=PropertiesPage />
                <Route path=path!("/services") view=ServicesPage />
                <Route path=path!("/campaigns") view=CampaignsPage />
                <Route path=path!("/settings") view=SettingsPage />
            </Routes>
        </Router>
    }
}
