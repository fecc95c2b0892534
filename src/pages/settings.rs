//! Settings page: profile, subscription snapshot, theme and language.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::toolbar::Toolbar;
use crate::net::types::UserRole;
use crate::state::session::SessionState;
use crate::state::ui::{Language, UiState};
use crate::util::auth::install_unauth_redirect;
use crate::util::storage::{BrowserStore, SessionStore};

/// Language preference key; deliberately outside the session key set so a
/// logout keeps the visitor's language.
const LANGUAGE_KEY: &str = "keystone_language";

pub(crate) fn load_language(store: &dyn SessionStore) -> Language {
    store
        .get(LANGUAGE_KEY)
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}

fn store_language(store: &dyn SessionStore, language: Language) {
    store.set(LANGUAGE_KEY, language.code());
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Owner => "Owner",
        UserRole::Employee => "Employee",
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let profile = move || {
        session.get().user.map(|u| {
            (
                u.name,
                u.email,
                role_label(u.role),
                u.company.name,
                u.company
                    .subscription
                    .and_then(|s| s.end_date)
                    .unwrap_or_else(|| "—".to_owned()),
            )
        })
    };

    view! {
        <div class="settings-page">
            <Toolbar title="Settings".to_owned() />
            <SubscriptionBanner />

            <section class="settings-section">
                <h2>"Profile"</h2>
                {move || {
                    profile()
                        .map(|(name, email, role, company, sub_end)| {
                            view! {
                                <dl class="settings-profile">
                                    <dt>"Name"</dt>
                                    <dd>{name}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{email}</dd>
                                    <dt>"Role"</dt>
                                    <dd>{role}</dd>
                                    <dt>"Company"</dt>
                                    <dd>{company}</dd>
                                    <dt>"Subscription ends"</dt>
                                    <dd>{sub_end}</dd>
                                </dl>
                            }
                        })
                }}
            </section>

            <section class="settings-section">
                <h2>"Appearance"</h2>
                <label class="settings-row">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=move |_| {
                            let current = ui.get_untracked().dark_mode;
                            let next = crate::util::theme::toggle(current);
                            ui.update(|u| u.dark_mode = next);
                        }
                    />
                    " Dark mode"
                </label>
                <label class="settings-row">
                    "Language "
                    <select
                        prop:value=move || ui.get().language.code()
                        on:change=move |ev| {
                            let language = Language::from_code(&event_target_value(&ev));
                            store_language(&BrowserStore, language);
                            ui.update(|u| u.language = language);
                        }
                    >
                        <option value="en">"English"</option>
                        <option value="ar">"العربية"</option>
                    </select>
                </label>
            </section>
        </div>
    }
}
