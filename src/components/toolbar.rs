//! Top navigation toolbar shared by authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Carries the section nav, the current identity, the dark-mode toggle, and
//! the logout action. Logout goes through the session synchronizer so the
//! clearing/redirect path is identical to a forced logout.

use leptos::prelude::*;

use crate::net::session_sync::request_logout;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

const SECTIONS: [(&str, &str); 7] = [
    ("/", "Dashboard"),
    ("/leads", "Leads"),
    ("/deals", "Deals"),
    ("/properties", "Properties"),
    ("/services", "Services"),
    ("/campaigns", "Campaigns"),
    ("/settings", "Settings"),
];

/// Toolbar with section navigation, identity, theme toggle, and logout.
#[component]
pub fn Toolbar(#[prop(optional)] title: Option<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let identity = move || {
        session
            .get()
            .user
            .map(|u| (u.name, u.company.name))
            .unwrap_or_else(|| ("...".to_owned(), String::new()))
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">{title.unwrap_or_else(|| "Keystone".to_owned())}</span>
            <nav class="toolbar__nav">
                {SECTIONS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="toolbar__link" href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::theme::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="toolbar__self">
                {move || identity().0}
                <span class="toolbar__self-company">{move || identity().1}</span>
            </span>

            <button class="btn toolbar__logout" on:click=move |_| request_logout(session) title="Logout">
                "Logout"
            </button>
        </header>
    }
}
