//! Login page with credential sign-in.
//!
//! A successful login persists the tokens and logged-in flag, then reloads
//! into `/` so the session manager runs its `Authenticating` pass from a
//! clean slate.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

/// Reason text shown when the login page was reached via a forced logout.
#[cfg(any(test, feature = "hydrate"))]
fn reason_notice(reason: &str) -> Option<&'static str> {
    match reason {
        "subscription_expired" => Some("Your company's subscription has expired. Sign in after renewing."),
        "invalid_session" => Some("Your session is no longer valid. Please sign in again."),
        _ => None,
    }
}

/// Validate credentials before submission; `None` means submittable.
fn credentials_problem(email: &str, password: &str) -> Option<&'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Enter both email and password.");
    }
    if !email.contains('@') {
        return Some("Enter a valid email address.");
    }
    None
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Surface the forced-logout cause carried in the query string.
    #[cfg(feature = "hydrate")]
    {
        let reason = web_sys::window()
            .map(|w| w.location())
            .and_then(|loc| loc.search().ok())
            .and_then(|search| {
                search
                    .trim_start_matches('?')
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("reason=").map(str::to_owned))
            });
        if let Some(notice) = reason.as_deref().and_then(reason_notice) {
            info.set(notice.to_owned());
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Some(problem) = credentials_problem(&email_value, &password_value) {
            info.set(problem.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(tokens) => {
                    crate::state::session::persist_login(&crate::util::storage::BrowserStore, &tokens);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Keystone CRM"</h1>
                <p class="login-card__subtitle">"Sign in to your workspace"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
