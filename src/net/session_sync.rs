//! Background synchronizer for session identity and subscription entitlement.
//!
//! This is the browser half of the session lifecycle manager: it runs the
//! startup `Authenticating` pass, then a fixed-interval poll loop that
//! re-validates the tenant subscription and forces logout when entitlement
//! lapses. All decisions are delegated to the pure functions in
//! `state::session`; this module only performs fetches, timer scheduling,
//! storage application, and the redirect.
//!
//! All browser logic is gated behind `#[cfg(feature = "hydrate")]`.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded event loop. The poll task reads the session signal
//! untracked on every tick so it always sees the latest state, and no-ops
//! unless the phase is `Active` — a timer firing during or after logout must
//! do nothing. An `AtomicBool` alive flag cleared in `on_cleanup` stops the
//! loop when the provider unmounts.

#[cfg(test)]
#[path = "session_sync_test.rs"]
mod session_sync_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::CurrentUser;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::session::{
    AuthResolution, LogoutCause, POLL_INTERVAL, SessionPhase, SubscriptionError, apply_decision, clear_session,
    evaluate_poll, logout_redirect_url, observed_status, persist_current_user, resolve_authentication,
    restore_phase, restore_user, subscription_id,
};
#[cfg(feature = "hydrate")]
use crate::util::storage::{BrowserStore, SessionStore};

/// Milliseconds since the Unix epoch, from the browser clock.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Run the detailed subscription check for `user`, mapping a missing
/// subscription id to `NotConfigured` and transport failures to
/// `CheckFailed`.
#[cfg(feature = "hydrate")]
async fn check_subscription(user: &CurrentUser) -> Result<crate::net::types::SubscriptionStatus, SubscriptionError> {
    let Some(id) = subscription_id(user) else {
        return Err(SubscriptionError::NotConfigured);
    };
    api::check_subscription_status(id)
        .await
        .map_err(SubscriptionError::CheckFailed)
}

/// Poll once while `Active`; returns `true` when the session expired and a
/// forced logout was performed.
#[cfg(feature = "hydrate")]
async fn poll_once(session: RwSignal<SessionState>) -> bool {
    let snapshot = session.get_untracked();
    if snapshot.phase != SessionPhase::Active {
        return false;
    }
    let Some(user) = snapshot.user else {
        return false;
    };

    let outcome = check_subscription(&user).await;
    let observed = observed_status(&user, outcome);
    let decision = evaluate_poll(snapshot.subscription.as_ref(), observed, now_ms());

    let mut expired = false;
    session.update(|s| {
        expired = apply_decision(s, &BrowserStore, decision.clone());
    });
    if expired {
        log::warn!("subscription no longer active; forcing logout");
        force_logout(session, LogoutCause::SubscriptionExpired);
    }
    expired
}

/// Clear all persisted session artifacts, reset in-memory state, and
/// redirect to the login entry point. Called exactly once per termination.
#[cfg(feature = "hydrate")]
fn force_logout(session: RwSignal<SessionState>, cause: LogoutCause) {
    clear_session(&BrowserStore);
    session.update(|s| *s = SessionState::default());
    redirect_to(&logout_redirect_url(cause, now_ms()));
}

#[cfg(feature = "hydrate")]
fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Explicit user-initiated logout, shared by the toolbar and settings page.
///
/// Best-effort backend teardown first, then the same clearing/redirect path
/// as a forced logout.
pub fn request_logout(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            api::logout().await;
            force_logout(session, LogoutCause::UserAction);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Install the session lifecycle manager: startup authentication pass plus
/// the recurring subscription poll. Call once from the app root; no-op on
/// the server.
pub fn install_session_sync(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();

        leptos::task::spawn_local(async move {
            // Startup pass: LoggedOut -> Authenticating when persisted
            // artifacts warrant it.
            if restore_phase(&BrowserStore) != SessionPhase::Authenticating {
                session.update(|s| s.loading = false);
                return;
            }
            session.update(|s| {
                s.phase = SessionPhase::Authenticating;
                // Cached record paints identity immediately; the fetch below
                // remains authoritative.
                s.user = restore_user(&BrowserStore);
            });

            let identity = api::fetch_current_user().await;
            let outcome = match identity.as_ref() {
                Some(user) => check_subscription(user).await,
                None => Err(SubscriptionError::CheckFailed("identity fetch failed".to_owned())),
            };
            match resolve_authentication(identity, outcome, now_ms()) {
                AuthResolution::Active { user, status, warning } => {
                    persist_current_user(&BrowserStore, &user);
                    match &warning {
                        Some(w) => crate::util::storage::save_json(
                            &BrowserStore,
                            crate::state::session::EXPIRY_WARNING_KEY,
                            w,
                        ),
                        None => BrowserStore.remove(crate::state::session::EXPIRY_WARNING_KEY),
                    }
                    session.update(|s| {
                        s.phase = SessionPhase::Active;
                        s.user = Some(user);
                        s.subscription = Some(status);
                        s.warning = warning;
                        s.loading = false;
                    });
                }
                AuthResolution::Expired(cause) => {
                    log::warn!("session not entitled at startup: {}", cause.as_str());
                    session.update(|s| s.loading = false);
                    force_logout(session, cause);
                    return;
                }
            }

            // Recurring poll; the next tick is the only retry mechanism.
            loop {
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if poll_once(session).await {
                    break;
                }
            }
        });

        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
