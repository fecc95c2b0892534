//! Session and subscription lifecycle state.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the one piece of the client with real temporal logic: it owns the
//! authenticated-session state machine, mirrors identity to persistent
//! storage through the [`SessionStore`] port, and decides when a periodic
//! subscription poll must force the user out. Everything here is pure and
//! synchronous; the browser wiring (fetches, timer, redirect) lives in
//! `net::session_sync`.
//!
//! ERROR HANDLING
//! ==============
//! A failed entitlement check is treated as "not entitled" — the safe default
//! is logout, never continued access with unknown subscription state. A user
//! with no configured billing subscription is a distinct, non-failure case
//! that falls back to the basic `is_active` flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{CurrentUser, SessionTokens, SubscriptionStatus};
use crate::util::storage::SessionStore;

/// Fixed interval between subscription polls while the session is active.
pub const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5 * 60);

/// Persisted access token (plain string).
pub const ACCESS_TOKEN_KEY: &str = "keystone_access_token";
/// Persisted refresh token (plain string).
pub const REFRESH_TOKEN_KEY: &str = "keystone_refresh_token";
/// Persisted logged-in flag (`"true"` when a session exists).
pub const LOGGED_IN_KEY: &str = "keystone_logged_in";
/// Persisted serialized [`CurrentUser`] record (JSON).
pub const CURRENT_USER_KEY: &str = "keystone_current_user";
/// Persisted [`ExpiryWarning`] record (JSON), present only while expiring soon.
pub const EXPIRY_WARNING_KEY: &str = "keystone_subscription_warning";
/// Persisted flag marking the subscription as observed inactive.
pub const SUBSCRIPTION_INACTIVE_KEY: &str = "keystone_subscription_inactive";

/// Every storage key owned by the session manager. Logout removes the whole
/// set; no other module may write these keys.
pub const SESSION_KEYS: [&str; 6] = [
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    LOGGED_IN_KEY,
    CURRENT_USER_KEY,
    EXPIRY_WARNING_KEY,
    SUBSCRIPTION_INACTIVE_KEY,
];

/// Session lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session; anonymous visitor.
    #[default]
    LoggedOut,
    /// Persisted session found; identity and entitlement checks in flight.
    Authenticating,
    /// Identity confirmed and subscription entitled.
    Active,
    /// Subscription observed inactive; forced logout is imminent.
    SubscriptionExpired,
}

/// Transient warning recorded while the subscription is expiring soon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpiryWarning {
    /// Days remaining until expiry as reported by the last poll.
    pub days: i64,
    /// ISO 8601 end date, if the backend reported one.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Milliseconds since the Unix epoch when this warning was captured.
    pub captured_at_ms: i64,
}

/// Shared session state provided as a Leptos context signal.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<CurrentUser>,
    /// Last observed subscription status; compared against each poll so an
    /// unchanged status never triggers a state update.
    pub subscription: Option<SubscriptionStatus>,
    pub warning: Option<ExpiryWarning>,
    /// True until the startup identity/entitlement resolution completes.
    pub loading: bool,
}

/// Why a session ended; carried to the login page as a query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutCause {
    /// Explicit user-initiated logout.
    UserAction,
    /// Forced logout after the subscription was observed inactive.
    SubscriptionExpired,
    /// The persisted session failed identity validation.
    InvalidSession,
}

impl LogoutCause {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserAction => "user",
            Self::SubscriptionExpired => "subscription_expired",
            Self::InvalidSession => "invalid_session",
        }
    }
}

/// Failure modes of the detailed subscription status check.
///
/// `CheckFailed` and `NotConfigured` are deliberately distinct: a transport
/// failure forfeits the session, while an account that never configured
/// billing falls back to the basic `is_active` flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Network, transport, or decode failure during the status call.
    CheckFailed(String),
    /// The user record carries no `company.subscription.id`.
    NotConfigured,
}

/// Outcome of evaluating one subscription poll.
#[derive(Clone, Debug, PartialEq)]
pub enum PollDecision {
    /// Observed status identical to the cached one; touch nothing.
    Unchanged,
    /// Still entitled, but the observed fields changed.
    Update {
        status: SubscriptionStatus,
        warning: Option<ExpiryWarning>,
    },
    /// Not entitled; transition to `SubscriptionExpired` and force logout.
    Expire,
}

/// Persist a fresh login: both tokens plus the logged-in flag.
///
/// Identity is intentionally not fetched here; that belongs to the
/// `Authenticating` transition on the next startup pass.
pub fn persist_login(store: &dyn SessionStore, tokens: &SessionTokens) {
    store.set(ACCESS_TOKEN_KEY, &tokens.access_token);
    store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
    store.set(LOGGED_IN_KEY, "true");
}

/// Determine the startup phase from persisted artifacts.
///
/// Only a logged-in flag paired with an access token warrants the
/// `Authenticating` transition; anything less is an anonymous visitor.
pub fn restore_phase(store: &dyn SessionStore) -> SessionPhase {
    let flagged = store.get(LOGGED_IN_KEY).as_deref() == Some("true");
    let has_token = store.get(ACCESS_TOKEN_KEY).is_some_and(|t| !t.is_empty());
    if flagged && has_token {
        SessionPhase::Authenticating
    } else {
        SessionPhase::LoggedOut
    }
}

/// Load the persisted user record, if any.
pub fn restore_user(store: &dyn SessionStore) -> Option<CurrentUser> {
    crate::util::storage::load_json(store, CURRENT_USER_KEY)
}

/// Persist the current-user record, skipping the write when the serialized
/// form is unchanged so an idempotent re-check never rewrites storage.
pub fn persist_current_user(store: &dyn SessionStore, user: &CurrentUser) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    if store.get(CURRENT_USER_KEY).as_deref() != Some(raw.as_str()) {
        store.set(CURRENT_USER_KEY, &raw);
    }
}

/// Remove every session-owned storage key as a set.
pub fn clear_session(store: &dyn SessionStore) {
    for key in SESSION_KEYS {
        store.remove(key);
    }
}

/// Build the same-origin login redirect carrying the logout cause and a
/// cache-busting timestamp.
pub fn logout_redirect_url(cause: LogoutCause, now_ms: i64) -> String {
    format!("/login?reason={}&ts={now_ms}", cause.as_str())
}

/// The billing subscription id on the user record, when configured.
pub fn subscription_id(user: &CurrentUser) -> Option<&str> {
    user.company.subscription.as_ref()?.id.as_deref()
}

/// Collapse a detailed-check outcome into an observed status.
///
/// `NotConfigured` synthesizes a status from the basic `is_active` flag on
/// the user snapshot (no expiry computation). A missing subscription record
/// altogether counts as inactive. `CheckFailed` yields `None`: not entitled.
pub fn observed_status(
    user: &CurrentUser,
    outcome: Result<SubscriptionStatus, SubscriptionError>,
) -> Option<SubscriptionStatus> {
    match outcome {
        Ok(status) => Some(status),
        Err(SubscriptionError::NotConfigured) => {
            let snapshot = user.company.subscription.as_ref();
            Some(SubscriptionStatus {
                is_truly_active: snapshot.is_some_and(|s| s.is_active),
                end_date: snapshot.and_then(|s| s.end_date.clone()),
                is_expiring_soon: false,
                days_until_expiry: None,
            })
        }
        Err(SubscriptionError::CheckFailed(_)) => None,
    }
}

/// Derive the transient warning record from an entitled status.
pub fn derive_warning(status: &SubscriptionStatus, now_ms: i64) -> Option<ExpiryWarning> {
    if !status.is_expiring_soon {
        return None;
    }
    Some(ExpiryWarning {
        days: status.days_until_expiry.unwrap_or(0),
        end_date: status.end_date.clone(),
        captured_at_ms: now_ms,
    })
}

/// Evaluate one poll against the cached status.
pub fn evaluate_poll(
    previous: Option<&SubscriptionStatus>,
    observed: Option<SubscriptionStatus>,
    now_ms: i64,
) -> PollDecision {
    let Some(status) = observed else {
        return PollDecision::Expire;
    };
    if !status.is_truly_active {
        return PollDecision::Expire;
    }
    if previous == Some(&status) {
        return PollDecision::Unchanged;
    }
    let warning = derive_warning(&status, now_ms);
    PollDecision::Update { status, warning }
}

/// Apply a poll decision to in-memory state and storage.
///
/// Returns `true` when the session must be forcibly terminated; the caller
/// owns the actual clear + redirect so it happens exactly once.
pub fn apply_decision(state: &mut SessionState, store: &dyn SessionStore, decision: PollDecision) -> bool {
    match decision {
        PollDecision::Unchanged => false,
        PollDecision::Update { status, warning } => {
            match &warning {
                Some(w) => crate::util::storage::save_json(store, EXPIRY_WARNING_KEY, w),
                None => store.remove(EXPIRY_WARNING_KEY),
            }
            store.remove(SUBSCRIPTION_INACTIVE_KEY);
            state.subscription = Some(status);
            state.warning = warning;
            false
        }
        PollDecision::Expire => {
            store.set(SUBSCRIPTION_INACTIVE_KEY, "true");
            state.phase = SessionPhase::SubscriptionExpired;
            true
        }
    }
}

/// Resolution of the startup `Authenticating` pass.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthResolution {
    /// Identity confirmed and subscription entitled.
    Active {
        user: CurrentUser,
        status: SubscriptionStatus,
        warning: Option<ExpiryWarning>,
    },
    /// Session is invalid or not entitled; force logout with this cause.
    Expired(LogoutCause),
}

/// Resolve the startup identity + entitlement pass.
///
/// A missing identity invalidates the persisted session outright; an
/// inactive or unverifiable subscription expires it.
pub fn resolve_authentication(
    identity: Option<CurrentUser>,
    outcome: Result<SubscriptionStatus, SubscriptionError>,
    now_ms: i64,
) -> AuthResolution {
    let Some(user) = identity else {
        return AuthResolution::Expired(LogoutCause::InvalidSession);
    };
    let Some(status) = observed_status(&user, outcome) else {
        return AuthResolution::Expired(LogoutCause::SubscriptionExpired);
    };
    if !status.is_truly_active {
        return AuthResolution::Expired(LogoutCause::SubscriptionExpired);
    }
    let warning = derive_warning(&status, now_ms);
    AuthResolution::Active { user, status, warning }
}
