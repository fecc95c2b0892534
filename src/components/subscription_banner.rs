//! Banner surfacing the subscription expiry warning.
//!
//! Renders only while the session carries a transient warning record; the
//! record itself is owned by the lifecycle manager and overwritten or
//! removed on every poll.

#[cfg(test)]
#[path = "subscription_banner_test.rs"]
mod subscription_banner_test;

use leptos::prelude::*;

use crate::state::session::{ExpiryWarning, SessionState};

/// Human-readable banner text for a warning record.
fn banner_message(warning: &ExpiryWarning) -> String {
    match (warning.days, warning.end_date.as_deref()) {
        (1, _) => "Your subscription expires tomorrow. Renew to keep access.".to_owned(),
        (days, Some(end)) if days > 0 => {
            format!("Your subscription expires in {days} days (on {end}). Renew to keep access.")
        }
        (days, None) if days > 0 => format!("Your subscription expires in {days} days. Renew to keep access."),
        _ => "Your subscription is about to expire. Renew to keep access.".to_owned(),
    }
}

/// Expiry warning banner; hidden while no warning is recorded.
#[component]
pub fn SubscriptionBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().warning.is_some()>
            <div class="subscription-banner" role="alert">
                {move || session.get().warning.as_ref().map(banner_message).unwrap_or_default()}
            </div>
        </Show>
    }
}
