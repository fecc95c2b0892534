//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionPhase, SessionState};

/// Redirect to `/login` whenever session resolution has finished and no
/// authenticated user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.phase == SessionPhase::LoggedOut {
            navigate("/login", NavigateOptions::default());
        }
    });
}
