#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn install_session_sync_is_noop_outside_the_browser() {
    let session = RwSignal::new(SessionState::default());
    install_session_sync(session);
    assert!(session.get_untracked().user.is_none());
}

#[test]
fn request_logout_is_noop_outside_the_browser() {
    let session = RwSignal::new(SessionState::default());
    request_logout(session);
    assert_eq!(
        session.get_untracked().phase,
        crate::state::session::SessionPhase::LoggedOut
    );
}
