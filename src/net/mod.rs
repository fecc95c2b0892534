//! Networking layer: REST helpers, shared DTOs, and the session synchronizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components never issue HTTP calls directly; they go through
//! `api` so SSR stubs and error shaping stay in one place.

pub mod api;
pub mod session_sync;
pub mod types;
