//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch-on-activate, filter
//! wiring) and delegates rendering details to `components`.

pub mod campaigns;
pub mod dashboard;
pub mod deals;
pub mod leads;
pub mod login;
pub mod properties;
pub mod services;
pub mod settings;
