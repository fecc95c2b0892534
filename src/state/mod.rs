//! Shared client state provided as Leptos context signals.
//!
//! ARCHITECTURE
//! ============
//! Each module is a plain struct provided as an `RwSignal` from the app
//! root; setters on the signal are the only mutation path. `session` is the
//! one stateful mechanism with temporal logic — everything else is fetched
//! data plus filter selections.

pub mod campaigns;
pub mod deals;
pub mod leads;
pub mod properties;
pub mod reports;
pub mod services;
pub mod session;
pub mod ui;
