//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome, modals, and drawers while reading/writing
//! shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod filter_drawer;
pub mod lead_form;
pub mod stat_card;
pub mod subscription_banner;
pub mod toolbar;
