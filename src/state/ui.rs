//! Local UI chrome state (theme, language, drawers, modals).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`leads`,
//! `deals`, ...) so list views and dialogs can evolve independently of
//! fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Display language for the chrome. String content itself is a lookup
/// concern outside this crate; state only tracks the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("ar") { Self::Ar } else { Self::En }
    }
}

/// UI state for theme, language, and which drawer/modal is open.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub language: Language,
    /// Filter drawer visibility for the active list view.
    pub filter_drawer_open: bool,
    /// Lead id currently opened for editing, if the lead form modal is up.
    pub editing_lead_id: Option<String>,
    /// True while the create-lead form modal is up.
    pub creating_lead: bool,
    /// Entity id pending delete confirmation, if the confirm dialog is up.
    pub confirm_delete_id: Option<String>,
}

impl UiState {
    /// Close every drawer and modal. Pages call this on entry so overlays
    /// never leak across routes.
    pub fn close_overlays(&mut self) {
        self.filter_drawer_open = false;
        self.editing_lead_id = None;
        self.creating_lead = false;
        self.confirm_delete_id = None;
    }
}
