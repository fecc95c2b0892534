//! Lead-list state and filtering for the leads page.
//!
//! DESIGN
//! ======
//! Filters apply client-side over the already-fetched array; the drawer's
//! option lists are derived from the same array so they always match the
//! data on screen.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use crate::net::types::Lead;
use crate::util::filters::{matches_query, matches_selection, unique_values};

/// Active filter selections for the leads list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFilters {
    pub status: Option<String>,
    pub source: Option<String>,
    pub city: Option<String>,
    pub search: String,
}

impl LeadFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.source.is_none() && self.city.is_none() && self.search.trim().is_empty()
    }
}

/// Shared leads state backed by the REST list endpoint.
#[derive(Clone, Debug, Default)]
pub struct LeadsState {
    pub items: Vec<Lead>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: LeadFilters,
}

impl LeadsState {
    /// Leads passing the active filters, in fetch order.
    pub fn filtered(&self) -> Vec<Lead> {
        self.items
            .iter()
            .filter(|lead| lead_matches(lead, &self.filters))
            .cloned()
            .collect()
    }

    /// Distinct status values for the drawer's status select.
    pub fn status_options(&self) -> Vec<String> {
        unique_values(&self.items, |l| Some(l.status.as_str()))
    }

    /// Distinct source values for the drawer's source select.
    pub fn source_options(&self) -> Vec<String> {
        unique_values(&self.items, |l| l.source.as_deref())
    }

    /// Distinct city values for the drawer's city select.
    pub fn city_options(&self) -> Vec<String> {
        unique_values(&self.items, |l| l.city.as_deref())
    }

    /// Replace a lead in place after an edit, or append a created one.
    pub fn upsert(&mut self, lead: Lead) {
        if let Some(existing) = self.items.iter_mut().find(|l| l.id == lead.id) {
            *existing = lead;
        } else {
            self.items.push(lead);
        }
    }

    pub fn remove(&mut self, lead_id: &str) {
        self.items.retain(|l| l.id != lead_id);
    }
}

fn lead_matches(lead: &Lead, filters: &LeadFilters) -> bool {
    matches_selection(Some(lead.status.as_str()), filters.status.as_deref())
        && matches_selection(lead.source.as_deref(), filters.source.as_deref())
        && matches_selection(lead.city.as_deref(), filters.city.as_deref())
        && matches_query(&lead.name, &filters.search)
}
