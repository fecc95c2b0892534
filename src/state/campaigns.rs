//! Marketing campaign list state and filtering.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use crate::net::types::Campaign;
use crate::util::filters::{matches_selection, unique_values};

/// Shared campaigns state backed by the REST list endpoint.
#[derive(Clone, Debug, Default)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
    pub status_filter: Option<String>,
}

impl CampaignsState {
    pub fn filtered(&self) -> Vec<Campaign> {
        self.items
            .iter()
            .filter(|c| matches_selection(Some(c.status.as_str()), self.status_filter.as_deref()))
            .cloned()
            .collect()
    }

    pub fn status_options(&self) -> Vec<String> {
        unique_values(&self.items, |c| Some(c.status.as_str()))
    }

    /// Total leads attributed to the currently visible campaigns.
    pub fn filtered_leads_total(&self) -> i64 {
        self.filtered().iter().map(|c| c.leads_count).sum()
    }
}
