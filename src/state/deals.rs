//! Deal-pipeline state and filtering for the deals page.

#[cfg(test)]
#[path = "deals_test.rs"]
mod deals_test;

use crate::net::types::Deal;
use crate::util::filters::{matches_query, matches_selection, unique_values};

/// Active filter selections for the deals list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DealFilters {
    pub stage: Option<String>,
    pub search: String,
}

/// Shared deals state backed by the REST list endpoint.
#[derive(Clone, Debug, Default)]
pub struct DealsState {
    pub items: Vec<Deal>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: DealFilters,
}

impl DealsState {
    pub fn filtered(&self) -> Vec<Deal> {
        self.items
            .iter()
            .filter(|deal| {
                matches_selection(Some(deal.stage.as_str()), self.filters.stage.as_deref())
                    && matches_query(&deal.title, &self.filters.search)
            })
            .cloned()
            .collect()
    }

    pub fn stage_options(&self) -> Vec<String> {
        unique_values(&self.items, |d| Some(d.stage.as_str()))
    }

    /// Sum of the values of the currently visible deals, in minor units.
    pub fn filtered_value_total(&self) -> i64 {
        self.filtered().iter().filter_map(|d| d.value).sum()
    }
}
