//! Services/products catalog state and filtering.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use crate::net::types::ServiceItem;
use crate::util::filters::{matches_query, matches_selection, unique_values};

/// Active filter selections for the services catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceFilters {
    pub category: Option<String>,
    pub search: String,
    /// When true, inactive catalog entries are hidden.
    pub active_only: bool,
}

/// Shared services catalog state backed by the REST list endpoint.
#[derive(Clone, Debug, Default)]
pub struct ServicesState {
    pub items: Vec<ServiceItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: ServiceFilters,
}

impl ServicesState {
    pub fn filtered(&self) -> Vec<ServiceItem> {
        self.items
            .iter()
            .filter(|s| {
                (!self.filters.active_only || s.active)
                    && matches_selection(s.category.as_deref(), self.filters.category.as_deref())
                    && matches_query(&s.name, &self.filters.search)
            })
            .cloned()
            .collect()
    }

    pub fn category_options(&self) -> Vec<String> {
        unique_values(&self.items, |s| s.category.as_deref())
    }
}
