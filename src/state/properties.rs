//! Property/unit inventory state and filtering.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use crate::net::types::Property;
use crate::util::filters::{matches_query, matches_selection, unique_values};

/// Active filter selections for the property inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyFilters {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub city: Option<String>,
    pub search: String,
}

/// Shared property inventory state backed by the REST list endpoint.
#[derive(Clone, Debug, Default)]
pub struct PropertiesState {
    pub items: Vec<Property>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: PropertyFilters,
}

impl PropertiesState {
    pub fn filtered(&self) -> Vec<Property> {
        self.items
            .iter()
            .filter(|p| {
                matches_selection(Some(p.kind.as_str()), self.filters.kind.as_deref())
                    && matches_selection(Some(p.status.as_str()), self.filters.status.as_deref())
                    && matches_selection(p.city.as_deref(), self.filters.city.as_deref())
                    && matches_query(&p.title, &self.filters.search)
            })
            .cloned()
            .collect()
    }

    pub fn kind_options(&self) -> Vec<String> {
        unique_values(&self.items, |p| Some(p.kind.as_str()))
    }

    pub fn status_options(&self) -> Vec<String> {
        unique_values(&self.items, |p| Some(p.status.as_str()))
    }

    pub fn city_options(&self) -> Vec<String> {
        unique_values(&self.items, |p| p.city.as_deref())
    }
}
