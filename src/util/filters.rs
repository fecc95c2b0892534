//! Filter-option derivation for list views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter drawers populate their `<select>` options from already-fetched
//! arrays rather than extra endpoints, so option lists always reflect the
//! data actually on screen.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// Collect the sorted, deduplicated non-empty values of `accessor` across
/// `items`, for populating a filter `<select>`.
pub fn unique_values<T, F>(items: &[T], accessor: F) -> Vec<String>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut values: Vec<String> = items
        .iter()
        .filter_map(|item| accessor(item))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Case-insensitive substring match used by free-text search boxes.
/// An empty query matches everything.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// True when `value` satisfies an optional exact-match select filter.
/// `None` (or an empty selection) means "no filter".
pub fn matches_selection(value: Option<&str>, selection: Option<&str>) -> bool {
    match selection {
        None => true,
        Some(wanted) if wanted.is_empty() => true,
        Some(wanted) => value == Some(wanted),
    }
}
