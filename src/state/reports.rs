//! Dashboard report-summary state.

use crate::net::types::ReportSummary;

/// Shared dashboard summary state backed by the reports endpoint.
#[derive(Clone, Debug, Default)]
pub struct ReportsState {
    pub summary: Option<ReportSummary>,
    pub loading: bool,
    pub error: Option<String>,
}
