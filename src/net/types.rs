//! Shared DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror backend response payloads so serde
//! round-trips stay lossless and list views can remain schema-driven. Fields
//! the backend omits on older records carry `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role of the authenticated user within their company.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Company owner; full access including billing and settings.
    Owner,
    /// Regular employee account.
    #[default]
    #[serde(other)]
    Employee,
}

impl UserRole {
    /// Normalize a free-form role string from the backend or storage.
    ///
    /// Unknown values collapse to `Employee` so a malformed persisted record
    /// can never grant elevated access.
    pub fn normalize(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("owner") {
            Self::Owner
        } else {
            Self::Employee
        }
    }
}

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Company-scoped role.
    #[serde(default)]
    pub role: UserRole,
    /// The tenant company this user belongs to.
    pub company: Company,
}

/// The tenant company owning the subscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company identifier (UUID string).
    pub id: String,
    /// Company display name.
    pub name: String,
    /// Billing subscription snapshot, if one has been configured.
    #[serde(default)]
    pub subscription: Option<CompanySubscription>,
}

/// Read-only subscription snapshot nested under the company record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanySubscription {
    /// Billing subscription identifier; absent when billing was never set up.
    #[serde(default)]
    pub id: Option<String>,
    /// Basic entitlement flag, usable without a detailed status check.
    pub is_active: bool,
    /// ISO 8601 date the current period ends, if known.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Richer subscription status from `/api/billing/subscriptions/{id}/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    /// Whether the subscription is entitled right now (payment verified).
    pub is_truly_active: bool,
    /// ISO 8601 date the current period ends, if known.
    #[serde(default)]
    pub end_date: Option<String>,
    /// True when the period ends within the warning window.
    #[serde(default)]
    pub is_expiring_soon: bool,
    /// Days remaining until expiry, when the backend can compute it.
    #[serde(default)]
    pub days_until_expiry: Option<i64>,
}

/// Tokens returned by a successful credential login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// A sales lead row for the leads list view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    /// Contact phone, free-form.
    #[serde(default)]
    pub phone: Option<String>,
    /// Pipeline status label (e.g. `"new"`, `"contacted"`, `"qualified"`).
    pub status: String,
    /// Acquisition source label (e.g. `"website"`, `"referral"`).
    #[serde(default)]
    pub source: Option<String>,
    /// City of interest for real-estate verticals.
    #[serde(default)]
    pub city: Option<String>,
    /// User this lead is assigned to (UUID string), if any.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// Fields sent when creating or editing a lead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// A deal row for the pipeline list view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    /// Pipeline stage label (e.g. `"negotiation"`, `"won"`, `"lost"`).
    pub stage: String,
    /// Deal value in the company currency's minor units.
    #[serde(default)]
    pub value: Option<i64>,
    /// Lead this deal originated from (UUID string), if any.
    #[serde(default)]
    pub lead_id: Option<String>,
}

/// A property or unit row for the inventory list view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Property kind label (e.g. `"apartment"`, `"villa"`, `"office"`).
    pub kind: String,
    #[serde(default)]
    pub city: Option<String>,
    /// Listing status label (e.g. `"available"`, `"reserved"`, `"sold"`).
    pub status: String,
    /// Asking price in minor units, if listed.
    #[serde(default)]
    pub price: Option<i64>,
}

/// A service or product row for the catalog list view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    /// Category label used for filtering.
    #[serde(default)]
    pub category: Option<String>,
    /// Unit price in minor units, if priced.
    #[serde(default)]
    pub price: Option<i64>,
    /// Whether the item is currently offered.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// A marketing campaign row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    /// Delivery channel label (e.g. `"email"`, `"sms"`, `"social"`).
    pub channel: String,
    /// Lifecycle status label (e.g. `"draft"`, `"running"`, `"finished"`).
    pub status: String,
    /// Number of leads attributed to this campaign.
    #[serde(default)]
    pub leads_count: i64,
}

/// Aggregated figures for the dashboard summary cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default)]
    pub leads_total: i64,
    #[serde(default)]
    pub leads_new_this_month: i64,
    #[serde(default)]
    pub deals_open: i64,
    #[serde(default)]
    pub deals_won_this_month: i64,
    #[serde(default)]
    pub properties_available: i64,
    #[serde(default)]
    pub campaigns_running: i64,
}
