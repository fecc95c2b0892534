//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so identity and
//! list fetch failures degrade UI behavior without crashing hydration. The
//! session manager decides what a failed check means; this module only
//! reports it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Campaign, CurrentUser, Deal, Lead, LeadDraft, Property, ReportSummary, ServiceItem, SessionTokens,
    SubscriptionStatus,
};

#[cfg(any(test, feature = "hydrate"))]
fn subscription_status_endpoint(subscription_id: &str) -> String {
    format!("/api/billing/subscriptions/{subscription_id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_endpoint(lead_id: &str) -> String {
    format!("/api/leads/{lead_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Authenticate with credentials via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string when the HTTP request fails or the backend
/// rejects the credentials.
pub async fn login(email: &str, password: &str) -> Result<SessionTokens, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<SessionTokens>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Best-effort server-side session teardown via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if the session is invalid or on the server.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CurrentUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the detailed entitlement status for a billing subscription.
///
/// # Errors
///
/// Returns an error string on transport, status, or decode failure; the
/// session manager maps it to `SubscriptionError::CheckFailed`.
pub async fn check_subscription_status(subscription_id: &str) -> Result<SubscriptionStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = subscription_status_endpoint(subscription_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("subscription status", resp.status()));
        }
        resp.json::<SubscriptionStatus>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = subscription_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all leads visible to the current user.
pub async fn list_leads() -> Result<Vec<Lead>, String> {
    fetch_list("/api/leads", "leads").await
}

/// Create a lead via `POST /api/leads`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_lead(draft: &LeadDraft) -> Result<Lead, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/leads")
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("lead create", resp.status()));
        }
        resp.json::<Lead>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Update a lead via `PATCH /api/leads/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_lead(lead_id: &str, draft: &LeadDraft) -> Result<Lead, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = lead_endpoint(lead_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("lead update", resp.status()));
        }
        resp.json::<Lead>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lead_id, draft);
        Err("not available on server".to_owned())
    }
}

/// Delete a lead via `DELETE /api/leads/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_lead(lead_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = lead_endpoint(lead_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("lead delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all deals for the pipeline view.
pub async fn list_deals() -> Result<Vec<Deal>, String> {
    fetch_list("/api/deals", "deals").await
}

/// Fetch the property/unit inventory.
pub async fn list_properties() -> Result<Vec<Property>, String> {
    fetch_list("/api/properties", "properties").await
}

/// Fetch the services/products catalog.
pub async fn list_services() -> Result<Vec<ServiceItem>, String> {
    fetch_list("/api/services", "services").await
}

/// Fetch marketing campaigns.
pub async fn list_campaigns() -> Result<Vec<Campaign>, String> {
    fetch_list("/api/campaigns", "campaigns").await
}

/// Fetch the aggregated dashboard summary.
pub async fn fetch_report_summary() -> Option<ReportSummary> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/reports/summary").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ReportSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<Vec<T>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

#[cfg(not(feature = "hydrate"))]
async fn fetch_list<T>(url: &str, what: &str) -> Result<Vec<T>, String> {
    let _ = (url, what);
    Err("not available on server".to_owned())
}
