use super::*;

#[test]
fn user_role_deserializes_case_variants() {
    let owner: UserRole = serde_json::from_str("\"owner\"").unwrap();
    assert_eq!(owner, UserRole::Owner);
    let unknown: UserRole = serde_json::from_str("\"superadmin\"").unwrap();
    assert_eq!(unknown, UserRole::Employee);
}

#[test]
fn user_role_normalize_collapses_unknowns_to_employee() {
    assert_eq!(UserRole::normalize("Owner"), UserRole::Owner);
    assert_eq!(UserRole::normalize("  OWNER  "), UserRole::Owner);
    assert_eq!(UserRole::normalize("employee"), UserRole::Employee);
    assert_eq!(UserRole::normalize("garbage"), UserRole::Employee);
    assert_eq!(UserRole::normalize(""), UserRole::Employee);
}

#[test]
fn current_user_deserializes_without_subscription() {
    let raw = serde_json::json!({
        "id": "u-1",
        "name": "Dana",
        "email": "dana@example.com",
        "company": { "id": "c-1", "name": "Acme Realty" }
    });
    let user: CurrentUser = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, UserRole::Employee);
    assert!(user.company.subscription.is_none());
}

#[test]
fn subscription_status_defaults_optional_fields() {
    let raw = serde_json::json!({ "is_truly_active": true });
    let status: SubscriptionStatus = serde_json::from_value(raw).unwrap();
    assert!(status.is_truly_active);
    assert!(!status.is_expiring_soon);
    assert_eq!(status.days_until_expiry, None);
    assert_eq!(status.end_date, None);
}

#[test]
fn company_subscription_tolerates_missing_id() {
    let raw = serde_json::json!({ "is_active": false });
    let sub: CompanySubscription = serde_json::from_value(raw).unwrap();
    assert_eq!(sub.id, None);
    assert!(!sub.is_active);
}

#[test]
fn service_item_defaults_active_to_true() {
    let raw = serde_json::json!({ "id": "s-1", "name": "Valuation" });
    let item: ServiceItem = serde_json::from_value(raw).unwrap();
    assert!(item.active);
}

#[test]
fn current_user_round_trips_through_json() {
    let user = CurrentUser {
        id: "u-2".to_owned(),
        name: "Omar".to_owned(),
        email: "omar@example.com".to_owned(),
        role: UserRole::Owner,
        company: Company {
            id: "c-2".to_owned(),
            name: "Keystone".to_owned(),
            subscription: Some(CompanySubscription {
                id: Some("sub-9".to_owned()),
                is_active: true,
                end_date: Some("2026-12-01".to_owned()),
            }),
        },
    };
    let raw = serde_json::to_string(&user).unwrap();
    let back: CurrentUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}
