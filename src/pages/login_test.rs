use super::*;

#[test]
fn reason_notice_maps_forced_logout_causes() {
    assert!(reason_notice("subscription_expired").unwrap().contains("subscription"));
    assert!(reason_notice("invalid_session").unwrap().contains("no longer valid"));
    assert_eq!(reason_notice("user"), None);
    assert_eq!(reason_notice(""), None);
}

#[test]
fn credentials_problem_requires_both_fields() {
    assert_eq!(credentials_problem("", ""), Some("Enter both email and password."));
    assert_eq!(
        credentials_problem("a@example.com", ""),
        Some("Enter both email and password.")
    );
    assert_eq!(credentials_problem("", "pw"), Some("Enter both email and password."));
}

#[test]
fn credentials_problem_checks_email_shape() {
    assert_eq!(credentials_problem("not-an-email", "pw"), Some("Enter a valid email address."));
    assert_eq!(credentials_problem("a@example.com", "pw"), None);
}
