use super::*;

fn warning(days: i64, end_date: Option<&str>) -> ExpiryWarning {
    ExpiryWarning {
        days,
        end_date: end_date.map(str::to_owned),
        captured_at_ms: 0,
    }
}

#[test]
fn banner_message_includes_days_and_date() {
    assert_eq!(
        banner_message(&warning(5, Some("2026-09-01"))),
        "Your subscription expires in 5 days (on 2026-09-01). Renew to keep access."
    );
}

#[test]
fn banner_message_handles_missing_end_date() {
    assert_eq!(
        banner_message(&warning(3, None)),
        "Your subscription expires in 3 days. Renew to keep access."
    );
}

#[test]
fn banner_message_special_cases_tomorrow() {
    assert_eq!(
        banner_message(&warning(1, Some("2026-08-28"))),
        "Your subscription expires tomorrow. Renew to keep access."
    );
}

#[test]
fn banner_message_falls_back_for_unknown_days() {
    assert_eq!(
        banner_message(&warning(0, None)),
        "Your subscription is about to expire. Renew to keep access."
    );
}
