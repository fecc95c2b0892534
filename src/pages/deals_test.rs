use super::*;

#[test]
fn pipeline_summary_reports_count_and_value() {
    assert_eq!(pipeline_summary(3, 250_000), "3 visible · 250000 total value");
    assert_eq!(pipeline_summary(0, 0), "0 visible · 0 total value");
}
