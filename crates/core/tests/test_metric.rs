mod common;

use common::{measures_payload, StubServer};
use sonar_report_core::metric::{fetch_measures, format_duration, grade};
use sonar_report_core::{normalize, MetricPolicy, ProjectMeasures};

#[test]
fn grades_truncate_instead_of_rounding() {
    assert_eq!(grade("1.0"), Some('A'));
    assert_eq!(grade("2.9"), Some('B'));
    assert_eq!(grade("3.0"), Some('C'));
    assert_eq!(grade("4.5"), Some('D'));
    assert_eq!(grade("5.0"), Some('E'));
}

#[test]
fn grades_outside_range_are_undefined() {
    assert_eq!(grade("0.5"), None);
    assert_eq!(grade("6.0"), None);
    assert_eq!(grade("n/a"), None);
}

#[test]
fn durations_use_hours_from_sixty_minutes() {
    assert_eq!(format_duration(65), "1h 5min");
    assert_eq!(format_duration(45), "45min");
    assert_eq!(format_duration(60), "1h 0min");
    assert_eq!(format_duration(0), "0min");
}

#[test]
fn policy_table_classifies_known_keys() {
    assert_eq!(MetricPolicy::for_key("reliability_rating"), MetricPolicy::Grade);
    assert_eq!(MetricPolicy::for_key("sqale_rating"), MetricPolicy::Grade);
    assert_eq!(MetricPolicy::for_key("coverage"), MetricPolicy::Percentage);
    assert_eq!(
        MetricPolicy::for_key("security_hotspots_reviewed"),
        MetricPolicy::Percentage
    );
    assert_eq!(MetricPolicy::for_key("sqale_index"), MetricPolicy::Duration);
    assert_eq!(MetricPolicy::for_key("ncloc"), MetricPolicy::Passthrough);
    assert_eq!(MetricPolicy::for_key("made_up_metric"), MetricPolicy::Passthrough);
}

#[test]
fn normalize_applies_the_policy_for_the_key() {
    assert_eq!(normalize("security_rating", "1.0"), "A");
    assert_eq!(normalize("coverage", "87.3"), "87.3%");
    assert_eq!(normalize("sqale_index", "125"), "2h 5min");
    assert_eq!(normalize("ncloc", "1200"), "1200");
}

#[test]
fn percentage_keeps_raw_text_verbatim() {
    assert_eq!(normalize("duplicated_lines_density", "3.10"), "3.10%");
}

#[test]
fn unconvertible_values_pass_through() {
    assert_eq!(normalize("reliability_rating", "9.0"), "9.0");
    assert_eq!(normalize("sqale_index", "lots"), "lots");
}

#[test]
fn measures_use_catalog_names_and_fall_back_to_keys() {
    let payload = measures_payload(
        &[("ncloc", "100"), ("reliability_rating", "1.0"), ("custom", "x")],
        &[("ncloc", "Lines of Code"), ("reliability_rating", "Reliability Rating")],
    );
    let measures = ProjectMeasures::from_response(payload).unwrap();
    let rendered: Vec<String> = measures.normalized().iter().map(|m| m.to_string()).collect();
    assert_eq!(
        rendered,
        ["Lines of Code: 100", "Reliability Rating: A", "custom: x"]
    );
}

#[test]
fn raw_values_stay_numeric_for_roll_up() {
    let payload = measures_payload(&[("ncloc", "100"), ("complexity", "12.0")], &[]);
    let measures = ProjectMeasures::from_response(payload).unwrap();
    assert_eq!(measures.raw_u64("ncloc"), Some(100));
    assert_eq!(measures.raw_u64("complexity"), Some(12));
    assert_eq!(measures.raw_u64("security_hotspots"), None);
}

#[test]
fn measures_without_value_are_skipped() {
    let payload = serde_json::json!({
        "component": {"measures": [
            {"metric": "ncloc", "value": "5"},
            {"metric": "new_bugs", "periods": [{"index": 1, "value": "0"}]}
        ]},
        "metrics": []
    });
    let measures = ProjectMeasures::from_response(payload).unwrap();
    assert_eq!(measures.measures().len(), 1);
    assert!(measures.raw("new_bugs").is_none());
}

#[test]
fn fetch_orders_measures_as_requested() {
    let server = StubServer::new().with_measures(
        "app",
        measures_payload(&[("coverage", "50.0"), ("ncloc", "10")], &[]),
    );
    let keys = vec!["ncloc".to_string(), "coverage".to_string()];
    let measures = fetch_measures(&server, "app", "main", &keys).unwrap();

    let order: Vec<&str> = measures.measures().iter().map(|m| m.key.as_str()).collect();
    assert_eq!(order, ["ncloc", "coverage"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("/api/measures/component?component=app"));
    assert!(requests[0].contains("metricKeys=ncloc,coverage"));
    assert!(requests[0].contains("additionalFields=metrics"));
}
