//! Tests for configuration parsing

use sonar_report_core::config::CONFIG_FILE;
use sonar_report_core::metric::DEFAULT_METRIC_KEYS;
use sonar_report_core::ReportConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ReportConfig::default();
    assert_eq!(config.server.host, "http://localhost:9000");
    assert_eq!(config.server.branch, "main");
    assert_eq!(config.server.page_size, 500);
    assert_eq!(config.report.output, PathBuf::from("report.html"));
    assert!(config.report.template_dir.is_none());
    assert_eq!(config.report.metric_keys.len(), DEFAULT_METRIC_KEYS.len());
}

#[test]
fn test_empty_file_parses_to_defaults() {
    let config: ReportConfig = toml::from_str("").unwrap();
    assert_eq!(config.server.branch, "main");
    assert_eq!(config.report.metric_keys[0], "ncloc");
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let toml_str = r#"
[server]
host = "https://sonar.internal"
page_size = 100

[report]
template_dir = "templates"
metric_keys = ["ncloc", "coverage"]
"#;

    let config: ReportConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.host, "https://sonar.internal");
    assert_eq!(config.server.page_size, 100);
    assert_eq!(config.server.branch, "main");
    assert_eq!(config.report.template_dir, Some(PathBuf::from("templates")));
    assert_eq!(config.report.metric_keys, vec!["ncloc", "coverage"]);
    assert_eq!(config.report.output, PathBuf::from("report.html"));
}

#[test]
fn test_find_and_load_walks_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        "[server]\nbranch = \"develop\"\n",
    )
    .unwrap();
    let nested = dir.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    let config = ReportConfig::find_and_load(&nested).unwrap();
    assert_eq!(config.server.branch, "develop");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, "[server]\npage_size = \"lots\"\n").unwrap();

    assert!(ReportConfig::from_file(&path).is_err());
    assert!(ReportConfig::find_and_load(dir.path()).is_err());
}
