use sonar_report_cli::projects::{parse_project_list, resolve_projects};
use tempfile::TempDir;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn literal_keys_keep_their_order() {
    let projects = resolve_projects(&args(&["zeta", "alpha", "mid"])).unwrap();
    assert_eq!(projects, ["zeta", "alpha", "mid"]);
}

#[test]
fn first_argument_file_is_read_line_by_line() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("projects.txt");
    std::fs::write(&list, "billing\n\n# legacy\n  auth  \nsearch\n").unwrap();

    let projects =
        resolve_projects(&args(&[list.to_str().unwrap(), "extra"])).unwrap();
    assert_eq!(projects, ["billing", "auth", "search", "extra"]);
}

#[test]
fn only_the_first_argument_is_treated_as_a_file() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("projects.txt");
    std::fs::write(&list, "billing\n").unwrap();

    let projects = resolve_projects(&args(&["app", list.to_str().unwrap()])).unwrap();
    assert_eq!(projects, ["app".to_string(), list.to_str().unwrap().to_string()]);
}

#[test]
fn parse_handles_crlf() {
    assert_eq!(parse_project_list("a\r\nb\r\n"), ["a", "b"]);
}

#[test]
fn empty_arguments_resolve_to_nothing() {
    assert!(resolve_projects(&[]).unwrap().is_empty());
}
