//! Resolution of the project list from the command line

use anyhow::{Context, Result};
use std::path::Path;

/// Project keys in processing order.
///
/// When the first argument names an existing file, its lines come first
/// (blank lines and `#` comments skipped), followed by any further
/// arguments. Otherwise every argument is a literal key.
pub fn resolve_projects(args: &[String]) -> Result<Vec<String>> {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Vec::new());
    };

    let path = Path::new(first);
    if !path.is_file() {
        return Ok(args.to_vec());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read project list {}", path.display()))?;
    let mut projects = parse_project_list(&contents);
    projects.extend(rest.iter().cloned());
    Ok(projects)
}

pub fn parse_project_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
