//! Stable counter-based aliases for component paths and project keys

use std::collections::HashMap;
use std::path::Path;

/// Maps component paths to `file_<n>.<ext>` aliases for one run.
///
/// Numbering is first-seen-wins starting at 1, and a path always maps to the
/// alias it was given first. A disabled table returns paths unchanged.
#[derive(Debug, Clone, Default)]
pub struct ComponentAliases {
    enabled: bool,
    aliases: HashMap<String, String>,
}

impl ComponentAliases {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            aliases: HashMap::new(),
        }
    }

    /// Alias for `component`, allocating the next number on first sight.
    pub fn alias(&mut self, component: &str) -> String {
        if !self.enabled {
            return component.to_string();
        }
        if let Some(existing) = self.aliases.get(component) {
            return existing.clone();
        }

        let n = self.aliases.len() + 1;
        let alias = match extension_of(component) {
            Some(ext) => format!("file_{}.{}", n, ext),
            None => format!("file_{}", n),
        };
        self.aliases.insert(component.to_string(), alias.clone());
        alias
    }

    /// Number of distinct components aliased so far
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Component keys look like `project:src/Foo.java`; only the path part
/// after the last `:` carries the extension.
fn extension_of(component: &str) -> Option<&str> {
    let path = component.rsplit(':').next().unwrap_or(component);
    Path::new(path).extension().and_then(|e| e.to_str())
}

/// Labels projects `Project <n>` in the order they are processed.
#[derive(Debug, Clone, Default)]
pub struct ProjectAliases {
    enabled: bool,
    issued: usize,
}

impl ProjectAliases {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, issued: 0 }
    }

    /// Label for the next project; call exactly once per project, in input order.
    pub fn next_label(&mut self, project: &str) -> String {
        self.issued += 1;
        if self.enabled {
            format!("Project {}", self.issued)
        } else {
            project.to_string()
        }
    }
}
