use crate::config::IgnoreConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Relative path prefixes excluded from manifest discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreList {
    entries: Vec<String>,
}

impl IgnoreList {
    pub fn new(entries: Vec<String>) -> Self {
        IgnoreList { entries }
    }

    /// Read the ignore file from `root`, falling back to the configured defaults
    /// when it does not exist.
    pub fn load(root: &Path, config: &IgnoreConfig) -> Result<Self> {
        let path = root.join(&config.file);
        if !path.is_file() {
            return Ok(IgnoreList::new(config.defaults.clone()));
        }

        tracing::debug!("Reading ignore list from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Ok(IgnoreList::parse(&content))
    }

    /// One entry per line; blank lines and `#` comments are dropped.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        IgnoreList { entries }
    }

    /// Plain prefix match against the path relative to the project root
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| relative_path.starts_with(entry.as_str()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
