use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root and the user config directory.
pub const CONFIG_FILE_NAME: &str = "tagger.toml";

/// Represents the complete configuration for tagger.
///
/// Built once at startup and passed down explicitly; nothing reads ambient state.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub ignore: IgnoreConfig,
}

fn default_multi_package() -> bool {
    true
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_commit_message() -> String {
    "chore(release): v{version}".to_string()
}

/// Release behaviour: which files get rewritten and how the release is recorded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Update every manifest found below the root instead of only the root one
    #[serde(default = "default_multi_package")]
    pub multi_package: bool,

    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_changelog")]
    pub changelog: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// `{version}` is replaced with the next version
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            multi_package: default_multi_package(),
            manifest: default_manifest(),
            changelog: default_changelog(),
            tag_prefix: default_tag_prefix(),
            commit_message: default_commit_message(),
        }
    }
}

impl ReleaseConfig {
    pub fn tag_name(&self, version: &str) -> String {
        format!("{}{}", self.tag_prefix, version)
    }

    pub fn commit_message(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

fn default_ignore_file() -> String {
    ".taggerignore".to_string()
}

fn default_ignored_paths() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "dist".to_string(),
        ".git".to_string(),
    ]
}

/// Paths skipped during manifest discovery.
///
/// When `file` exists in the project root its entries replace `defaults`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IgnoreConfig {
    #[serde(default = "default_ignore_file")]
    pub file: String,

    #[serde(default = "default_ignored_paths")]
    pub defaults: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        IgnoreConfig {
            file: default_ignore_file(),
            defaults: default_ignored_paths(),
        }
    }
}

/// Resolves which configuration file applies, if any.
///
/// Order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `tagger.toml` in the project root
/// 3. `tagger.toml` in the user config directory
pub fn find_config_file(config_path: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(TaggerError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = root.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file()))
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    match find_config_file(config_path, root)? {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            let config_str = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&config_str).map_err(|e| {
                TaggerError::config(format!("Cannot parse {}: {}", path.display(), e))
            })?;
            Ok(config)
        }
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}
