use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

/// Top-level configuration for issuedeck.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repository the dashboard mirrors.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Category tabs, each backed by a reserved label name. The built-in
    /// "all" tab is not listed here.
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,

    /// Path to the weekly plan file (default: "plan.yaml").
    #[serde(default = "default_plan_file")]
    #[schemars(default = "default_plan_file")]
    pub plan_file: String,
}

/// Repository coordinates. The API token comes from `GITHUB_TOKEN`, never
/// from the config file.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub repo: String,
}

/// One category tab. `label_name` is the reserved label that marks an issue
/// as belonging to this category.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Stable id used on the command line (e.g. "backend").
    pub id: String,

    /// Display name (e.g. "Backend").
    pub label: String,

    /// Reserved label name marking membership (e.g. "medusa-backend").
    pub label_name: String,

    /// 6-hex-digit color for plan rendering (default: "888888").
    #[serde(default = "default_category_color")]
    #[schemars(default = "default_category_color")]
    pub color: String,
}

fn default_plan_file() -> String {
    "plan.yaml".to_string()
}

fn default_category_color() -> String {
    "888888".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from `issuedeck.ya?ml` in `ISSUEDECK_CONFIG_DIR` or the
/// current directory. Returns `Config::default()` if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let dir = match std::env::var_os("ISSUEDECK_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("."),
    };
    load_config_from_dir(&dir)
}

/// Load configuration from a specific directory. Searches for
/// issuedeck.yaml, then issuedeck.yml. Returns `Config::default()` if
/// neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["issuedeck.yaml", "issuedeck.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
