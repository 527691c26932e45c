// ABOUTME: Configuration types and parsing for tabkit.yml.
// ABOUTME: Handles YAML parsing, discovery, and template generation.

use crate::error::{Error, Result};
use crate::export::ExportOptions;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "tabkit.yml";
pub const CONFIG_FILENAME_ALT: &str = "tabkit.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".tabkit/config.yml";

/// Workspace configuration. Everything is optional; operational commands
/// fall back to built-in defaults when no file is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to the tabcmd executable. Overrides search-path resolution.
    #[serde(default)]
    pub tabcmd: Option<String>,

    /// Validate TLS certificates. Disabled by default; while disabled,
    /// every call carries `--no-certcheck`.
    #[serde(default)]
    pub certcheck: bool,

    /// Default site for `login`.
    #[serde(default)]
    pub site: Option<String>,

    /// Default username for `login`. Passwords are never read from this
    /// file; pass `-p` or set `TABKIT_PASSWORD`.
    #[serde(default)]
    pub user: Option<String>,

    /// Default export options.
    #[serde(default)]
    pub export: ExportOptions,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Find and load a config file in `dir`, or fall back to defaults
    /// when none of the candidate names exist.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }
}

/// Write a commented `tabkit.yml` template into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, TEMPLATE)?;

    Ok(())
}

const TEMPLATE: &str = r#"# tabkit configuration

# Path to the tabcmd executable. Defaults to `tabcmd` on the search path;
# the TABCMD environment variable also works.
#tabcmd: /opt/tableau/tabcmd/bin/tabcmd

# Validate TLS certificates. While disabled, --no-certcheck is added to
# every call.
certcheck: false

# Defaults for `tabkit login`. The password is never read from this file;
# pass -p or set TABKIT_PASSWORD.
#site: https://tableau.example.com
#user: reporting

# Defaults for `tabkit export`.
export:
  format: csv
  page_layout: landscape
  page_size: letter
  width: 800
  height: 600
"#;
