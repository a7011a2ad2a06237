use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".quickcd.json", "quickcd.json"];

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "QUICKCD_CONFIG";

/// Artifact service used when `DGTAddress` is not configured.
pub const DEFAULT_SERVICE_ADDRESS: &str = "http://10.158.22.18";

/// Build-share prefix removed from source paths returned by the service.
pub const DEFAULT_SOURCE_PREFIX: &str = "//redmond/exchange/build/substrate/version/Sources/";

/// Command sent to a freshly created terminal; `{dir}` is the root directory.
pub const DEFAULT_TERMINAL_INIT: &str =
    r"SET INETROOT={dir}&cd /d {dir}&gvfs mount&{dir}\tools\path1st\myenv.cmd";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Root directories separated by `;`
    #[serde(default)]
    pub paths: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_path: Option<String>,

    /// Base URL of the artifact service
    #[serde(
        rename = "DGTAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dgt_address: Option<String>,

    /// Named roots, typically one per terminal name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub roots: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_init: Option<String>,
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load settings from `explicit`, else from `$QUICKCD_CONFIG`, else from
    /// the nearest config file above `start_path`. Nothing found yields the
    /// default (empty) settings.
    pub fn discover(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {:?}", path);
            return Self::load_from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            let path = PathBuf::from(path);
            tracing::debug!("Loading config from ${}: {:?}", CONFIG_ENV_VAR, path);
            return Self::load_from_file(&path);
        }

        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Found config at {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No config found above {:?}, using defaults", start_path);
                Ok(Self::default())
            }
        }
    }

    pub fn service_address(&self) -> &str {
        non_empty(self.dgt_address.as_deref()).unwrap_or(DEFAULT_SERVICE_ADDRESS)
    }

    pub fn source_prefix(&self) -> &str {
        non_empty(self.source_prefix.as_deref()).unwrap_or(DEFAULT_SOURCE_PREFIX)
    }

    pub fn terminal_init(&self) -> &str {
        non_empty(self.terminal_init.as_deref()).unwrap_or(DEFAULT_TERMINAL_INIT)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
