//! Named root directories
//!
//! A [`RootRegistry`] is an immutable snapshot built from [`Settings`]. It is
//! rebuilt wholesale on every configuration reload and never mutated while a
//! resolution is running. Paths are stored as configured; whether they exist
//! is checked on every lookup.

use crate::config::Settings;
use crate::interfaces::{Notice, Notifier};
use crate::utils::path_exists;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Registry key of the configured `defaultPath`.
pub const DEFAULT_ROOT: &str = "defaultPath";

static PATH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]").expect("separator pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootEntry {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootRegistry {
    roots: IndexMap<String, String>,
}

impl RootRegistry {
    /// Build the registry from settings.
    ///
    /// Segments of `paths` come first, in configuration order, keyed by
    /// [`root_name`]. Base keys (`defaultPath`, then named `roots`) follow.
    /// A key that is written twice keeps its first position and its last
    /// value.
    pub fn load(settings: &Settings) -> Self {
        let mut roots = IndexMap::new();

        for segment in settings
            .paths
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            roots.insert(root_name(segment), segment.to_string());
        }

        if let Some(default_path) = &settings.default_path {
            roots.insert(DEFAULT_ROOT.to_string(), default_path.trim().to_string());
        }

        for (name, path) in &settings.roots {
            roots.insert(name.clone(), path.trim().to_string());
        }

        tracing::debug!("Loaded {} roots: {:?}", roots.len(), roots.keys());
        Self { roots }
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Configured path for `name`, without checking the filesystem.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.roots.get(name).map(String::as_str)
    }

    /// Names and configured paths in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roots.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn entries(&self) -> Vec<RootEntry> {
        self.roots
            .iter()
            .map(|(name, path)| RootEntry {
                name: name.clone(),
                path: path.clone(),
            })
            .collect()
    }

    /// Path of root `name` if it is configured, non-empty and exists now.
    pub async fn resolve_root(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let path = self.roots.get(name).filter(|p| !p.is_empty())?;
        let path = PathBuf::from(path);
        path_exists(&path).await.then_some(path)
    }

    /// Pick the root to try before all others.
    ///
    /// The active context wins when it names an existing root; otherwise
    /// `defaultPath` is used. With neither, [`Notice::NoDefaultRoot`] is
    /// raised and `None` returned.
    pub async fn active_root_name(
        &self,
        active_context: Option<&str>,
        notifier: &dyn Notifier,
    ) -> Option<&str> {
        if let Some(name) = active_context.filter(|n| !n.is_empty()) {
            if let Some((key, _)) = self.roots.get_key_value(name) {
                if self.resolve_root(key).await.is_some() {
                    return Some(key.as_str());
                }
            }
        }

        if self.resolve_root(DEFAULT_ROOT).await.is_some() {
            return Some(DEFAULT_ROOT);
        }

        notifier.notify(Notice::NoDefaultRoot);
        None
    }

    /// Names of the roots whose path currently exists, in registry order.
    pub async fn available_roots(&self) -> Vec<&str> {
        let mut available = Vec::new();
        for name in self.roots.keys() {
            if self.resolve_root(name).await.is_some() {
                available.push(name.as_str());
            }
        }
        available
    }
}

/// Registry key for a configured path: separators become `_` and the first
/// `:` (a drive letter) is dropped, e.g. `C:\src\app` becomes `C_src_app`.
pub fn root_name(path: &str) -> String {
    PATH_SEPARATOR
        .replace_all(path.trim(), "_")
        .replacen(':', "", 1)
}
