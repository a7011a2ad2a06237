//! Token to filesystem path resolution
//!
//! Resolution order, first hit wins:
//! 1. the token as given, anchored at the current directory if relative,
//! 2. the token under the active root,
//! 3. the token under every other root, in registry order,
//! 4. for compiled artifacts only, the source path reported by the
//!    [`ArtifactIndex`], retried under the roots as in 2 and 3.
//!
//! Hits are always absolute. A miss is `None`, never an error.

use crate::interfaces::{ArtifactIndex, Notifier};
use crate::registry::RootRegistry;
use crate::utils::{absolutize, join_root, path_exists};
use std::path::PathBuf;

/// Suffix of compiled artifacts that may be looked up remotely.
pub const ARTIFACT_SUFFIX: &str = ".dll";

pub struct PathResolver<'a> {
    registry: &'a RootRegistry,
    notifier: &'a dyn Notifier,
    artifacts: Option<&'a dyn ArtifactIndex>,
}

impl<'a> PathResolver<'a> {
    pub fn new(registry: &'a RootRegistry, notifier: &'a dyn Notifier) -> Self {
        Self {
            registry,
            notifier,
            artifacts: None,
        }
    }

    /// Enable the remote fallback for artifact tokens.
    pub fn with_artifact_index(mut self, index: &'a dyn ArtifactIndex) -> Self {
        self.artifacts = Some(index);
        self
    }

    pub async fn resolve(&self, token: &str, active_context: Option<&str>) -> Option<PathBuf> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let direct = PathBuf::from(token);
        if path_exists(&direct).await {
            tracing::debug!("{} exists as given", token);
            return Some(absolutize(&direct));
        }

        let active_root = self
            .registry
            .active_root_name(active_context, self.notifier)
            .await;

        if let Some(found) = self.resolve_under_roots(token, active_root).await {
            return Some(found);
        }

        if token.ends_with(ARTIFACT_SUFFIX) {
            if let Some(found) = self.resolve_artifact(token, active_root).await {
                return Some(found);
            }
        }

        tracing::debug!("{} did not resolve", token);
        None
    }

    /// Join `relative` with the active root, then with every other root.
    pub async fn resolve_under_roots(
        &self,
        relative: &str,
        active_root: Option<&str>,
    ) -> Option<PathBuf> {
        if let Some(name) = active_root {
            if let Some(found) = self.try_root(name, relative).await {
                return Some(found);
            }
        }

        for (name, _) in self.registry.iter() {
            if Some(name) == active_root {
                continue;
            }
            if let Some(found) = self.try_root(name, relative).await {
                return Some(found);
            }
        }

        None
    }

    async fn try_root(&self, name: &str, relative: &str) -> Option<PathBuf> {
        let root = self.registry.resolve_root(name).await?;
        let candidate = join_root(&root, relative);
        if path_exists(&candidate).await {
            tracing::debug!("{} found under root {}: {:?}", relative, name, candidate);
            Some(candidate)
        } else {
            None
        }
    }

    async fn resolve_artifact(&self, token: &str, active_root: Option<&str>) -> Option<PathBuf> {
        let index = self.artifacts?;
        let artifact = artifact_name(token);
        tracing::debug!("Looking up artifact {} remotely", artifact);

        let relative = index
            .locate(artifact, self.notifier)
            .await
            .filter(|r| !r.is_empty())?;
        self.resolve_under_roots(&relative, active_root).await
    }
}

/// Last path segment of `token`, splitting on either separator.
pub fn artifact_name(token: &str) -> &str {
    token.rsplit(['\\', '/']).next().unwrap_or(token)
}
