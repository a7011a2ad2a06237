//! Entry point tying configuration, roots and the artifact service together

use crate::{
    config::Settings,
    error::Result,
    interfaces::Notifier,
    project::find_project_file,
    registry::RootRegistry,
    resolver::PathResolver,
    services::DgtClient,
    token::{ColumnRange, extract},
    utils::absolutize,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Owns the current configuration snapshot.
///
/// [`Engine::reload`] swaps the whole snapshot; resolutions borrow it
/// immutably, so a reload can never interleave with one.
pub struct Engine {
    settings: Settings,
    registry: RootRegistry,
    artifacts: DgtClient,
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        let registry = RootRegistry::load(&settings);
        let artifacts = DgtClient::from_settings(&settings);
        Self {
            settings,
            registry,
            artifacts,
        }
    }

    /// Discover settings the way the CLI does and build an engine from them.
    pub fn discover(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        Ok(Self::new(Settings::discover(explicit, start_path)?))
    }

    pub fn reload(&mut self, settings: Settings) {
        debug!("Reloading configuration");
        *self = Self::new(settings);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &RootRegistry {
        &self.registry
    }

    pub fn resolver<'a>(&'a self, notifier: &'a dyn Notifier) -> PathResolver<'a> {
        PathResolver::new(&self.registry, notifier).with_artifact_index(&self.artifacts)
    }

    pub async fn resolve(
        &self,
        token: &str,
        active_context: Option<&str>,
        notifier: &dyn Notifier,
    ) -> Option<PathBuf> {
        self.resolver(notifier).resolve(token, active_context).await
    }

    /// Extract the token under `range` in `line`, then resolve it.
    pub async fn resolve_selection(
        &self,
        line: &str,
        range: ColumnRange,
        active_context: Option<&str>,
        notifier: &dyn Notifier,
    ) -> Option<PathBuf> {
        let token = extract(line, range);
        debug!("Selection {:?} yields token {:?}", range, token);
        self.resolve(&token, active_context, notifier).await
    }

    /// Project file nearest to whatever `token` resolves to.
    pub async fn project_file(
        &self,
        token: &str,
        active_context: Option<&str>,
        max_depth: usize,
        notifier: &dyn Notifier,
    ) -> Option<PathBuf> {
        let resolved = self.resolve(token, active_context, notifier).await?;
        find_project_file(&resolved, max_depth).await
    }

    /// Directory of the root that should be tried first, if any.
    pub async fn active_root(
        &self,
        active_context: Option<&str>,
        notifier: &dyn Notifier,
    ) -> Option<PathBuf> {
        let name = self
            .registry
            .active_root_name(active_context, notifier)
            .await?;
        let root = self.registry.resolve_root(name).await?;
        Some(absolutize(&root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::RecordingNotifier;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_resolve_selection_and_reload() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::create_dir_all(second.path().join("pkg")).unwrap();
        fs::write(second.path().join("pkg/App.csproj"), "").unwrap();
        fs::write(second.path().join("pkg/lib.cs"), "").unwrap();

        let mut engine = Engine::new(Settings {
            default_path: Some(first.path().display().to_string()),
            ..Default::default()
        });
        let notifier = RecordingNotifier::new();
        let line = "error in pkg/lib.cs(12,4): missing ;";

        assert_eq!(
            engine
                .resolve_selection(line, ColumnRange::cursor(12), None, &notifier)
                .await,
            None
        );

        engine.reload(Settings {
            paths: format!("{};{}", first.path().display(), second.path().display()),
            default_path: Some(first.path().display().to_string()),
            ..Default::default()
        });

        assert_eq!(
            engine
                .resolve_selection(line, ColumnRange::cursor(12), None, &notifier)
                .await,
            Some(second.path().join("pkg/lib.cs"))
        );
        assert_eq!(
            engine.project_file("pkg/lib.cs", None, 0, &notifier).await,
            Some(second.path().join("pkg/App.csproj"))
        );
        assert_eq!(
            engine.active_root(None, &notifier).await,
            Some(first.path().to_path_buf())
        );
        assert!(notifier.is_empty());
    }
}
