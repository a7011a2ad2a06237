pub mod project;
pub mod resolve;
pub mod roots;

pub use project::{project_command, project_path_command};
pub use resolve::{cd_command, extract_command, open_command, resolve_command, reveal_command};
pub use roots::{roots_command, terminal_command};

use anyhow::{Result, anyhow};
use quickcd_core::Engine;
use std::path::PathBuf;

use crate::cli::SelectionArgs;
use crate::display::StderrNotifier;
use crate::utils::selection_token;

/// Everything a command needs: the loaded engine, the active terminal and
/// where notices go.
pub struct Context {
    pub engine: Engine,
    pub active: Option<String>,
    pub notifier: StderrNotifier,
}

impl Context {
    pub fn new(engine: Engine, active: Option<String>) -> Self {
        Self {
            engine,
            active,
            notifier: StderrNotifier,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Resolve the selection or fail with a user-facing message.
    pub async fn resolve(&self, selection: &SelectionArgs) -> Result<PathBuf> {
        let token = selection_token(selection)?;
        if token.is_empty() {
            return Err(anyhow!("no path-like text at the cursor"));
        }

        self.engine
            .resolve(&token, self.active(), &self.notifier)
            .await
            .ok_or_else(|| anyhow!("could not resolve '{token}'"))
    }
}
