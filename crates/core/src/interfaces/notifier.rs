//! User-facing notifications
//!
//! The resolution chain never fails loudly. Whenever something the user
//! should know about happens (missing default root, unreachable service,
//! unknown artifact) a [`Notice`] is handed to a [`Notifier`] and the chain
//! carries on with an empty result.

use std::fmt;
use std::sync::Mutex;

/// A message meant for the person driving the editor or terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Neither the active context nor `defaultPath` points at an existing directory.
    NoDefaultRoot,
    /// A named root was requested but its path does not exist.
    RootNotFound { name: String, path: String },
    /// The remote service could not be reached or answered with garbage.
    RequestFailed { url: String },
    /// The remote service answered but does not know the artifact.
    ArtifactNotFound { name: String },
    /// No configured root currently exists on disk.
    NoAvailableRoots,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoDefaultRoot => write!(f, "No usable defaultPath is configured"),
            Notice::RootNotFound { name, path } => {
                write!(f, "Root '{name}' points at '{path}', which does not exist")
            }
            Notice::RequestFailed { url } => write!(f, "Request to {url} failed"),
            Notice::ArtifactNotFound { name } => write!(f, "{name} can't be found in DGT"),
            Notice::NoAvailableRoots => write!(f, "None of the configured paths exist"),
        }
    }
}

/// Sink for [`Notice`]s.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Keeps every notice it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.notices().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
