//! Seams between the resolution engine and the outside world.

pub mod artifact_index;
pub mod notifier;

pub use artifact_index::ArtifactIndex;
pub use notifier::{Notice, Notifier, RecordingNotifier};
