//! quickcd-core - Resolve editor selections into filesystem paths
//!
//! This crate provides functionality to:
//! - Extract a path-like token from a cursor position in a line of text
//! - Resolve that token against a set of configured root directories
//! - Fall back to a remote artifact index for compiled binaries
//! - Locate the build-project file that owns a resolved path
pub mod actions;
pub mod config;
pub mod engine;
pub mod error;
pub mod interfaces;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod services;
pub mod token;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use interfaces::{ArtifactIndex, Notice, Notifier, RecordingNotifier};

// Re-export main API components
pub use config::Settings;
pub use engine::Engine;
pub use project::{DEFAULT_SEARCH_DEPTH, PROJECT_FILE_SUFFIX, find_project_file};
pub use registry::{DEFAULT_ROOT, RootEntry, RootRegistry, root_name};
pub use resolver::{ARTIFACT_SUFFIX, PathResolver};
pub use services::DgtClient;
pub use token::{ColumnRange, extract, extract_range, is_path_char};
