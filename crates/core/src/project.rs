//! Build-project file lookup
//!
//! A project file is recognised by name only: anything ending in
//! [`PROJECT_FILE_SUFFIX`]. Contents are never read.

use crate::utils::{absolutize, is_dir};
use std::path::{Path, PathBuf};

pub const PROJECT_FILE_SUFFIX: &str = "proj";

/// How many parent directories are searched by default.
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Find the project file closest to `path`.
///
/// `path` itself is returned when it already carries the suffix. Otherwise
/// the directory holding `path` (or `path`, if it is a directory) is listed
/// and the first matching entry wins, in listing order. With no match the
/// parent directory is searched with one level less, until `max_depth`
/// levels above the start have been tried.
pub async fn find_project_file(path: &Path, max_depth: usize) -> Option<PathBuf> {
    if path.to_string_lossy().ends_with(PROJECT_FILE_SUFFIX) {
        return Some(path.to_path_buf());
    }

    let folder = if is_dir(path).await {
        absolutize(path)
    } else {
        match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => absolutize(Path::new(".")),
            Some(parent) => absolutize(parent),
            None => return None,
        }
    };

    if let Some(found) = first_project_file(&folder).await {
        return Some(found);
    }

    if max_depth == 0 {
        tracing::debug!("No project file found up to {:?}", folder);
        return None;
    }

    let parent = folder.parent()?;
    Box::pin(find_project_file(parent, max_depth - 1)).await
}

async fn first_project_file(folder: &Path) -> Option<PathBuf> {
    let mut entries = match tokio::fs::read_dir(folder).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot list {:?}: {}", folder, e);
            return None;
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(PROJECT_FILE_SUFFIX)
        {
            return Some(entry.path());
        }
    }

    None
}
