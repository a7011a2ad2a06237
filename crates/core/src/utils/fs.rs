//! Filesystem probes and lexical path helpers
//!
//! Existence is always checked live; roots and resolved paths may appear or
//! disappear between two resolutions.

use std::path::{Component, Path, PathBuf};

/// Whether anything exists at `path`.
pub async fn path_exists(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    tokio::fs::metadata(path).await.is_ok()
}

pub async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Join `relative` under `root` the way a path-join would: leading
/// separators on `relative` never escape the root, and `.`/`..` are folded.
/// A relative root is taken from the current directory.
pub fn join_root(root: &Path, relative: &str) -> PathBuf {
    let relative = relative.trim_start_matches(['/', '\\']);
    normalize(&absolutize(root).join(relative))
}

/// Anchor a relative path at the current directory. Absolute paths are
/// returned untouched.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::path::absolute(path) {
        Ok(absolute) => normalize(&absolute),
        Err(e) => {
            tracing::debug!("Cannot make {:?} absolute: {}", path, e);
            path.to_path_buf()
        }
    }
}

/// Lexically remove `.` and `..` components.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                } else if !matches!(
                    components.last(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    components.push(component);
                }
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/../../c")), PathBuf::from("/c"));
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    }

    #[test]
    fn test_join_root_keeps_leading_separators_inside_root() {
        let root = Path::new("/roots/main");
        assert_eq!(
            join_root(root, "//sources/lib/x.cs"),
            PathBuf::from("/roots/main/sources/lib/x.cs")
        );
        assert_eq!(join_root(root, "lib/../x.cs"), PathBuf::from("/roots/main/x.cs"));
    }

    #[test]
    fn test_absolutize_anchors_relative_paths() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new("a/./b.cs")), cwd.join("a/b.cs"));
        assert_eq!(absolutize(Path::new("/x/../y")), PathBuf::from("/x/../y"));
        assert_eq!(join_root(Path::new("rel"), "a.cs"), cwd.join("rel/a.cs"));
    }

    #[tokio::test]
    async fn test_existence_probes() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(path_exists(&file).await);
        assert!(!is_dir(&file).await);
        assert!(is_dir(temp_dir.path()).await);
        assert!(!path_exists(&temp_dir.path().join("missing")).await);
        assert!(!path_exists(Path::new("")).await);
    }
}
