//! What each consumer action should act on once a path is resolved
//!
//! The effects themselves (typing into a terminal, opening an editor tab,
//! launching a file browser) belong to the caller. These helpers only decide
//! the target.

use crate::utils::is_dir;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory to change into: the path itself, or the directory holding it.
pub async fn cd_target(path: &Path) -> PathBuf {
    if is_dir(path).await {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}

/// File to open in the editor; directories are not opened.
pub async fn open_target(path: &Path) -> Option<PathBuf> {
    if is_dir(path).await {
        None
    } else {
        Some(path.to_path_buf())
    }
}

/// Directory to show in the platform file browser.
pub async fn reveal_target(path: &Path) -> PathBuf {
    cd_target(path).await
}

/// `cd` line for a shell, quoting paths that contain whitespace.
pub fn shell_cd_command(dir: &Path) -> String {
    let dir = dir.display().to_string();
    if dir.contains(char::is_whitespace) {
        format!("cd \"{dir}\"")
    } else {
        format!("cd {dir}")
    }
}

/// Change into the project directory, then hand the project file to the
/// shell so its associated IDE opens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLaunch {
    pub directory: PathBuf,
    pub file_name: String,
}

impl ProjectLaunch {
    pub fn for_project(project: &Path) -> Option<Self> {
        let file_name = project.file_name()?.to_string_lossy().to_string();
        let directory = project
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Some(Self {
            directory,
            file_name,
        })
    }

    /// The lines to type into the terminal, in order.
    pub fn commands(&self) -> Vec<String> {
        vec![shell_cd_command(&self.directory), self.file_name.clone()]
    }
}

/// `project` relative to `root`, or unchanged when it lies elsewhere.
pub fn project_path_relative(project: &Path, root: &Path) -> PathBuf {
    project
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| project.to_path_buf())
}

/// Render a terminal bootstrap template for root directory `dir`.
pub fn terminal_bootstrap(template: &str, dir: &str) -> String {
    template.replace("{dir}", dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TERMINAL_INIT;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_cd_and_open_targets() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "").unwrap();

        assert_eq!(cd_target(&file).await, temp_dir.path());
        assert_eq!(cd_target(temp_dir.path()).await, temp_dir.path());
        assert_eq!(reveal_target(&file).await, temp_dir.path());
        assert_eq!(open_target(&file).await, Some(file.clone()));
        assert_eq!(open_target(temp_dir.path()).await, None);
        assert_eq!(cd_target(Path::new("missing.cs")).await, PathBuf::from("."));
        assert_eq!(cd_target(Path::new("/")).await, PathBuf::from("/"));
    }

    #[test]
    fn test_shell_cd_command_quotes_spaces() {
        assert_eq!(shell_cd_command(Path::new("/src/app")), "cd /src/app");
        assert_eq!(
            shell_cd_command(Path::new("/src/my app")),
            "cd \"/src/my app\""
        );
    }

    #[test]
    fn test_project_launch() {
        let launch = ProjectLaunch::for_project(Path::new("/src/app/App.csproj")).unwrap();
        assert_eq!(launch.directory, PathBuf::from("/src/app"));
        assert_eq!(launch.commands(), vec!["cd /src/app", "App.csproj"]);

        let bare = ProjectLaunch::for_project(Path::new("App.csproj")).unwrap();
        assert_eq!(bare.directory, PathBuf::from("."));
    }

    #[test]
    fn test_project_path_relative() {
        assert_eq!(
            project_path_relative(Path::new("/src/app/App.csproj"), Path::new("/src")),
            PathBuf::from("app/App.csproj")
        );
        assert_eq!(
            project_path_relative(Path::new("/other/App.csproj"), Path::new("/src")),
            PathBuf::from("/other/App.csproj")
        );
    }

    #[test]
    fn test_terminal_bootstrap_default_template() {
        assert_eq!(
            terminal_bootstrap(DEFAULT_TERMINAL_INIT, r"C:\src"),
            r"SET INETROOT=C:\src&cd /d C:\src&gvfs mount&C:\src\tools\path1st\myenv.cmd"
        );
    }
}
