//! Tokens that exist relative to the working directory
//!
//! Kept in its own test binary: it changes the process working directory.

use quickcd_core::actions::cd_target;
use quickcd_core::{Engine, RecordingNotifier, Settings, find_project_file};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_bare_file_in_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("proj");
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join("App.csproj"), "").unwrap();
    fs::write(project.join("src/lib.cs"), "").unwrap();
    std::env::set_current_dir(project.join("src")).unwrap();

    // Read back so symlinked temp dirs compare equal.
    let cwd = std::env::current_dir().unwrap();
    let project_file = cwd.parent().unwrap().join("App.csproj");

    let engine = Engine::new(Settings::default());
    let notifier = RecordingNotifier::new();

    let resolved = engine.resolve("lib.cs", None, &notifier).await.unwrap();
    assert!(resolved.is_absolute());
    assert_eq!(resolved, cwd.join("lib.cs"));
    assert_eq!(cd_target(&resolved).await, cwd);

    assert_eq!(
        find_project_file(&resolved, 3).await,
        Some(project_file.clone())
    );
    assert_eq!(
        engine.project_file("lib.cs", None, 3, &notifier).await,
        Some(project_file.clone())
    );
    assert_eq!(
        engine.project_file("./lib.cs", None, 0, &notifier).await,
        None
    );

    // Relative inputs climb past the working directory too.
    assert_eq!(
        find_project_file(std::path::Path::new("lib.cs"), 1).await,
        Some(project_file)
    );
    assert!(notifier.is_empty());
}
