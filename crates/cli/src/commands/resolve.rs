use anyhow::{Context as _, Result, bail};
use quickcd_core::actions::{cd_target, open_target, reveal_target, shell_cd_command};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use super::Context;
use crate::cli::SelectionArgs;
use crate::utils::selection_token;

pub fn extract_command(selection: &SelectionArgs) -> Result<()> {
    let token = selection_token(selection)?;
    if token.is_empty() {
        bail!("no path-like text at the cursor");
    }
    println!("{token}");
    Ok(())
}

pub async fn resolve_command(ctx: &Context, selection: &SelectionArgs, json: bool) -> Result<()> {
    let path = ctx.resolve(selection).await?;

    if json {
        let output = serde_json::json!({
            "token": selection_token(selection)?,
            "path": path,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

pub async fn cd_command(ctx: &Context, selection: &SelectionArgs) -> Result<()> {
    let path = ctx.resolve(selection).await?;
    let dir = cd_target(&path).await;
    println!("{}", shell_cd_command(&dir));
    Ok(())
}

pub async fn open_command(ctx: &Context, selection: &SelectionArgs) -> Result<()> {
    let path = ctx.resolve(selection).await?;
    match open_target(&path).await {
        Some(file) => {
            println!("{}", file.display());
            Ok(())
        }
        None => bail!("{} is a directory", path.display()),
    }
}

pub async fn reveal_command(ctx: &Context, selection: &SelectionArgs, dry_run: bool) -> Result<()> {
    let path = ctx.resolve(selection).await?;
    let dir = reveal_target(&path).await;

    if dry_run {
        println!("{}", dir.display());
        return Ok(());
    }

    let opener = file_browser();
    info!("Revealing {} with {}", dir.display(), opener);
    spawn_file_browser(opener, &dir)
}

fn file_browser() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn spawn_file_browser(opener: &str, dir: &Path) -> Result<()> {
    let child = Command::new(opener)
        .arg(dir)
        .spawn()
        .with_context(|| format!("Failed to execute: {} {}", opener, dir.display()))?;
    debug!("Started {} (pid {})", opener, child.id());
    Ok(())
}
