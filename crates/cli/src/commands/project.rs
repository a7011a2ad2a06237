use anyhow::{Result, anyhow};
use quickcd_core::actions::{ProjectLaunch, project_path_relative};
use quickcd_core::find_project_file;
use std::path::PathBuf;

use super::Context;
use crate::cli::SelectionArgs;

async fn locate_project(ctx: &Context, selection: &SelectionArgs, depth: usize) -> Result<PathBuf> {
    let path = ctx.resolve(selection).await?;
    find_project_file(&path, depth).await.ok_or_else(|| {
        anyhow!(
            "no project file within {} levels above {}",
            depth,
            path.display()
        )
    })
}

pub async fn project_command(
    ctx: &Context,
    selection: &SelectionArgs,
    depth: usize,
    launch: bool,
) -> Result<()> {
    let project = locate_project(ctx, selection, depth).await?;

    if launch {
        let launch = ProjectLaunch::for_project(&project)
            .ok_or_else(|| anyhow!("{} has no file name", project.display()))?;
        for line in launch.commands() {
            println!("{line}");
        }
    } else {
        println!("{}", project.display());
    }
    Ok(())
}

pub async fn project_path_command(
    ctx: &Context,
    selection: &SelectionArgs,
    depth: usize,
) -> Result<()> {
    let project = locate_project(ctx, selection, depth).await?;
    let relative = match ctx.engine.active_root(ctx.active(), &ctx.notifier).await {
        Some(root) => project_path_relative(&project, &root),
        None => project,
    };
    println!("{}", relative.display());
    Ok(())
}
