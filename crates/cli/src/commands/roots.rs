use anyhow::{Result, anyhow, bail};
use quickcd_core::actions::terminal_bootstrap;
use quickcd_core::{DEFAULT_ROOT, Notice, Notifier};

use super::Context;
use crate::display::{RootRow, format_roots};

pub async fn roots_command(ctx: &Context, json: bool) -> Result<()> {
    let registry = ctx.engine.registry();
    let active = registry
        .active_root_name(ctx.active(), &ctx.notifier)
        .await
        .map(str::to_string);

    let mut rows = Vec::with_capacity(registry.len());
    for (name, path) in registry.iter() {
        rows.push(RootRow {
            name: name.to_string(),
            path: path.to_string(),
            exists: registry.resolve_root(name).await.is_some(),
            active: active.as_deref() == Some(name),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_roots(&rows));
    }
    Ok(())
}

pub async fn terminal_command(ctx: &Context, name: Option<&str>) -> Result<()> {
    let registry = ctx.engine.registry();
    let available = registry.available_roots().await;
    if available.is_empty() {
        ctx.notifier.notify(Notice::NoAvailableRoots);
        bail!("no terminal can be created");
    }

    let name = match name {
        None | Some(DEFAULT_ROOT) => available[0],
        Some(name) if available.contains(&name) => name,
        Some(name) => {
            let path = registry
                .get(name)
                .ok_or_else(|| anyhow!("unknown root '{name}'"))?;
            ctx.notifier.notify(Notice::RootNotFound {
                name: name.to_string(),
                path: path.to_string(),
            });
            bail!("no terminal can be created for '{name}'");
        }
    };

    let dir = registry
        .get(name)
        .ok_or_else(|| anyhow!("unknown root '{name}'"))?;
    println!("{}", terminal_bootstrap(ctx.engine.settings().terminal_init(), dir));
    Ok(())
}
