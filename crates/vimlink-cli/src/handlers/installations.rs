//! `discover`, `use` and `which` handlers.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// List discovered installations, marking the active one.
pub fn discover(ctx: &CliContext) -> Result<()> {
    let service = ctx.service();
    let installations = service.installations();
    if installations.is_empty() {
        println!("No Vim installations found.");
        println!("Set one explicitly with: vimlink use <path-to-gvim>");
        return Ok(());
    }

    let active = service.preferences().editor_path();
    let name_width = installations
        .iter()
        .map(|install| install.name.len())
        .max()
        .unwrap_or(0);
    for install in installations {
        let marker = if install.path == active { "*" } else { " " };
        println!(
            "{marker} {:<name_width$}  {}",
            install.name,
            install.path.display()
        );
    }
    Ok(())
}

/// Store `path` as the active editor.
pub fn use_installation(ctx: &CliContext, path: &Path) -> Result<()> {
    let service = ctx.service();
    service.set_active_installation(path).map_err(CliError::from)?;
    match service.resolve_installation_for_path(path) {
        Some(install) => println!("✓ Active editor: {install}"),
        None => println!(
            "✓ Active editor: {} (not a discovered installation)",
            path.display()
        ),
    }
    Ok(())
}

/// Print the installation `path` belongs to.
pub fn which(ctx: &CliContext, path: &Path) -> Result<()> {
    match ctx.service().resolve_installation_for_path(path) {
        Some(install) => {
            println!("{}", install.name);
            Ok(())
        }
        None => Err(CliError::Arguments(format!(
            "{} is not a discovered installation",
            path.display()
        ))
        .into()),
    }
}
