//! `sync` handler.

use anyhow::Result;
use vimlink_core::AssetChanges;

use crate::bootstrap::CliContext;
use crate::commands::SyncCommand;
use crate::error::CliError;

/// Execute a sync subcommand.
pub fn execute(ctx: &CliContext, command: SyncCommand) -> Result<()> {
    let service = ctx.service();
    let regenerated = match command {
        SyncCommand::All => service.resync_all(),
        SyncCommand::Changed {
            added,
            deleted,
            moved,
            moved_from,
            imported,
        } => service.resync_changed(&AssetChanges {
            added,
            deleted,
            moved,
            moved_from,
            imported,
        }),
    }
    .map_err(CliError::from)?;

    if regenerated {
        println!("✓ Project files regenerated");
    } else {
        println!("Project files unchanged");
    }
    Ok(())
}
