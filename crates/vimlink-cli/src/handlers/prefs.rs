//! `prefs` handler.
//!
//! Renders the preference view and applies edits field by field; each
//! field is persisted as soon as it is set.

use anyhow::Result;
use vimlink_core::{NoticeLevel, PreferenceField};

use crate::bootstrap::CliContext;
use crate::commands::PrefsCommand;
use crate::error::CliError;

/// Execute a prefs subcommand.
pub fn execute(ctx: &CliContext, command: PrefsCommand) -> Result<()> {
    match command {
        PrefsCommand::Show => show(ctx),
        PrefsCommand::Set {
            editor_path,
            server_name,
            force_foreground,
            generate_project,
            path_mode,
            extra_commands,
            extensions,
        } => {
            let prefs = ctx.service().preferences();
            let mut changed = Vec::new();

            if let Some(path) = editor_path {
                ctx.service()
                    .set_active_installation(&path)
                    .map_err(CliError::from)?;
                changed.push(PreferenceField::EditorPath);
            }
            if let Some(name) = server_name {
                if name.trim().is_empty() {
                    return Err(CliError::Arguments("server name cannot be empty".into()).into());
                }
                prefs.set_server_name(&name).map_err(storage)?;
                changed.push(PreferenceField::ServerName);
            }
            if let Some(enabled) = force_foreground {
                prefs.set_force_foreground(enabled).map_err(storage)?;
                changed.push(PreferenceField::ForceForeground);
            }
            if let Some(enabled) = generate_project {
                prefs.set_generate_aux_project(enabled).map_err(storage)?;
                changed.push(PreferenceField::GenerateAuxProject);
            }
            if let Some(mode) = path_mode {
                prefs.set_path_mode(mode).map_err(storage)?;
                changed.push(PreferenceField::PathMode);
            }
            if let Some(commands) = extra_commands {
                prefs.set_extra_commands(&commands).map_err(storage)?;
                changed.push(PreferenceField::ExtraCommands);
            }
            if let Some(list) = extensions {
                prefs.set_code_extensions(&list).map_err(storage)?;
                changed.push(PreferenceField::CodeExtensions);
            }

            if changed.is_empty() {
                println!("No preferences provided. Use --help to see available options.");
                return Ok(());
            }
            for field in changed {
                println!("✓ Updated {}", field.label());
            }
            print_notices(ctx);
            Ok(())
        }
        PrefsCommand::Reset { field } => {
            let prefs = ctx.service().preferences();
            match field {
                Some(field) => {
                    prefs.reset(field).map_err(storage)?;
                    println!("✓ Reset {} to default", field.label());
                }
                None => {
                    prefs.reset_all().map_err(storage)?;
                    println!("✓ All preferences reset to defaults");
                }
            }
            Ok(())
        }
    }
}

fn show(ctx: &CliContext) -> Result<()> {
    let view = ctx.service().preferences_ui_render();
    match ctx.prefs_location() {
        Some(path) => println!("Preferences ({}):", path.display()),
        None => println!("Preferences (not persisted):"),
    }

    let label_width = view
        .rows
        .iter()
        .map(|row| row.field.label().len())
        .max()
        .unwrap_or(0);
    for row in &view.rows {
        println!("  {:<label_width$}  {}", row.field.label(), row.value);
        println!("  {:<label_width$}  {}", "", row.field.help());
    }
    print_notices(ctx);
    Ok(())
}

fn print_notices(ctx: &CliContext) {
    for notice in ctx.service().preferences_ui_render().notices {
        match notice.level {
            NoticeLevel::Info => println!("info: {}", notice.message),
            NoticeLevel::Warning => println!("warning: {}", notice.message),
        }
    }
}

fn storage(err: vimlink_core::RepositoryError) -> CliError {
    CliError::Storage(err.to_string())
}
