//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Preference store (JSON file via vimlink-runtime)
//! - Process spawner and project sync (via vimlink-runtime)
//! - Installation discovery, run once per invocation
//!
//! Command handlers receive the composed `EditorService` and delegate to it.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use vimlink_core::{
    EditorLauncher, EditorService, LaunchMode, MemoryPreferenceStore, PreferenceStore,
    ProcessSpawner, ProjectPaths, ProjectSync, SyncError,
};
use vimlink_runtime::{CommandProjectSync, JsonPreferenceStore, SystemSpawner, discover};

use crate::commands::Commands;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Host project root.
    pub project_root: PathBuf,
    /// Explicit preference file; `None` uses the data root.
    pub prefs_file: Option<PathBuf>,
    /// Command line that regenerates IDE project files.
    pub sync_command: Option<String>,
    /// How the primary editor process is launched.
    pub launch_mode: LaunchMode,
}

impl CliConfig {
    /// Build the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = match &cli.project_root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Cannot determine current directory")?,
        };
        let launch_mode = match &cli.command {
            Some(Commands::Open { wait: true, .. }) => LaunchMode::WaitForExit,
            _ => LaunchMode::Detached,
        };
        Ok(Self {
            project_root,
            prefs_file: cli.prefs_file.clone(),
            sync_command: cli.sync_command.clone(),
            launch_mode,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    service: EditorService,
    prefs_location: Option<PathBuf>,
}

impl CliContext {
    /// Access the editor service.
    pub const fn service(&self) -> &EditorService {
        &self.service
    }

    /// Where preferences are persisted, if on disk.
    pub fn prefs_location(&self) -> Option<&PathBuf> {
        self.prefs_location.as_ref()
    }
}

/// Stands in for the host's project generator when none is configured.
struct UnconfiguredProjectSync;

impl ProjectSync for UnconfiguredProjectSync {
    fn regenerate_project_files(&self) -> Result<(), SyncError> {
        Err(SyncError::NotConfigured)
    }
}

/// Bootstrap the CLI application.
///
/// Preference storage that cannot be located degrades to an in-memory
/// store for this invocation.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let (store, prefs_location) = match config.prefs_file {
        Some(path) => (
            Arc::new(JsonPreferenceStore::new(&path)) as Arc<dyn PreferenceStore>,
            Some(path),
        ),
        None => match JsonPreferenceStore::open_default() {
            Ok(store) => {
                let path = store.path().to_path_buf();
                (Arc::new(store) as Arc<dyn PreferenceStore>, Some(path))
            }
            Err(e) => {
                warn!("Preferences will not be saved: {e}");
                (
                    Arc::new(MemoryPreferenceStore::new()) as Arc<dyn PreferenceStore>,
                    None,
                )
            }
        },
    };

    let spawner: Arc<dyn ProcessSpawner> = Arc::new(SystemSpawner::new());
    let sync: Arc<dyn ProjectSync> = config
        .sync_command
        .as_deref()
        .and_then(|line| CommandProjectSync::from_command_line(line, spawner.clone()))
        .map_or_else(
            || Arc::new(UnconfiguredProjectSync) as Arc<dyn ProjectSync>,
            |sync| Arc::new(sync) as Arc<dyn ProjectSync>,
        );

    let installations = discover();
    debug!("Project root: {}", config.project_root.display());

    let service = EditorService::new(
        store,
        EditorLauncher::new(spawner).with_mode(config.launch_mode),
        sync,
        ProjectPaths::from_project_root(&config.project_root),
    )
    .with_installations(installations);

    Ok(CliContext {
        service,
        prefs_location,
    })
}
