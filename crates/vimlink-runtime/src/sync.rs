//! Project-file regeneration by running an external command.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use vimlink_core::{ProcessSpawner, ProjectSync, SyncError};

/// Regenerates IDE project files by running a configured command to
/// completion.
#[derive(Clone)]
pub struct CommandProjectSync {
    program: PathBuf,
    args: Vec<String>,
    spawner: Arc<dyn ProcessSpawner>,
}

impl CommandProjectSync {
    pub fn new(program: PathBuf, args: Vec<String>, spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self {
            program,
            args,
            spawner,
        }
    }

    /// Parse a command line such as `dotnet run --project Tools/GenSln`.
    ///
    /// Uses shell quoting rules. Returns `None` for a blank command line or
    /// one with unbalanced quotes.
    pub fn from_command_line(command_line: &str, spawner: Arc<dyn ProcessSpawner>) -> Option<Self> {
        let mut tokens = shlex::split(command_line)?.into_iter();
        let program = tokens.next().filter(|p| !p.is_empty())?;
        Some(Self::new(PathBuf::from(program), tokens.collect(), spawner))
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ProjectSync for CommandProjectSync {
    fn regenerate_project_files(&self) -> Result<(), SyncError> {
        debug!(
            "Running project sync: {} {}",
            self.program.display(),
            self.args.join(" ")
        );
        self.spawner.run_to_completion(&self.program, &self.args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SystemSpawner;

    #[test]
    fn test_parse_command_line() {
        let sync = CommandProjectSync::from_command_line(
            "dotnet run --project \"Tools/Gen Sln\"",
            Arc::new(SystemSpawner::new()),
        )
        .unwrap();
        assert_eq!(sync.program(), std::path::Path::new("dotnet"));
        assert_eq!(sync.args(), ["run", "--project", "Tools/Gen Sln"]);
    }

    #[test]
    fn test_escaped_quotes_survive_parsing() {
        let sync = CommandProjectSync::from_command_line(
            r#"gen --name "say \"hi\"""#,
            Arc::new(SystemSpawner::new()),
        )
        .unwrap();
        assert_eq!(sync.program(), std::path::Path::new("gen"));
        assert_eq!(sync.args(), ["--name", "say \"hi\""]);
    }

    #[test]
    fn test_blank_or_unbalanced_command_line_is_none() {
        let spawner: Arc<dyn ProcessSpawner> = Arc::new(SystemSpawner::new());
        assert!(CommandProjectSync::from_command_line("   ", spawner.clone()).is_none());
        assert!(CommandProjectSync::from_command_line("", spawner.clone()).is_none());
        assert!(CommandProjectSync::from_command_line("gen \"unterminated", spawner).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_command_is_reported() {
        let sync = CommandProjectSync::from_command_line(
            "/bin/sh -c \"exit 4\"",
            Arc::new(SystemSpawner::new()),
        )
        .unwrap();
        assert!(matches!(
            sync.regenerate_project_files(),
            Err(SyncError::Process(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        let sync =
            CommandProjectSync::from_command_line("/bin/sh -c true", Arc::new(SystemSpawner::new()))
                .unwrap();
        assert!(sync.regenerate_project_files().is_ok());
    }
}
