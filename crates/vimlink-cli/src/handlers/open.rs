//! `open` and `args` handlers.

use std::path::Path;

use anyhow::Result;
use vimlink_core::OpenRequest;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Open `file` in the editor.
///
/// An ineligible file is reported as "not handled" with its own exit code.
pub fn execute(ctx: &CliContext, file: &Path, line: i32, column: i32) -> Result<()> {
    let request = OpenRequest::new(file, line, column);
    match ctx
        .service()
        .open_request(&request)
        .map_err(CliError::from)?
    {
        Some(handle) => {
            match (handle.pid, handle.exit_code) {
                (_, Some(code)) => println!("Editor exited ({code})"),
                (Some(pid), None) => println!("Opened {} (pid {pid})", file.display()),
                (None, None) => println!("Opened {}", file.display()),
            }
            Ok(())
        }
        None => Err(CliError::Ineligible(file.to_path_buf()).into()),
    }
}

/// Print the argument string `open` would pass to the editor.
pub fn print_arguments(ctx: &CliContext, file: &Path, line: i32, column: i32) -> Result<()> {
    let service = ctx.service();
    if !service.is_eligible(file) {
        eprintln!("note: {} would not be handled (extension filter)", file.display());
    }
    println!(
        "{} {}",
        service.preferences().editor_path().display(),
        service.arguments_for(file, line, column)
    );
    Ok(())
}
