//! Command handlers that delegate to `EditorService`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `EditorService` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the preference store directly
//! - Build editor arguments themselves

pub mod installations;
pub mod open;
pub mod prefs;
pub mod sync;
