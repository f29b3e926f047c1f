//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and the pure
//! domain logic. They don't know about concrete implementations.

mod editor_service;
mod launcher;
mod preferences_service;

pub use editor_service::{AssetChanges, EditorService, PreferencesView};
pub use launcher::{EditorLauncher, LaunchError, LaunchMode};
pub use preferences_service::PreferencesService;
