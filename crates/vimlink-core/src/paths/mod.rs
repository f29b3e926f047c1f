//! Path utilities for vimlink data locations.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O

mod error;
mod platform;

pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, preferences_path};
