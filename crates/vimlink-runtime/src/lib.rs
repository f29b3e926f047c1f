//! OS-level adapters for vimlink.
//!
//! - [`discovery`]: finds editor executables on disk and on `PATH`
//! - [`SystemSpawner`]: starts editor processes with `std::process`
//! - [`JsonPreferenceStore`]: persists preferences in a JSON file
//! - [`CommandProjectSync`]: regenerates IDE project files by running a command
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod discovery;
mod spawner;
mod store;
mod sync;

pub use discovery::{EXECUTABLE_NAMES, discover, discover_in, scan_search_path, seed_installations};
pub use spawner::SystemSpawner;
pub use store::JsonPreferenceStore;
pub use sync::CommandProjectSync;

#[cfg(test)]
use tempfile as _;
