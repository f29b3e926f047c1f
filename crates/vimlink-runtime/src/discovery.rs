//! Editor installation discovery.
//!
//! Produces an ordered snapshot of usable editor executables: first the
//! platform-conventional seed locations, then every hit from scanning the
//! `PATH` directories. Order is preserved (seeds, then path directories in
//! path order, then executable names in preference order) and duplicates
//! are kept.

use std::env;
use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;
use vimlink_core::Installation;

/// Executable names probed in each search directory, most preferred first.
///
/// On Windows a `gvim.bat` wrapper wins over the raw executable, so a
/// user-installed wrapper (for example one hiding a scoop shim's console
/// window) is honoured.
#[cfg(target_os = "windows")]
pub const EXECUTABLE_NAMES: &[&str] = &["gvim.bat", "gvim.exe"];

#[cfg(target_os = "macos")]
pub const EXECUTABLE_NAMES: &[&str] = &["mvim", "gvim"];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const EXECUTABLE_NAMES: &[&str] = &["gvim"];

/// Well-known install locations checked before the search path.
pub fn seed_installations() -> Vec<Installation> {
    vec![
        // Homebrew
        Installation::new("MacVim", "/usr/local/bin/mvim"),
        Installation::new("Vim", "/usr/share/vim/gvim"),
    ]
}

/// Discover installations using the process `PATH`.
///
/// Never fails: an unset or empty `PATH` simply scans nothing.
pub fn discover() -> Vec<Installation> {
    let search_path = env::var_os("PATH");
    discover_in(&seed_installations(), search_path.as_deref())
}

/// Discover installations from explicit seeds and search path.
///
/// Seeds that don't exist on disk are dropped.
pub fn discover_in(seeds: &[Installation], search_path: Option<&OsStr>) -> Vec<Installation> {
    let mut found: Vec<Installation> = seeds
        .iter()
        .filter(|seed| seed.path.is_file())
        .cloned()
        .collect();
    found.extend(scan_search_path(search_path));

    debug!("Discovered {} editor installation(s)", found.len());
    found
}

/// Probe every directory of `search_path` for [`EXECUTABLE_NAMES`].
pub fn scan_search_path(search_path: Option<&OsStr>) -> Vec<Installation> {
    let Some(search_path) = search_path else {
        return Vec::new();
    };

    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| scan_dir(&dir))
        .collect()
}

fn scan_dir(dir: &Path) -> Vec<Installation> {
    EXECUTABLE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .filter(|candidate| candidate.is_file())
        .map(Installation::from_scanned)
        .collect()
}
