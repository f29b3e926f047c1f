//! Code-file eligibility filter.

use std::path::Path;

/// Split a persisted comma-separated extension list into entries.
///
/// Entries are taken verbatim: no per-entry trimming, and empty entries are
/// kept. An empty entry matches every file.
pub fn parse_extensions(list: &str) -> Vec<&str> {
    list.split(',').collect()
}

/// Whether `file_path` should be opened in the editor.
///
/// Plain, case-sensitive suffix match against each configured entry. An
/// empty list makes every file eligible.
pub fn is_eligible(file_path: &Path, extensions: &str) -> bool {
    let path = file_path.to_string_lossy();
    parse_extensions(extensions)
        .iter()
        .any(|ext| path.ends_with(ext))
}
