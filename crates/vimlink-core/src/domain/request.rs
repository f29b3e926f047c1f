//! Open-file requests coming from the host.

use std::path::PathBuf;

/// A single "open file at line/column" request.
///
/// `line` is 1-based; `column` is 1-based with any value `<= 0` meaning
/// "no column". Neither is clamped here; the synthesizer clamps both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub file_path: PathBuf,
    pub line: i32,
    pub column: i32,
}

impl OpenRequest {
    /// Create a request for `file_path` at `line`/`column`.
    pub fn new(file_path: impl Into<PathBuf>, line: i32, column: i32) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            column,
        }
    }
}
