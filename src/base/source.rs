//! Source coordinates for declarations.
//!
//! Line/column positions and file-scoped ranges attached to symbols by the
//! parser. Ranges order by `(file, start, end)`, which is the primary key of
//! the global symbol display ordering. Synthesized symbols carry no range.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A position in source code (1-indexed lines and columns, as reported by the
/// upstream parser).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A file-scoped range in source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub file: PathBuf,
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub fn new(file: impl Into<PathBuf>, start: SourceLocation, end: SourceLocation) -> Self {
        Self {
            file: file.into(),
            start,
            end,
        }
    }

    /// Create a range from line/column coordinates.
    pub fn from_coords(
        file: impl Into<PathBuf>,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start: SourceLocation::new(start_line, start_col),
            end: SourceLocation::new(end_line, end_col),
        }
    }
}
