//! Unified error type for the locator engine.

use thiserror::Error;

/// All errors that can occur while building or querying the index.
///
/// `OutOfRangeOffset` and `InvalidSpan` are contract violations by the
/// parsing front-end (an AST node reporting offsets outside its source
/// text). They are surfaced immediately and never recovered. A query
/// matching zero declarations or zero invocations is a normal result,
/// not an error.
#[derive(Error, Debug)]
pub enum LocatorError {
    /// I/O error (file read, directory access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The front-end failed to produce an AST for a file.
    #[error("Parser produced no syntax tree for '{file}'")]
    ParseUnavailable { file: String },

    /// An offset beyond the end of the source text was passed to the
    /// position resolver.
    #[error("Offset {offset} out of range for source text of length {len}")]
    OutOfRangeOffset { offset: usize, len: usize },

    /// A span that violates `start <= end <= len` (or splits a UTF-8
    /// character) was passed to the snippet extractor.
    #[error("Invalid span {start}..{end} for source text of length {len}")]
    InvalidSpan {
        start: usize,
        end: usize,
        len: usize,
    },

    /// JSON serialization error when rendering a report.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Directory does not exist
    #[error("Directory does not exist: {0}")]
    DirNotFound(String),
}
