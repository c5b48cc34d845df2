//! # locator — Method Location & Call-Reference Index
//!
//! Locates method declarations and method-invocation references in a tree of
//! source files by querying pre-built ASTs, reporting each match's file,
//! 1-based line range, and verbatim source snippet, plus
//! (caller, callee, receiver) association records.
//!
//! ## Library usage
//!
//! This crate ships a CLI driver, but the full engine is exposed as a library
//! for benchmarking and integration testing. The core (`ast`, `locate`,
//! `report`) is source-language-agnostic: it consumes the tagged-variant
//! syntax model in [`ast`], produced here by the tree-sitter Java front-end
//! in [`parse`].

use serde::{Deserialize, Serialize};

pub mod ast;
pub mod error;
pub mod index;
pub mod locate;
pub mod parse;
pub mod report;

pub use error::LocatorError;

// ─── Spans and line ranges ───────────────────────────────────────────

/// Half-open byte range `[start, end)` into a source unit's text.
///
/// Invariant: `0 <= start <= end <= text.len()`. Spans come from the parsing
/// front-end; [`snippet`] re-validates them against the text they index into,
/// so a front-end that reports garbage offsets is caught, not masked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// 1-based inclusive line range, derived from a [`Span`] via [`line_of`].
///
/// Always recomputed from span + text, never stored on its own, so it cannot
/// drift from the span it describes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start_line: u32,
    pub end_line: u32,
}

impl LineRange {
    /// Derive the editor-visible line range of `span` within `text`.
    pub fn from_span(text: &str, span: Span) -> Result<Self, LocatorError> {
        let start_line = line_of(text, span.start)?;
        let end_line = line_of(text, span.end)?;
        Ok(Self { start_line, end_line })
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start_line, self.end_line)
    }
}

// ─── Position resolver ───────────────────────────────────────────────

/// Map a byte offset into `text` to a 1-based line number.
///
/// Counts line terminators strictly before `offset`; a terminator sitting
/// exactly at `offset` does not count toward that line. The first character
/// of the file is line 1, matching how an editor numbers lines. `offset` may
/// equal `text.len()` (end-of-file position); anything beyond fails with
/// [`LocatorError::OutOfRangeOffset`].
///
/// Pure function of `(text, offset)`; safe to call from any thread.
pub fn line_of(text: &str, offset: usize) -> Result<u32, LocatorError> {
    if offset > text.len() {
        return Err(LocatorError::OutOfRangeOffset {
            offset,
            len: text.len(),
        });
    }
    let newlines = text.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count();
    Ok(newlines as u32 + 1)
}

// ─── Snippet extractor ───────────────────────────────────────────────

/// Extract the exact substring of `text` covered by `span`.
///
/// The returned slice is verbatim source, original whitespace and line
/// endings preserved, because callers display it as authoritative code.
/// Fails with [`LocatorError::InvalidSpan`] if the span breaks its invariant
/// or splits a UTF-8 character.
pub fn snippet(text: &str, span: Span) -> Result<&str, LocatorError> {
    let valid = span.start <= span.end
        && span.end <= text.len()
        && text.is_char_boundary(span.start)
        && text.is_char_boundary(span.end);
    if !valid {
        return Err(LocatorError::InvalidSpan {
            start: span.start,
            end: span.end,
            len: text.len(),
        });
    }
    Ok(&text[span.start..span.end])
}

// ─── Source unit ─────────────────────────────────────────────────────

/// One file's immutable text plus its parsed syntax tree.
///
/// Owned by the indexing run for its lifetime; never mutated after parse.
#[derive(Debug)]
pub struct SourceUnit {
    /// Cleaned path (or any stable identifier) of the originating file.
    pub file: String,
    pub text: String,
    pub root: ast::SyntaxNode,
}

impl SourceUnit {
    /// Bind a parsed tree to its source text. Fails fast if the root span
    /// does not fit the text: that is a front-end contract violation, not
    /// something to discover deep inside a traversal.
    pub fn new(file: String, text: String, root: ast::SyntaxNode) -> Result<Self, LocatorError> {
        if root.span.end > text.len() || root.span.start > root.span.end {
            return Err(LocatorError::InvalidSpan {
                start: root.span.start,
                end: root.span.end,
                len: text.len(),
            });
        }
        Ok(Self { file, text, root })
    }
}

// ─── File helpers ────────────────────────────────────────────────────

/// Strip the `\\?\` extended-length path prefix that Windows canonicalize adds.
#[must_use]
pub fn clean_path(p: &str) -> String {
    p.strip_prefix(r"\\?\").unwrap_or(p).to_string()
}

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF8 files.
/// Returns `(content, was_lossy)` where `was_lossy` is true if replacement
/// characters were inserted.
pub fn read_file_lossy(path: &std::path::Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
