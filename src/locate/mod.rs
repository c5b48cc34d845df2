//! Method location core: declaration matching, invocation matching, and the
//! scoped query engine that composes them.
//!
//! Everything here is pure, synchronous traversal over the lowered syntax
//! model in [`crate::ast`]; no I/O, no parser, no shared mutable state.

mod declarations;
mod invocations;
mod query;

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;

pub use declarations::*;
pub use invocations::*;
pub use query::*;

use serde::{Deserialize, Serialize};

use crate::{LineRange, Span};

// ─── Records ─────────────────────────────────────────────────────────

/// A matched method declaration: where it is and what it looks like.
///
/// Immutable once produced. Consumed by the report, or used as the traversal
/// root for a scoped invocation search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeclarationRecord {
    /// Cleaned path of the originating file.
    pub file: String,
    pub name: String,
    /// Modifier keywords in source order, e.g. `["public", "static"]`.
    pub modifiers: Vec<String>,
    pub span: Span,
    pub line_range: LineRange,
    /// Verbatim source text of the whole declaration.
    pub snippet: String,
}

/// One method invocation found inside a search scope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InvocationRecord {
    /// Index of the owning entry in the report's entry table. Non-owning
    /// back-reference; `None` for invocations outside every matched
    /// declaration under whole-file scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing_declaration: Option<u32>,
    /// Name of the method being called.
    pub callee: String,
    /// Raw source text of the receiver expression; empty for implicit-`this`
    /// and unqualified static calls. Which class a static call targets is
    /// never resolved.
    pub receiver_text: String,
    /// Raw source text of each argument expression, in call order.
    pub argument_texts: Vec<String>,
    pub span: Span,
    pub line_range: LineRange,
}
