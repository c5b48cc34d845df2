//! Tagged-variant syntax model consumed by the locator core.
//!
//! The core never touches a parser. A front-end (see [`crate::parse`]) lowers
//! its concrete syntax tree into this closed set of node kinds; everything the
//! matchers need (names, modifier sets, receiver/argument spans, offsets) is
//! captured here, which keeps the traversal logic source-language-agnostic.

use crate::Span;

/// One node of a lowered syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Byte span of this node in the original source text.
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

/// The closed set of node kinds the locator distinguishes.
///
/// Matched exhaustively by the traversals in [`crate::locate`]; a small,
/// closed sum beats open-ended visitor dispatch for this job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A named method or constructor declaration.
    Declaration {
        name: String,
        /// Modifier keywords in source order (`public`, `static`, ...).
        modifiers: Vec<String>,
    },
    /// A method invocation.
    Invocation {
        /// Name of the method being called, e.g. `divide`.
        callee: String,
        /// Span of the explicit receiver expression (`calculator` in
        /// `calculator.divide(6, 3)`). `None` for implicit-`this` and
        /// unqualified static calls; no class resolution is attempted.
        receiver: Option<Span>,
        /// Spans of the argument expressions, in declaration order.
        arguments: Vec<Span>,
    },
    /// A lambda body or anonymous-class body: a scope boundary with no name
    /// of its own. Prunable exactly like a nested declaration.
    AnonymousBody,
    /// Any other syntax. Traversed transparently.
    Other,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        Self { kind, span, children }
    }

    /// Structural node with no semantic payload.
    pub fn other(span: Span, children: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::Other, span, children)
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, NodeKind::Declaration { .. })
    }

    pub fn is_invocation(&self) -> bool {
        matches!(self.kind, NodeKind::Invocation { .. })
    }

    /// Whether this node opens a nested scope that `include_nested_declarations
    /// = false` must not descend into: a declaration or an anonymous body.
    pub fn is_scope_boundary(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Declaration { .. } | NodeKind::AnonymousBody
        )
    }

    /// Declaration name, if this is a declaration node.
    pub fn declaration_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Declaration { name, .. } => Some(name),
            _ => None,
        }
    }
}
