//! Declaration matcher: lazy traversal yielding method-declaration nodes
//! whose name satisfies a predicate.

use serde::{Deserialize, Serialize};

use super::DeclarationRecord;
use crate::ast::{NodeKind, SyntaxNode};
use crate::{snippet, LineRange, LocatorError, SourceUnit};

/// Name predicate for declaration matching.
///
/// One traversal serves both "find all declarations of `X`" and "enumerate
/// every method" lookups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// Match declarations with exactly this name (case-sensitive).
    Exact(String),
    /// Match every declaration.
    Any,
}

impl NameMatch {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(target) => target == name,
            Self::Any => true,
        }
    }
}

/// Walk `root` and yield every declaration node whose name satisfies
/// `predicate`, in ascending start-offset order.
///
/// Lazy and bounded by the number of declaration nodes in the tree; not
/// restartable without re-traversal. Visits declarations at every nesting
/// depth, including local and anonymous-scope definitions. Restricting a
/// search to one scope is the caller's job (see the scoped query engine),
/// not this matcher's. Two same-named declarations in one file are both
/// yielded, offset order, ambiguity surfaced rather than silently resolved.
pub fn find_declarations<'a>(
    root: &'a SyntaxNode,
    predicate: &'a NameMatch,
) -> Declarations<'a> {
    Declarations {
        stack: vec![root],
        predicate,
    }
}

/// Iterator over matching declaration nodes. Preorder over a span-nested
/// tree, so yielded nodes come out in ascending start-offset order.
pub struct Declarations<'a> {
    stack: Vec<&'a SyntaxNode>,
    predicate: &'a NameMatch,
}

impl<'a> Iterator for Declarations<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reversed push keeps document order on a LIFO stack.
            for child in node.children.iter().rev() {
                self.stack.push(child);
            }
            if let NodeKind::Declaration { name, .. } = &node.kind {
                if self.predicate.matches(name) {
                    return Some(node);
                }
            }
        }
        None
    }
}

/// Build the presentable record for a matched declaration node: line range
/// from the position resolver, snippet verbatim from the unit's text.
pub fn declaration_record(
    unit: &SourceUnit,
    node: &SyntaxNode,
) -> Result<DeclarationRecord, LocatorError> {
    let (name, modifiers) = match &node.kind {
        NodeKind::Declaration { name, modifiers } => (name.clone(), modifiers.clone()),
        _ => {
            // Caller handed a non-declaration node; treat as a span defect.
            return Err(LocatorError::InvalidSpan {
                start: node.span.start,
                end: node.span.end,
                len: unit.text.len(),
            });
        }
    };
    let line_range = LineRange::from_span(&unit.text, node.span)?;
    let text = snippet(&unit.text, node.span)?;
    Ok(DeclarationRecord {
        file: unit.file.clone(),
        name,
        modifiers,
        span: node.span,
        line_range,
        snippet: text.to_string(),
    })
}
