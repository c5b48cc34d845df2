//! Java front-end using tree-sitter: lowers a parsed tree into the
//! tagged-variant syntax model.

use crate::ast::{NodeKind, SyntaxNode};
use crate::{LocatorError, SourceUnit, Span};

/// Build a parser configured with the Java grammar.
pub fn java_parser() -> tree_sitter::Parser {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .expect("Error loading Java grammar");
    parser
}

/// Parse `text` and bind the lowered tree to its source as a [`SourceUnit`].
///
/// Fails with [`LocatorError::ParseUnavailable`] if the parser produces no
/// tree at all. Source with syntax errors still parses (error nodes lower to
/// plain structural nodes), so a half-broken file yields whatever
/// declarations and invocations are still recognizable.
pub fn parse_java(
    parser: &mut tree_sitter::Parser,
    file: &str,
    text: String,
) -> Result<SourceUnit, LocatorError> {
    let tree = parser
        .parse(&text, None)
        .ok_or_else(|| LocatorError::ParseUnavailable {
            file: file.to_string(),
        })?;
    let root = lower_node(tree.root_node(), text.as_bytes());
    SourceUnit::new(file.to_string(), text, root)
}

// ─── Lowering ────────────────────────────────────────────────────────

fn lower_node(node: tree_sitter::Node, source: &[u8]) -> SyntaxNode {
    let span = Span::new(node.start_byte(), node.end_byte());

    let mut cursor = node.walk();
    let children: Vec<SyntaxNode> = node
        .named_children(&mut cursor)
        .map(|child| lower_node(child, source))
        .collect();

    let kind = match node.kind() {
        "method_declaration" | "constructor_declaration" => lower_declaration(node, source),
        "method_invocation" => lower_invocation(node, source),
        "lambda_expression" => NodeKind::AnonymousBody,
        // An anonymous class is an object_creation_expression carrying a
        // class_body; that body is a scope boundary, not a declaration.
        "class_body" if parent_kind(node) == Some("object_creation_expression") => {
            NodeKind::AnonymousBody
        }
        _ => NodeKind::Other,
    };

    SyntaxNode::new(kind, span, children)
}

fn lower_declaration(node: tree_sitter::Node, source: &[u8]) -> NodeKind {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    NodeKind::Declaration {
        name,
        modifiers: extract_modifiers(node, source),
    }
}

fn lower_invocation(node: tree_sitter::Node, source: &[u8]) -> NodeKind {
    let callee = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    // Explicit receiver expression, e.g. `calculator` in
    // `calculator.divide(6, 3)`. Absent for implicit-this and unqualified
    // static calls.
    let receiver = node
        .child_by_field_name("object")
        .map(|n| Span::new(n.start_byte(), n.end_byte()));
    let arguments = node
        .child_by_field_name("arguments")
        .map(|args| {
            let mut cursor = args.walk();
            args.named_children(&mut cursor)
                // Comments are named nodes and can sit between arguments.
                .filter(|a| !matches!(a.kind(), "line_comment" | "block_comment"))
                .map(|a| Span::new(a.start_byte(), a.end_byte()))
                .collect()
        })
        .unwrap_or_default();
    NodeKind::Invocation {
        callee,
        receiver,
        arguments,
    }
}

/// Modifier keywords of a declaration in source order. Annotations are
/// skipped; only the keyword tokens (`public`, `static`, `final`, ...) are
/// kept.
fn extract_modifiers(node: tree_sitter::Node, source: &[u8]) -> Vec<String> {
    let Some(modifiers) = find_child_by_kind(node, "modifiers") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for i in 0..modifiers.child_count() {
        let child = modifiers.child(i).unwrap();
        // Keyword modifiers are anonymous tokens; annotations are named nodes.
        if !child.is_named() {
            out.push(node_text(child, source).to_string());
        }
    }
    out
}

fn parent_kind(node: tree_sitter::Node) -> Option<&'static str> {
    node.parent().map(|p| p.kind())
}

fn node_text<'a>(node: tree_sitter::Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn find_child_by_kind<'a>(node: tree_sitter::Node<'a>, kind: &str) -> Option<tree_sitter::Node<'a>> {
    for i in 0..node.child_count() {
        let child = node.child(i).unwrap();
        if child.kind() == kind {
            return Some(child);
        }
    }
    None
}
