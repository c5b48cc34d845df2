//! Invocation matcher: finds every method invocation beneath a subtree root,
//! capturing raw receiver and argument text.

use super::InvocationRecord;
use crate::ast::{NodeKind, SyntaxNode};
use crate::{snippet, LineRange, LocatorError, SourceUnit};

/// Collect every invocation at or beneath `subtree`, in ascending
/// start-offset order.
///
/// With `include_nested_declarations = false`, recursion is pruned at any
/// nested declaration or anonymous-body boundary: a method's own calls are
/// reported, the calls of a lambda it happens to define are not. The
/// `subtree` root itself is never pruned, so rooting the search at a
/// declaration node works as expected.
///
/// Chained calls like `builder.with(x).build()` produce one record per
/// invocation in the chain; each record's receiver text is the raw text of
/// its immediate receiver expression (`builder.with(x)` for the outer call).
pub fn find_invocations(
    unit: &SourceUnit,
    subtree: &SyntaxNode,
    include_nested_declarations: bool,
) -> Result<Vec<InvocationRecord>, LocatorError> {
    let mut records = Vec::new();
    walk(unit, subtree, include_nested_declarations, &mut records)?;
    Ok(records)
}

fn walk(
    unit: &SourceUnit,
    node: &SyntaxNode,
    include_nested: bool,
    records: &mut Vec<InvocationRecord>,
) -> Result<(), LocatorError> {
    if let NodeKind::Invocation {
        callee,
        receiver,
        arguments,
    } = &node.kind
    {
        records.push(invocation_record(unit, node.span, callee, *receiver, arguments)?);
    }
    for child in &node.children {
        if !include_nested && child.is_scope_boundary() {
            continue;
        }
        walk(unit, child, include_nested, records)?;
    }
    Ok(())
}

fn invocation_record(
    unit: &SourceUnit,
    span: crate::Span,
    callee: &str,
    receiver: Option<crate::Span>,
    arguments: &[crate::Span],
) -> Result<InvocationRecord, LocatorError> {
    let receiver_text = match receiver {
        Some(r) => snippet(&unit.text, r)?.to_string(),
        None => String::new(),
    };
    let argument_texts = arguments
        .iter()
        .map(|a| snippet(&unit.text, *a).map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InvocationRecord {
        enclosing_declaration: None,
        callee: callee.to_string(),
        receiver_text,
        argument_texts,
        span,
        line_range: LineRange::from_span(&unit.text, span)?,
    })
}
