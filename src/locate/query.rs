//! Scoped query engine: locates declarations, then restricts invocation
//! search to each declaration's own subtree, and assembles the final report.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    declaration_record, find_declarations, find_invocations, DeclarationRecord, InvocationRecord,
    NameMatch,
};
use crate::report::{Report, ReportEntry, UnitFailure};
use crate::{LocatorError, SourceUnit};

// ─── Options ─────────────────────────────────────────────────────────

/// Traversal root for invocation search.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Root invocation search at each matched declaration. A declaration's
    /// own calls are the interest, so nested-declaration bodies are excluded
    /// by default.
    #[default]
    SingleDeclaration,
    /// Root invocation search at the unit root; nested-declaration bodies
    /// are included by default.
    WholeFile,
}

/// Options for [`index`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub scope: Scope,
    /// Whether invocation search descends into nested declarations and
    /// lambda/anonymous bodies. `None` takes the per-scope default:
    /// `true` for whole-file, `false` for single-declaration.
    pub include_nested_declarations: Option<bool>,
}

impl QueryOptions {
    pub fn include_nested(&self) -> bool {
        self.include_nested_declarations
            .unwrap_or(matches!(self.scope, Scope::WholeFile))
    }
}

// ─── Scoped query ────────────────────────────────────────────────────

/// Locate every declaration named `target` across `units` and pair it with
/// the invocations of its own body (nested declarations excluded).
///
/// Output order is deterministic: unit input order, then declaration start
/// offset, then invocation start offset. A target matching zero declarations
/// yields `Ok` with an empty vector; absence is a valid, informative result.
/// A declaration with an empty body pairs with an empty invocation list.
pub fn locate_and_analyze(
    units: &[SourceUnit],
    target: &str,
) -> Result<Vec<(DeclarationRecord, Vec<InvocationRecord>)>, LocatorError> {
    let predicate = NameMatch::Exact(target.to_string());
    let mut results = Vec::new();
    for unit in units {
        for node in find_declarations(&unit.root, &predicate) {
            let record = declaration_record(unit, node)?;
            let invocations = find_invocations(unit, node, false)?;
            results.push((record, invocations));
        }
    }
    Ok(results)
}

// ─── Entry point ─────────────────────────────────────────────────────

/// Run the full query over `units` and aggregate a report.
///
/// Processing is per-unit fail-soft: a unit whose traversal trips a contract
/// violation (`OutOfRangeOffset`, `InvalidSpan`) contributes a failure note
/// and the remaining units are still processed. "Method not found" and
/// "file failed to analyze" are never conflated.
pub fn index(units: &[SourceUnit], target: &NameMatch, options: &QueryOptions) -> Report {
    let include_nested = options.include_nested();
    let mut report = Report::default();

    for unit in units {
        match index_unit(unit, target, options.scope, include_nested, &mut report) {
            Ok(matched) => {
                debug!(file = %unit.file, matched, "unit indexed");
            }
            Err(err) => {
                warn!(file = %unit.file, %err, "unit failed to analyze");
                report.failures.push(UnitFailure {
                    file: unit.file.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    report
}

/// Index one unit, appending entries to `report`. Returns the number of
/// declarations matched. Nothing is appended for a failing unit beyond what
/// was already complete; the caller records the failure note.
fn index_unit(
    unit: &SourceUnit,
    target: &NameMatch,
    scope: Scope,
    include_nested: bool,
    report: &mut Report,
) -> Result<usize, LocatorError> {
    // Collect this unit's output fully before publishing anything, so a
    // failure mid-unit leaves no partial entries in the report.
    let mut entries: Vec<ReportEntry> = Vec::new();
    for node in find_declarations(&unit.root, target) {
        let declaration = declaration_record(unit, node)?;
        let invocations = match scope {
            Scope::SingleDeclaration => find_invocations(unit, node, include_nested)?,
            // Whole-file invocations are assigned to declarations below.
            Scope::WholeFile => Vec::new(),
        };
        entries.push(ReportEntry {
            declaration,
            invocations,
        });
    }
    let matched = entries.len();

    let mut unscoped: Vec<InvocationRecord> = Vec::new();
    if scope == Scope::WholeFile {
        // One search over the whole unit; each invocation is attached to the
        // innermost matched declaration containing it, or reported unscoped.
        let invocations = find_invocations(unit, &unit.root, include_nested)?;
        let base = report.entries.len() as u32;
        for invocation in invocations {
            // Entries are in ascending start-offset order, so the last
            // containing span is the innermost one.
            let owner = entries
                .iter()
                .rposition(|e| e.declaration.span.contains(&invocation.span));
            match owner {
                Some(i) => {
                    let mut invocation = invocation;
                    invocation.enclosing_declaration = Some(base + i as u32);
                    entries[i].invocations.push(invocation);
                }
                None => unscoped.push(invocation),
            }
        }
    } else {
        let base = report.entries.len() as u32;
        for (i, entry) in entries.iter_mut().enumerate() {
            for invocation in &mut entry.invocations {
                invocation.enclosing_declaration = Some(base + i as u32);
            }
        }
    }

    report.entries.append(&mut entries);
    report.unscoped_invocations.append(&mut unscoped);
    Ok(matched)
}
