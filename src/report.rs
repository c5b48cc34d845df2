//! Index report: the ordered, serializable aggregation of query results.
//!
//! Purely a projection over what the query engine produced; it never
//! reorders or rewrites records. Matched records and per-file processing
//! failures are kept apart, so "method not found" (empty entries) is never
//! mistaken for "file failed to analyze" (a failure note).

use serde::{Deserialize, Serialize};

use crate::locate::{DeclarationRecord, InvocationRecord};
use crate::LocatorError;

/// One matched declaration with the invocations found in its scope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub declaration: DeclarationRecord,
    pub invocations: Vec<InvocationRecord>,
}

/// A unit that could not be analyzed: unreadable, unparseable, or a
/// front-end contract violation. The rest of the run continues without it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub file: String,
    pub error: String,
}

/// Aggregated result of one indexing run.
///
/// Entry order is deterministic: unit input order, then declaration start
/// offset; each entry's invocations are in start-offset order. Running the
/// same query twice over the same inputs serializes byte-identically.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    /// Whole-file scope only: invocations that fall outside every matched
    /// declaration. Empty under single-declaration scope.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unscoped_invocations: Vec<InvocationRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<UnitFailure>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.unscoped_invocations.is_empty()
    }

    /// Serialize to pretty JSON for the CLI's `--json` output.
    pub fn to_json(&self) -> Result<String, LocatorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the human-readable form: per declaration, a location line, the
    /// verbatim snippet, and one line per invocation.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let d = &entry.declaration;
            out.push_str(&format!(
                "Method '{}' found in {} at lines {}\n",
                d.name, d.file, d.line_range
            ));
            out.push_str(&d.snippet);
            if !d.snippet.ends_with('\n') {
                out.push('\n');
            }
            for inv in &entry.invocations {
                out.push_str(&render_invocation(inv));
            }
        }
        for inv in &self.unscoped_invocations {
            out.push_str(&render_invocation(inv));
        }
        for failure in &self.failures {
            out.push_str(&format!("FAILED {}: {}\n", failure.file, failure.error));
        }
        if self.is_empty() && self.failures.is_empty() {
            out.push_str("No matches.\n");
        }
        out
    }
}

fn render_invocation(inv: &InvocationRecord) -> String {
    if inv.receiver_text.is_empty() {
        format!(
            "  calls '{}({})' at lines {}\n",
            inv.callee,
            inv.argument_texts.join(", "),
            inv.line_range
        )
    } else {
        format!(
            "  calls '{}.{}({})' at lines {}\n",
            inv.receiver_text,
            inv.callee,
            inv.argument_texts.join(", "),
            inv.line_range
        )
    }
}
