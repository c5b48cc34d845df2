//! Index build pipeline: discover source files, parse them into units in
//! parallel, run the query, and aggregate the report.
//!
//! Parsing is the only parallel stage. Each worker owns its chunk of files
//! and its own tree-sitter parser; nothing is shared, and results are
//! re-ordered by unit input order before the query runs, so thread
//! completion order never leaks into the output.

use std::path::PathBuf;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::info;

use crate::locate::{index, NameMatch, QueryOptions};
use crate::parse::{java_parser, parse_java};
use crate::report::{Report, UnitFailure};
use crate::{clean_path, read_file_lossy, LocatorError, SourceUnit};

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;

// ─── File discovery ──────────────────────────────────────────────────

/// Recursively collect files under `dir` with one of `extensions`,
/// honoring .gitignore. Returned paths are cleaned and sorted, which fixes
/// the unit input order (and therefore the report order) for a given tree.
pub fn collect_source_files(
    dir: &str,
    extensions: &[String],
) -> Result<Vec<String>, LocatorError> {
    let root = std::fs::canonicalize(dir).map_err(|_| LocatorError::DirNotFound(dir.to_string()))?;

    let mut files = Vec::new();
    for entry in WalkBuilder::new(&root).hidden(false).git_ignore(true).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let ext_match = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
        if ext_match {
            files.push(clean_path(&path.to_string_lossy()));
        }
    }
    files.sort();
    Ok(files)
}

// ─── Parallel parsing ────────────────────────────────────────────────

/// Read and parse `files` into source units with a scoped worker pool.
/// `threads == 0` auto-detects CPU cores. Units come back in input order;
/// files that fail to read or parse become failure notes instead.
pub fn load_units(files: &[String], threads: usize) -> (Vec<SourceUnit>, Vec<UnitFailure>) {
    let num_threads = if threads > 0 {
        threads
    } else {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    };
    let chunk_size = files.len().div_ceil(num_threads).max(1);
    let chunks: Vec<Vec<(usize, String)>> = files
        .iter()
        .enumerate()
        .map(|(i, f)| (i, f.clone()))
        .collect::<Vec<_>>()
        .chunks(chunk_size)
        .map(|c| c.to_vec())
        .collect();

    let mut results: Vec<(usize, Result<SourceUnit, LocatorError>)> =
        std::thread::scope(|s| {
            let handles: Vec<_> = chunks
                .into_iter()
                .map(|chunk| {
                    s.spawn(move || {
                        let mut parser = java_parser();
                        let mut out = Vec::with_capacity(chunk.len());
                        for (file_idx, file_path) in chunk {
                            let parsed = read_file_lossy(&PathBuf::from(&file_path))
                                .map_err(LocatorError::from)
                                .and_then(|(content, _was_lossy)| {
                                    parse_java(&mut parser, &file_path, content)
                                });
                            out.push((file_idx, parsed));
                        }
                        out
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().expect("parser worker panicked"))
                .collect()
        });

    // Completion order is whatever the pool produced; restore input order.
    results.sort_by_key(|(i, _)| *i);

    let mut units = Vec::new();
    let mut failures = Vec::new();
    for (file_idx, result) in results {
        match result {
            Ok(unit) => units.push(unit),
            Err(err) => failures.push(UnitFailure {
                file: files[file_idx].clone(),
                error: err.to_string(),
            }),
        }
    }
    (units, failures)
}

// ─── Full pipeline ───────────────────────────────────────────────────

/// Discover, parse, query, aggregate: the whole run in one call.
pub fn build_report(
    dir: &str,
    extensions: &[String],
    threads: usize,
    target: &NameMatch,
    options: &QueryOptions,
) -> Result<Report, LocatorError> {
    let start = Instant::now();
    let files = collect_source_files(dir, extensions)?;
    eprintln!("[locator] Found {} files to parse", files.len());

    let (units, load_failures) = load_units(&files, threads);
    info!(
        units = units.len(),
        failed = load_failures.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "units parsed"
    );

    let mut report = index(&units, target, options);
    // Load failures precede per-unit analysis failures; both are reported,
    // never silently dropped.
    let mut failures = load_failures;
    failures.append(&mut report.failures);
    report.failures = failures;

    eprintln!(
        "[locator] {} declarations matched, {} failures in {:?}",
        report.entries.len(),
        report.failures.len(),
        start.elapsed()
    );
    Ok(report)
}
