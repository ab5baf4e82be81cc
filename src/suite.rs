//! Suite discovery and aggregation.
//!
//! Drives per-file runs across a fixture tree, a single file, or the flat
//! benchmark directory, and accumulates the pass/fail counters for the final
//! report.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::cli::output::{self, OutputConfig};
use crate::compare::{compare_output, FileVerdict, PairingPolicy};
use crate::errors::HarnessError;
use crate::expectation::parse_expectations;
use crate::runner::Runner;

/// Extension of interpreter source files visited in tree mode.
pub const SOURCE_EXTENSION: &str = "lox";

/// Directory names pruned in tree mode. Their fixtures are not written
/// against the line-comparison contract (performance and scanner material).
pub const EXCLUDED_DIRS: &[&str] = &["benchmark", "expressions", "scanning"];

/// Directory visited by benchmark mode, relative to the suite root.
pub const BENCHMARK_DIR: &str = "benchmark";

/// Counters accumulated across one suite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteResult {
    pub total: usize,
    pub failed: usize,
}

impl SuiteResult {
    /// Share of visited files that failed, as a percentage.
    pub fn failure_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.failed as f64 / self.total as f64 * 100.0
    }
}

/// Runs a single source file: parse its expectations, execute it, compare.
pub fn run_file<R: Runner>(runner: &R, path: &Path) -> Result<FileVerdict, HarnessError> {
    let expectations = parse_expectations(path)?;
    let output = runner.execute(path)?;
    compare_output(path, &expectations, output, PairingPolicy::ShorterWins)
}

/// Walks the fixture tree under `root` and runs every source file in it.
///
/// Subtrees named in [`EXCLUDED_DIRS`] are pruned, files are visited in
/// lexicographic order, and each verdict prints as soon as its file
/// completes. A tree with no test files at all is reported as
/// [`HarnessError::EmptySuite`] rather than dividing by zero in the summary.
/// A file that cannot be read or executed aborts the walk.
pub fn run_tree<R: Runner>(
    runner: &R,
    root: &Path,
    config: &OutputConfig,
) -> Result<SuiteResult, HarnessError> {
    let mut result = SuiteResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry));
    for entry in walker {
        let entry = entry.map_err(|source| HarnessError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }

        result.total += 1;
        let verdict = run_file(runner, entry.path())?;
        output::print_verdict(&verdict, config);
        if verdict.failed {
            result.failed += 1;
        }
    }

    if result.total == 0 {
        return Err(HarnessError::EmptySuite {
            root: root.to_path_buf(),
        });
    }

    output::print_summary(&result);
    Ok(result)
}

/// Runs every file directly inside the benchmark directory.
///
/// No exclusion or extension filtering applies and no pass/fail report is
/// accumulated; each verdict prints for timing and manual inspection only.
pub fn run_benchmark<R: Runner>(
    runner: &R,
    bench_dir: &Path,
    config: &OutputConfig,
) -> Result<(), HarnessError> {
    let mut files: Vec<PathBuf> = Vec::new();
    let entries = fs::read_dir(bench_dir).map_err(|source| HarnessError::FileAccess {
        path: bench_dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| HarnessError::FileAccess {
            path: bench_dir.to_path_buf(),
            source,
        })?;
        if entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    for path in files {
        let verdict = run_file(runner, &path)?;
        output::print_verdict(&verdict, config);
    }
    Ok(())
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}
