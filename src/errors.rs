//! Harness error taxonomy.
//!
//! Comparison mismatches are deliberately absent here: they are accumulated
//! diagnostics on a [`crate::compare::FileVerdict`], the expected outcome of
//! normal test execution, not errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// A source file could not be opened or read.
    #[error("Failed to read {}", .path.display())]
    #[diagnostic(code(loxtest::file_access))]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An expected-output annotation contains non-ASCII text.
    #[error("Expectation on line {line} of {} is not ASCII", .path.display())]
    #[diagnostic(
        code(loxtest::encoding),
        help("Expected output is compared as ASCII bytes; rewrite the annotation using ASCII only")
    )]
    NonAsciiExpectation { path: PathBuf, line: usize },

    /// The interpreter binary is missing or not executable.
    #[error("Failed to launch interpreter {}", .binary.display())]
    #[diagnostic(
        code(loxtest::process_launch),
        help("Check the binary location, pass --interpreter, or rebuild with --recompile")
    )]
    ProcessLaunch {
        binary: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the interpreter's output stream failed mid-run.
    #[error("Failed to read interpreter output for {}", .path.display())]
    #[diagnostic(code(loxtest::output_read))]
    OutputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walking the fixture tree failed.
    #[error("Failed to walk directory {}", .root.display())]
    #[diagnostic(code(loxtest::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Tree mode visited no test files at all.
    #[error("No test files found under {}", .root.display())]
    #[diagnostic(
        code(loxtest::empty_suite),
        help("Tree mode only visits .lox files outside the benchmark, expressions, and scanning directories")
    )]
    EmptySuite { root: PathBuf },

    /// The interpreter build command could not be started.
    #[error("Failed to run the interpreter build in {}", .dir.display())]
    #[diagnostic(code(loxtest::rebuild))]
    Rebuild {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The interpreter build ran but did not succeed.
    #[error("Interpreter build in {} exited with {status}", .dir.display())]
    #[diagnostic(code(loxtest::rebuild))]
    RebuildExit { dir: PathBuf, status: ExitStatus },
}
