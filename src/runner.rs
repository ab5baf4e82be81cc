//! Interpreter process execution.
//!
//! The interpreter binary is an opaque collaborator: handed a source file as
//! its sole argument, it emits output lines on stdout. [`Runner`] narrows it
//! to that single capability so the comparison policy can be exercised
//! against canned output instead of a compiled binary, and so the suite
//! aggregator stays backend-agnostic.

use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStderr, ChildStdout, Command, Stdio};

use crate::errors::HarnessError;

/// Executes one source file and exposes the interpreter's stdout as ordered
/// lines, each with its terminator stripped.
pub trait Runner {
    type Lines: Iterator<Item = io::Result<Vec<u8>>>;

    fn execute(&self, source: &Path) -> Result<Self::Lines, HarnessError>;
}

/// Runs a compiled interpreter binary as a child process.
///
/// Both interpreter backends are driven through this runner; they differ only
/// in which binary gets launched.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    binary: PathBuf,
}

impl ProcessRunner {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Runner for ProcessRunner {
    type Lines = ChildLines;

    fn execute(&self, source: &Path) -> Result<ChildLines, HarnessError> {
        let mut child = Command::new(&self.binary)
            .arg(source)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HarnessError::ProcessLaunch {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = child.stdout.take().expect("stdout was requested as piped");
        Ok(ChildLines {
            lines: Some(BufReader::new(stdout).split(b'\n')),
            child,
        })
    }
}

/// Line-by-line view of a child process's stdout.
///
/// Output is consumed incrementally while the child runs. Dropping the stream
/// closes the pipe first and then reaps the child, so abandoning it early
/// cannot leak a process.
#[derive(Debug)]
pub struct ChildLines {
    lines: Option<io::Split<BufReader<ChildStdout>>>,
    child: Child,
}

impl ChildLines {
    /// Hands out the child's stderr stream. Captured for parity with stdout;
    /// the comparison itself never inspects it.
    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.stderr.take()
    }
}

impl Iterator for ChildLines {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.as_mut()?.next()
    }
}

impl Drop for ChildLines {
    fn drop(&mut self) {
        // Close the pipe before waiting, or a child still writing would
        // never exit.
        self.lines.take();
        let _ = self.child.wait();
    }
}

/// Replays canned output lines instead of launching a process.
///
/// Lets comparison and suite tests run without any compiled interpreter.
#[derive(Debug, Clone, Default)]
pub struct ReplayRunner {
    lines: Vec<Vec<u8>>,
}

impl ReplayRunner {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Runner for ReplayRunner {
    type Lines = std::vec::IntoIter<io::Result<Vec<u8>>>;

    fn execute(&self, _source: &Path) -> Result<Self::Lines, HarnessError> {
        let lines: Vec<io::Result<Vec<u8>>> = self.lines.iter().cloned().map(Ok).collect();
        Ok(lines.into_iter())
    }
}

/// Rebuilds an interpreter by running `make` in its source directory.
///
/// The directory is passed explicitly and handed to the child via
/// `current_dir`; the harness's own working directory never changes.
pub fn rebuild_interpreter(source_dir: &Path) -> Result<(), HarnessError> {
    let status = Command::new("make")
        .current_dir(source_dir)
        .status()
        .map_err(|source| HarnessError::Rebuild {
            dir: source_dir.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(HarnessError::RebuildExit {
            dir: source_dir.to_path_buf(),
            status,
        });
    }
    Ok(())
}
