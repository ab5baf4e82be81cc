//! Extraction of inline expected-output annotations from source files.
//!
//! A line of the form `<code> // expect: <value>` promises that the
//! interpreter's next output line equals `<value>`. Expectations are kept in
//! source order; the comparator pairs them positionally against output, not
//! by line number.

use std::fs;
use std::path::Path;

use crate::errors::HarnessError;

/// Marker separating source code from its expected output on an annotated line.
pub const EXPECT_MARKER: &str = "// expect: ";

/// One annotated source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineExpectation {
    /// 1-based line number within the source file.
    pub line_number: usize,
    /// Source text preceding the marker, with leading whitespace removed.
    pub source_code: String,
    /// Right-trimmed expected output, as ASCII bytes.
    pub expected: Vec<u8>,
}

/// Parses a source file into its ordered expectations.
///
/// A line carries an expectation only when splitting on [`EXPECT_MARKER`]
/// yields exactly two parts; lines without the marker, or with more than one
/// occurrence of it, are skipped rather than rejected. Non-ASCII expected
/// output is an error — the comparison contract is byte-level ASCII.
pub fn parse_expectations(path: &Path) -> Result<Vec<LineExpectation>, HarnessError> {
    let source = fs::read_to_string(path).map_err(|source| HarnessError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut expectations = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let parts: Vec<&str> = line.split(EXPECT_MARKER).collect();
        if parts.len() != 2 {
            continue;
        }

        let line_number = index + 1;
        let expected = parts[1].trim_end();
        if !expected.is_ascii() {
            return Err(HarnessError::NonAsciiExpectation {
                path: path.to_path_buf(),
                line: line_number,
            });
        }

        expectations.push(LineExpectation {
            line_number,
            source_code: parts[0].trim_start().to_string(),
            expected: expected.as_bytes().to_vec(),
        });
    }

    Ok(expectations)
}
