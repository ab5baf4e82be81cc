//! Positional comparison of interpreter output against expectations.
//!
//! Exact byte equality is the fast path and the default for non-numeric
//! output. Interpreters format numbers inconsistently (an integer-valued
//! float may print as `3` or `3.0` depending on internals), so textual
//! inequality falls back to numeric coercion before a pair is declared a
//! mismatch.

use std::io;
use std::path::{Path, PathBuf};

use crate::errors::HarnessError;
use crate::expectation::LineExpectation;

/// How expectation and output sequences of different lengths are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingPolicy {
    /// Pair index-by-index and stop at the shorter sequence; the unpaired
    /// tail on either side is ignored rather than flagged.
    ShorterWins,
}

/// One diagnosed pair that did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub line_number: usize,
    pub source_code: String,
    pub expected: String,
    pub actual: String,
}

/// Pass/fail outcome for a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerdict {
    pub path: PathBuf,
    pub failed: bool,
    pub mismatches: Vec<Mismatch>,
}

/// Pairs expectations against output lines and produces a verdict.
///
/// Mismatches accumulate on the verdict; they are diagnostics, not flow
/// control. Only a failure to read the output stream itself aborts the
/// comparison.
pub fn compare_output<I>(
    path: &Path,
    expectations: &[LineExpectation],
    output: I,
    policy: PairingPolicy,
) -> Result<FileVerdict, HarnessError>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
{
    let mut mismatches = Vec::new();

    match policy {
        PairingPolicy::ShorterWins => {
            for (record, line) in expectations.iter().zip(output) {
                let line = line.map_err(|source| HarnessError::OutputRead {
                    path: path.to_path_buf(),
                    source,
                })?;
                let actual = trim_trailing(line);
                if values_match(&record.expected, &actual) {
                    continue;
                }
                mismatches.push(Mismatch {
                    line_number: record.line_number,
                    source_code: record.source_code.clone(),
                    expected: String::from_utf8_lossy(&record.expected).into_owned(),
                    actual: String::from_utf8_lossy(&actual).into_owned(),
                });
            }
        }
    }

    Ok(FileVerdict {
        path: path.to_path_buf(),
        failed: !mismatches.is_empty(),
        mismatches,
    })
}

/// Equality with numeric coercion.
///
/// Byte equality passes outright. Otherwise both sides are parsed as floats,
/// then as integers, and equal parsed values pass despite differing text.
/// Anything that parses as neither keeps the byte comparison's result.
fn values_match(expected: &[u8], actual: &[u8]) -> bool {
    if expected == actual {
        return true;
    }
    let (Ok(expected), Ok(actual)) = (std::str::from_utf8(expected), std::str::from_utf8(actual))
    else {
        return false;
    };
    if let (Ok(expected), Ok(actual)) = (expected.parse::<f64>(), actual.parse::<f64>()) {
        return expected == actual;
    }
    if let (Ok(expected), Ok(actual)) = (expected.parse::<i64>(), actual.parse::<i64>()) {
        return expected == actual;
    }
    false
}

fn trim_trailing(mut line: Vec<u8>) -> Vec<u8> {
    while line.last().is_some_and(|b| b.is_ascii_whitespace()) {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercion_table() {
        let cases: &[(&str, &str, bool)] = &[
            ("3", "3", true),
            ("3.0", "3", true),
            ("4", "4.0", true),
            ("4.0", "4.1", false),
            ("1e2", "100", true),
            ("-0", "0", true),
            ("abc", "abc", true),
            ("abc", "abd", false),
            ("", "", true),
            ("3", "", false),
        ];
        for (expected, actual, outcome) in cases {
            assert_eq!(
                values_match(expected.as_bytes(), actual.as_bytes()),
                *outcome,
                "{expected:?} vs {actual:?}"
            );
        }
    }

    #[test]
    fn trailing_whitespace_is_stripped() {
        assert_eq!(trim_trailing(b"abc \t\r".to_vec()), b"abc".to_vec());
        assert_eq!(trim_trailing(b"".to_vec()), Vec::<u8>::new());
    }
}
