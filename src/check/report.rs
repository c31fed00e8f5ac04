use std::{fmt, path::PathBuf};

use super::ArtifactKind;

/// What a successful check found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Detail {
    /// A json array with this many elements.
    Elements(usize),
    /// Any other valid json document.
    ValidJson,
    /// Number of data rows in a csv file.
    Rows(usize),
    /// Row counts per table, in query order.
    Counts(Vec<(String, i64)>),
    /// Size of the file on disk.
    Bytes(u64),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Detail::*;

        match self {
            Elements(n) => write!(f, "{}", n),
            ValidJson => write!(f, "Valid JSON"),
            Rows(n) => write!(f, "{} rows loaded", n),
            Counts(counts) => {
                for (i, (table, n)) in counts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", n, table)?;
                }
                Ok(())
            }
            Bytes(n) => write!(f, "{} bytes", n),
        }
    }
}

/// Outcome of checking one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    /// The artifact exists and has the expected shape.
    Passed(Detail),
    /// The artifact exists but could not be read.
    Failed(String),
    /// The artifact does not exist.
    NotFound,
}

/// The status of one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// What was checked.
    pub kind: ArtifactKind,
    /// Path as listed in the manifest.
    pub path: PathBuf,
    /// The outcome.
    pub status: CheckStatus,
}

impl CheckReport {
    /// Create a report.
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, status: CheckStatus) -> Self {
        CheckReport {
            kind,
            path: path.into(),
            status,
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let path = self.path.display();

        // Databases are reported under a fixed label.
        match (&self.status, self.kind) {
            (CheckStatus::Passed(detail), ArtifactKind::Database) => {
                write!(f, "✅ Database: {}", detail)
            }
            (CheckStatus::Failed(err), ArtifactKind::Database) => write!(f, "❌ Database: {}", err),
            (CheckStatus::NotFound, ArtifactKind::Database) => {
                write!(f, "⚠️  Database: {} not found", path)
            }
            (CheckStatus::Passed(detail), _) => write!(f, "✅ {}: {}", path, detail),
            (CheckStatus::Failed(err), _) => write!(f, "❌ {}: {}", path, err),
            (CheckStatus::NotFound, _) => write!(f, "⚠️  {}: File not found", path),
        }
    }
}

/// Tally of report outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Artifacts that passed.
    pub passed: usize,
    /// Artifacts that exist but failed.
    pub failed: usize,
    /// Artifacts that were not found.
    pub missing: usize,
}

impl Summary {
    /// Count a report.
    pub fn record(&mut self, report: &CheckReport) {
        match report.status {
            CheckStatus::Passed(_) => self.passed += 1,
            CheckStatus::Failed(_) => self.failed += 1,
            CheckStatus::NotFound => self.missing += 1,
        }
    }
}
