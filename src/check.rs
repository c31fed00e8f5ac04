//! Existence and parse checks for the local data set.
//!
//! Every artifact is checked on its own. A missing or corrupt file is reported and the run moves
//! on to the next one.

use std::{
    error::Error,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::errors::ShamDataErr;

pub use self::manifest::{ArtifactKind, Manifest, ManifestEntry};
pub use self::report::{CheckReport, CheckStatus, Detail, Summary};

mod manifest;
mod report;

/// Checks the artifacts of a manifest against a data root.
#[derive(Clone, Debug)]
pub struct IntegrityChecker {
    root: PathBuf,
    manifest: Manifest,
}

impl IntegrityChecker {
    /// Create a checker. Manifest paths are resolved against `root`.
    pub fn new(root: &dyn AsRef<Path>, manifest: Manifest) -> Self {
        IntegrityChecker {
            root: root.as_ref().to_path_buf(),
            manifest,
        }
    }

    /// Check every artifact, printing one section per kind to `out`.
    ///
    /// Only a failure to write to `out` is an error.
    pub fn run(&self, out: &mut dyn Write) -> Result<Summary, ShamDataErr> {
        let mut summary = Summary::default();

        writeln!(out, "🏺 Testing SHAM Archaeological Data...")?;

        for kind in ArtifactKind::iter() {
            writeln!(out, "\n{}", kind.section_title())?;

            for report in self.check_kind(kind) {
                writeln!(out, "{}", report)?;
                summary.record(&report);
            }
        }

        writeln!(out, "\n✅ Data testing complete!")?;

        info!(
            passed = summary.passed,
            failed = summary.failed,
            missing = summary.missing,
            "integrity check complete"
        );

        Ok(summary)
    }

    /// Check all the artifacts of one kind, in manifest order.
    pub fn check_kind(&self, kind: ArtifactKind) -> Vec<CheckReport> {
        self.manifest
            .entries(kind)
            .map(|entry| self.check_entry(entry))
            .collect()
    }

    /// Check a single artifact.
    pub fn check_entry(&self, entry: &ManifestEntry) -> CheckReport {
        let full_path = self.root.join(&entry.path);

        let status = if !full_path.exists() {
            CheckStatus::NotFound
        } else {
            let res = match entry.kind {
                ArtifactKind::Json => check_json(&full_path),
                ArtifactKind::Csv => check_csv(&full_path),
                ArtifactKind::Database => check_database(&full_path, &entry.tables),
                ArtifactKind::Image => check_image(&full_path),
            };

            match res {
                Ok(detail) => CheckStatus::Passed(detail),
                Err(err) => CheckStatus::Failed(failure_message(&err)),
            }
        };

        debug!(path = %entry.path.display(), kind = entry.kind.as_ref(), ?status, "checked");

        CheckReport::new(entry.kind, entry.path.clone(), status)
    }
}

fn check_json(path: &Path) -> Result<Detail, ShamDataErr> {
    let file = File::open(path)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    Ok(match value {
        serde_json::Value::Array(items) => Detail::Elements(items.len()),
        _ => Detail::ValidJson,
    })
}

fn check_csv(path: &Path) -> Result<Detail, ShamDataErr> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut rows = 0;
    for record in reader.records() {
        record?;
        rows += 1;
    }

    Ok(Detail::Rows(rows))
}

fn check_database(path: &Path, tables: &[String]) -> Result<Detail, ShamDataErr> {
    let db_conn =
        rusqlite::Connection::open_with_flags(path, rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    // Stops at the first failing table, nothing partial is reported.
    let counts = tables
        .iter()
        .map(|table| {
            let sql = format!("SELECT COUNT(*) FROM \"{}\"", table.replace('"', "\"\""));
            db_conn
                .query_row(&sql, [], |row| row.get::<_, i64>(0))
                .map(|n| (table.clone(), n))
        })
        .collect::<Result<Vec<_>, _>>()?;

    db_conn.close().map_err(|(_, err)| err)?;

    Ok(Detail::Counts(counts))
}

fn check_image(path: &Path) -> Result<Detail, ShamDataErr> {
    Ok(Detail::Bytes(std::fs::metadata(path)?.len()))
}

// Reports carry the message of the underlying error without the crate's prefix.
fn failure_message(err: &ShamDataErr) -> String {
    err.source()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
