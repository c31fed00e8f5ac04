use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::NaiveDateTime;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};
use tracing::{info, warn};

use super::FetchResultSet;
use crate::errors::ShamDataErr;

/// What to do when a result file with the same timestamp already exists.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, EnumString, AsRefStr, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CollisionPolicy {
    /// Append `_1`, `_2`, ... to the file stem until the name is free.
    #[default]
    Suffix,
    /// Replace the existing file.
    Overwrite,
    /// Refuse to write.
    Fail,
}

impl CollisionPolicy {
    /// Parse a policy from its name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ShamDataErr> {
        Ok(CollisionPolicy::from_str(name)?)
    }
}

/// Writes result sets to timestamped json files.
#[derive(Clone, Debug)]
pub struct ResultsWriter {
    dir: PathBuf,
    policy: CollisionPolicy,
}

impl ResultsWriter {
    const PREFIX: &'static str = "fetch_results_";
    const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.6f";

    /// Create a writer for a directory.
    pub fn new(dir: &dyn AsRef<Path>, policy: CollisionPolicy) -> Self {
        ResultsWriter {
            dir: dir.as_ref().to_path_buf(),
            policy,
        }
    }

    /// The name of the results file for a timestamp, ignoring collisions.
    pub fn file_name(timestamp: &NaiveDateTime) -> String {
        format!(
            "{}{}.json",
            Self::PREFIX,
            timestamp.format(Self::TIMESTAMP_FORMAT)
        )
    }

    /// Write the results, returning the path of the file written.
    ///
    /// The document is serialized before any file is created.
    pub fn write(
        &self,
        results: &FetchResultSet,
        timestamp: &NaiveDateTime,
    ) -> Result<PathBuf, ShamDataErr> {
        let text = serde_json::to_string_pretty(results)?;
        let file_name = Self::file_name(timestamp);
        let stem = file_name.trim_end_matches(".json");

        let path = match self.policy {
            CollisionPolicy::Overwrite => {
                let path = self.dir.join(&file_name);
                std::fs::write(&path, &text)?;
                path
            }
            CollisionPolicy::Fail => {
                let path = self.dir.join(&file_name);
                self.create_new(&path, &text)?
                    .ok_or(ShamDataErr::OutputExists(path.clone()))?;
                path
            }
            CollisionPolicy::Suffix => {
                let mut attempt = 0;
                loop {
                    let path = if attempt == 0 {
                        self.dir.join(&file_name)
                    } else {
                        self.dir.join(format!("{}_{}.json", stem, attempt))
                    };

                    if self.create_new(&path, &text)?.is_some() {
                        break path;
                    }

                    warn!(path = %path.display(), "results file exists, trying next suffix");
                    attempt += 1;
                }
            }
        };

        info!(path = %path.display(), "wrote results");

        Ok(path)
    }

    // Returns None if the file already exists.
    fn create_new(&self, path: &Path, text: &str) -> Result<Option<()>, ShamDataErr> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        file.write_all(text.as_bytes())?;

        Ok(Some(()))
    }
}
