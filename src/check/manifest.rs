use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::errors::ShamDataErr;

/// The expected shape of an artifact.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    /// A json document.
    Json,
    /// A csv file with a header row.
    Csv,
    /// An sqlite database.
    Database,
    /// An image, only its size is checked.
    Image,
}

impl ArtifactKind {
    /// Header printed before the reports for this kind.
    pub fn section_title(self) -> &'static str {
        match self {
            ArtifactKind::Json => "📊 JSON Data Files:",
            ArtifactKind::Csv => "📈 CSV Data Files:",
            ArtifactKind::Database => "🗄️  Database:",
            ArtifactKind::Image => "🖼️  Image Files:",
        }
    }
}

/// An artifact expected on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Path relative to the data root.
    pub path: PathBuf,
    /// What the file should hold.
    pub kind: ArtifactKind,
    /// Tables to count, only used for databases.
    #[serde(default = "default_tables", skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<String>,
}

fn default_tables() -> Vec<String> {
    vec!["sites".to_owned(), "objects".to_owned(), "surveys".to_owned()]
}

impl ManifestEntry {
    /// Create an entry. Databases get the default table list.
    pub fn new(path: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        let tables = if kind == ArtifactKind::Database {
            default_tables()
        } else {
            vec![]
        };

        ManifestEntry {
            path: path.into(),
            kind,
            tables,
        }
    }

    /// Replace the table list of a database entry.
    pub fn with_tables<S: Into<String>>(mut self, tables: impl IntoIterator<Item = S>) -> Self {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }
}

/// The list of artifacts to check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Entries in check order within each kind.
    pub artifacts: Vec<ManifestEntry>,
}

impl Manifest {
    /// Read a manifest from a yaml file.
    pub fn load(path: &dyn AsRef<Path>) -> Result<Self, ShamDataErr> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&text)
    }

    /// Parse a manifest from yaml text.
    pub fn from_yaml(text: &str) -> Result<Self, ShamDataErr> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// The entries of one kind, in manifest order.
    pub fn entries(&self, kind: ArtifactKind) -> impl Iterator<Item = &ManifestEntry> {
        self.artifacts.iter().filter(move |entry| entry.kind == kind)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        use ArtifactKind::*;

        Manifest {
            artifacts: vec![
                ManifestEntry::new("museum/met_egyptian_objects.json", Json),
                ManifestEntry::new("museum/global_egyptian_objects.json", Json),
                ManifestEntry::new("excavation/papyrus_samples.json", Json),
                ManifestEntry::new("excavation/egypt_archaeology_sample.csv", Csv),
                ManifestEntry::new("geophysical/magnetometry_survey.csv", Csv),
                ManifestEntry::new("sham_test.db", Database),
                ManifestEntry::new("satellite/egypt_landsat_sample.tif", Image),
                ManifestEntry::new("maps/napoleon_egypt_map.jpg", Image),
                ManifestEntry::new("maps/roberts_temple_karnak.jpg", Image),
            ],
        }
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.entries(ArtifactKind::Json).count(), 3);
        assert_eq!(manifest.entries(ArtifactKind::Csv).count(), 2);
        assert_eq!(manifest.entries(ArtifactKind::Image).count(), 3);

        let dbs: Vec<_> = manifest.entries(ArtifactKind::Database).collect();
        assert_eq!(dbs.len(), 1);
        assert_eq!(dbs[0].path, PathBuf::from("sham_test.db"));
        assert_eq!(dbs[0].tables, vec!["sites", "objects", "surveys"]);
    }

    #[test]
    fn test_manifest_from_yaml() {
        let text = "
artifacts:
  - path: museum/objects.json
    kind: json
  - path: index.db
    kind: database
  - path: other.db
    kind: database
    tables: [digs]
  - path: maps/karnak.jpg
    kind: image
";
        let manifest = Manifest::from_yaml(text).expect("Error parsing manifest.");

        assert_eq!(manifest.artifacts.len(), 4);
        assert_eq!(manifest.artifacts[0].kind, ArtifactKind::Json);
        assert_eq!(manifest.artifacts[1].tables, vec!["sites", "objects", "surveys"]);
        assert_eq!(manifest.artifacts[2].tables, vec!["digs"]);
        assert_eq!(
            manifest.artifacts[3].path,
            PathBuf::from("maps/karnak.jpg")
        );
    }

    #[test]
    fn test_manifest_bad_kind() {
        let text = "artifacts:\n  - path: a.png\n    kind: picture\n";
        assert!(Manifest::from_yaml(text).is_err());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ArtifactKind::from_str("csv").unwrap(), ArtifactKind::Csv);
        assert_eq!(ArtifactKind::Database.as_ref(), "database");
    }
}
