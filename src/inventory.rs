//! The inventory of known external data sources.

use std::{io::Write, path::Path};

use tracing::debug;

use crate::errors::ShamDataErr;

/// Column holding the display name of a source.
pub const SOURCE_FIELD: &str = "Source";

/// Column holding the integration classification of a source.
pub const INTEGRATION_POTENTIAL_FIELD: &str = "Integration_Potential";

/// Location of the inventory relative to the data root.
pub const DEFAULT_INVENTORY: &str = "data/egyptian-archaeological-data-inventory.csv";

/// One row of the inventory. Every column of the header is kept as a string field, in header
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRecord {
    fields: Vec<(String, String)>,
}

impl SourceRecord {
    /// Build a record from `(column, value)` pairs.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        SourceRecord {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get the value of a column, if the record has it. With a repeated column the last value
    /// wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key == column)
            .map(|(_, val)| val.as_str())
    }

    /// Get the value of a column that must be present.
    pub fn require(&self, column: &str) -> Result<&str, ShamDataErr> {
        self.get(column)
            .ok_or_else(|| ShamDataErr::MissingField(column.to_owned()))
    }

    /// The column names, in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// The display name of the source.
    pub fn source(&self) -> Result<&str, ShamDataErr> {
        self.require(SOURCE_FIELD)
    }

    /// The integration classification of the source.
    pub fn integration_potential(&self) -> Result<&str, ShamDataErr> {
        self.require(INTEGRATION_POTENTIAL_FIELD)
    }
}

/// Load the inventory, one record per data row in file order.
///
/// A missing or unreadable file, or a row whose length does not match the header, is an error.
pub fn load_inventory(path: &dyn AsRef<Path>) -> Result<Vec<SourceRecord>, ShamDataErr> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let headers = reader.headers()?.clone();

    let sources = reader
        .records()
        .map(|res| {
            res.map(|row| SourceRecord::new(headers.iter().zip(row.iter())))
                .map_err(ShamDataErr::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        path = %path.as_ref().display(),
        count = sources.len(),
        "loaded inventory"
    );

    Ok(sources)
}

/// Print the inventory as a table of source names and classifications.
///
/// Columns a record lacks are shown as `-`.
pub fn write_listing(sources: &[SourceRecord], out: &mut dyn Write) -> Result<(), ShamDataErr> {
    if sources.is_empty() {
        writeln!(out, "No sources in inventory.")?;
        return Ok(());
    }

    writeln!(out, "{:<40} : {}", "SOURCE", "INTEGRATION_POTENTIAL")?;

    let blank = "-";

    for source in sources {
        let name = source.get(SOURCE_FIELD).unwrap_or(blank);
        let potential = source.get(INTEGRATION_POTENTIAL_FIELD).unwrap_or(blank);
        writeln!(out, "{:<40} : {}", name, potential)?;
    }

    Ok(())
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use std::fs;

    use tempdir::TempDir;

    fn write_inventory(tmp: &TempDir, text: &str) -> std::path::PathBuf {
        let path = tmp.path().join("inventory.csv");
        fs::write(&path, text).expect("Error writing inventory.");
        path
    }

    #[test]
    fn test_load_preserves_order_and_columns() {
        let tmp = TempDir::new("sham-inventory").unwrap();
        let path = write_inventory(
            &tmp,
            "Source,Integration_Potential,Notes\n\
             NASA Earthdata,API Available,Landsat\n\
             Petrie Notebooks,Manual Download,\n\
             British Museum,API Available,\"SPARQL, linked data\"\n",
        );

        let sources = load_inventory(&path).expect("Error loading inventory.");

        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].source().unwrap(), "NASA Earthdata");
        assert_eq!(sources[1].source().unwrap(), "Petrie Notebooks");
        assert_eq!(sources[2].source().unwrap(), "British Museum");
        assert_eq!(sources[2].get("Notes"), Some("SPARQL, linked data"));
        assert_eq!(sources[1].get("Notes"), Some(""));

        for source in &sources {
            let keys: Vec<&str> = source.keys().collect();
            assert_eq!(keys, vec!["Source", "Integration_Potential", "Notes"]);
        }
    }

    #[test]
    fn test_load_header_only() {
        let tmp = TempDir::new("sham-inventory").unwrap();
        let path = write_inventory(&tmp, "Source,Integration_Potential\n");

        assert!(load_inventory(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new("sham-inventory").unwrap();
        let path = tmp.path().join("nope.csv");

        assert!(load_inventory(&path).is_err());
    }

    #[test]
    fn test_load_ragged_row() {
        let tmp = TempDir::new("sham-inventory").unwrap();
        let path = write_inventory(
            &tmp,
            "Source,Integration_Potential\nNASA Earthdata,API Available,extra\n",
        );

        match load_inventory(&path) {
            Err(ShamDataErr::Csv(_)) => {}
            other => panic!("expected csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_require_missing_field() {
        let record = SourceRecord::new(vec![("Source", "Giza")]);

        assert_eq!(record.source().unwrap(), "Giza");
        match record.integration_potential() {
            Err(ShamDataErr::MissingField(field)) => {
                assert_eq!(field, INTEGRATION_POTENTIAL_FIELD)
            }
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_column_last_value_wins() {
        let tmp = TempDir::new("sham-inventory").unwrap();
        let path = write_inventory(
            &tmp,
            "Source,Integration_Potential,Source\nA,API Available,B\n",
        );

        let sources = load_inventory(&path).unwrap();

        assert_eq!(sources[0].source().unwrap(), "B");
        assert_eq!(sources[0].integration_potential().unwrap(), "API Available");
    }

    fn listing(sources: &[SourceRecord]) -> String {
        let mut out = Vec::new();
        write_listing(sources, &mut out).expect("Error writing listing.");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_listing() {
        let sources = vec![
            SourceRecord::new(vec![
                (SOURCE_FIELD, "NASA Earthdata"),
                (INTEGRATION_POTENTIAL_FIELD, "API Available"),
            ]),
            SourceRecord::new(vec![
                (SOURCE_FIELD, "Petrie Notebooks"),
                (INTEGRATION_POTENTIAL_FIELD, "Manual Download"),
            ]),
        ];

        let expected = format!(
            "{:<40} : {}\n{:<40} : {}\n{:<40} : {}\n",
            "SOURCE",
            "INTEGRATION_POTENTIAL",
            "NASA Earthdata",
            "API Available",
            "Petrie Notebooks",
            "Manual Download"
        );

        assert_eq!(listing(&sources), expected);
    }

    #[test]
    fn test_listing_empty_inventory() {
        assert_eq!(listing(&[]), "No sources in inventory.\n");
    }

    #[test]
    fn test_listing_missing_column() {
        let sources = vec![
            SourceRecord::new(vec![(SOURCE_FIELD, "Giza Archives")]),
            SourceRecord::new(vec![(INTEGRATION_POTENTIAL_FIELD, "API Available")]),
        ];

        let text = listing(&sources);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("{:<40} : -", "Giza Archives"));
        assert_eq!(lines[2], format!("{:<40} : API Available", "-"));
    }
}
