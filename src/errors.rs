//! Module for errors.
use std::{error::Error, fmt::Display, path::PathBuf};

/// Error from the inventory, fetch and check interfaces.
#[derive(Debug)]
pub enum ShamDataErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// Error forwarded from the csv crate
    Csv(::csv::Error),
    /// Error forwarded from serde_json
    Json(::serde_json::Error),
    /// Error forwarded from serde_yaml
    Yaml(::serde_yaml::Error),
    /// Database error
    Database(::rusqlite::Error),
    /// Error forwarded from the strum crate
    StrumError(strum::ParseError),

    // My own errors from this crate
    /// A record is missing a required column.
    MissingField(String),
    /// The output file already exists and the collision policy forbids replacing it.
    OutputExists(PathBuf),
}

impl Display for ShamDataErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::ShamDataErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            Csv(err) => write!(f, "csv error: {}", err),
            Json(err) => write!(f, "json error: {}", err),
            Yaml(err) => write!(f, "yaml error: {}", err),
            Database(err) => write!(f, "database error: {}", err),
            StrumError(err) => write!(f, "error forwarded from strum crate: {}", err),

            MissingField(field) => write!(f, "record is missing field: {}", field),
            OutputExists(path) => write!(f, "output file already exists: {}", path.display()),
        }
    }
}

impl Error for ShamDataErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use crate::errors::ShamDataErr::*;

        match self {
            IO(err) => Some(err),
            Csv(err) => Some(err),
            Json(err) => Some(err),
            Yaml(err) => Some(err),
            Database(err) => Some(err),
            StrumError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<::std::io::Error> for ShamDataErr {
    fn from(err: ::std::io::Error) -> ShamDataErr {
        ShamDataErr::IO(err)
    }
}

impl From<::csv::Error> for ShamDataErr {
    fn from(err: ::csv::Error) -> ShamDataErr {
        ShamDataErr::Csv(err)
    }
}

impl From<::serde_json::Error> for ShamDataErr {
    fn from(err: ::serde_json::Error) -> ShamDataErr {
        ShamDataErr::Json(err)
    }
}

impl From<::serde_yaml::Error> for ShamDataErr {
    fn from(err: ::serde_yaml::Error) -> ShamDataErr {
        ShamDataErr::Yaml(err)
    }
}

impl From<::rusqlite::Error> for ShamDataErr {
    fn from(err: ::rusqlite::Error) -> ShamDataErr {
        ShamDataErr::Database(err)
    }
}

impl From<strum::ParseError> for ShamDataErr {
    fn from(err: strum::ParseError) -> ShamDataErr {
        ShamDataErr::StrumError(err)
    }
}
