#![deny(missing_docs)]
//! Inventory-driven fetch dispatch and integrity checks for the SHAM archaeological data set.
//!
//! Two independent tools are built on this library. `shamfetch` loads the inventory of external
//! data sources and dispatches the ones with a registered classification to their fetchers.
//! `shamcheck` verifies that the local data files exist and can be parsed.

//
// Public API
//
pub use check::{
    ArtifactKind, CheckReport, CheckStatus, Detail, IntegrityChecker, Manifest, ManifestEntry,
    Summary,
};
pub use cmd_line::CommonCmdLineArgs;
pub use errors::ShamDataErr;
pub use fetch::{
    ApiRouter, CollisionPolicy, Dispatcher, FetchResultSet, Fetcher, Payload, Registry,
    ResultsWriter, SourceRoute, API_AVAILABLE,
};
pub use inventory::{
    load_inventory, write_listing, SourceRecord, DEFAULT_INVENTORY, INTEGRATION_POTENTIAL_FIELD,
    SOURCE_FIELD,
};

//
// Implementation only
//
mod check;
mod cmd_line;
mod errors;
mod fetch;
mod inventory;
