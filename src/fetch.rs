//! Dispatch inventory records to source specific fetchers.

use std::{collections::BTreeMap, io::Write, path::PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::{errors::ShamDataErr, inventory::SourceRecord};

pub use self::output::{CollisionPolicy, ResultsWriter};
pub use self::registry::{Registry, API_AVAILABLE};
pub use self::sources::{ApiRouter, SourceRoute};

mod output;
mod registry;
mod sources;

/// Whatever a fetcher retrieved for one source.
pub type Payload = serde_json::Value;

/// Retrieved payloads keyed by source name.
pub type FetchResultSet = BTreeMap<String, Payload>;

/// A retrieval strategy for the sources of one classification.
pub trait Fetcher {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// Retrieve the data for a source. `Ok(None)` means nothing was retrieved.
    fn fetch(&self, source: &SourceRecord) -> Result<Option<Payload>, ShamDataErr>;
}

/// Walks the inventory and hands every record with a registered classification to its fetcher.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a registry.
    pub fn new(registry: &'a Registry) -> Self {
        Dispatcher { registry }
    }

    /// Run every record through the registry, writing progress lines to `out`.
    ///
    /// Any error aborts the whole run and no result set is returned.
    pub fn dispatch(
        &self,
        sources: &[SourceRecord],
        out: &mut dyn Write,
    ) -> Result<FetchResultSet, ShamDataErr> {
        let mut results = FetchResultSet::new();

        writeln!(out, "🏺 Starting Egyptian Archaeological Data Fetch...")?;

        for record in sources {
            let potential = record.integration_potential()?;

            let fetcher = match self.registry.lookup(potential) {
                Some(fetcher) => fetcher,
                None => continue,
            };

            let source = record.source()?;
            writeln!(out, "Fetching from {}...", source)?;
            debug!(source, fetcher = fetcher.name(), "dispatching");

            if let Some(payload) = fetcher.fetch(record)? {
                results.insert(source.to_owned(), payload);
            }
        }

        writeln!(out, "✅ Data fetching complete!")?;
        info!(fetched = results.len(), "dispatch complete");

        Ok(results)
    }

    /// Dispatch, then save the results stamped with the local time the loop finished.
    ///
    /// Nothing is written if the dispatch fails.
    pub fn dispatch_and_save(
        &self,
        sources: &[SourceRecord],
        writer: &ResultsWriter,
        out: &mut dyn Write,
    ) -> Result<PathBuf, ShamDataErr> {
        let results = self.dispatch(sources, out)?;
        out.flush()?;

        let timestamp = Local::now().naive_local();

        writer.write(&results, &timestamp)
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
