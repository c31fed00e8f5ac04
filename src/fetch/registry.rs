use std::collections::HashMap;

use super::{ApiRouter, Fetcher};

/// The classification that marks a source as reachable through an API.
pub const API_AVAILABLE: &str = "API Available";

/// Maps integration classifications to fetchers. Lookups are exact and case sensitive.
pub struct Registry {
    routes: HashMap<String, Box<dyn Fetcher>>,
}

impl Registry {
    /// An empty registry. Every record will be skipped.
    pub fn new() -> Self {
        Registry {
            routes: HashMap::new(),
        }
    }

    /// Bind a classification to a fetcher, replacing any earlier binding.
    pub fn register(&mut self, classification: impl Into<String>, fetcher: Box<dyn Fetcher>) {
        self.routes.insert(classification.into(), fetcher);
    }

    /// Find the fetcher for a classification.
    pub fn lookup(&self, classification: &str) -> Option<&dyn Fetcher> {
        self.routes.get(classification).map(|fetcher| fetcher.as_ref())
    }

    /// Get the registered classifications.
    pub fn classifications(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry::new();
        registry.register(API_AVAILABLE, Box::new(ApiRouter));
        registry
    }
}
