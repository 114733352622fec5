//! Flavor store: the immutable, ordered dataset loaded once at startup
//!
//! The store owns the parsed dataset and never changes after construction.
//! Query operations live in [`crate::query`]; derived views borrow from the
//! store and never copy records back into it.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::DatasetSource;
use crate::models::{Flavor, FlavorDatabase};
use crate::Result;
use chrono::NaiveDate;

/// Dataset compiled into the library, used when no file is configured
pub const EMBEDDED_DATASET: &str = include_str!("../data/flavors.json");

/// Read-only flavor catalog
#[derive(Debug, Clone)]
pub struct FlavorStore {
    database: FlavorDatabase,
}

impl FlavorStore {
    /// Wrap an already parsed dataset
    ///
    /// Duplicate ids are tolerated (lookups return the first match) but
    /// reported at warn level.
    pub fn from_database(database: FlavorDatabase) -> Self {
        let store = Self { database };
        for id in store.duplicate_ids() {
            warn!("Duplicate flavor id '{}' in dataset; first entry wins", id);
        }
        info!(
            "Loaded {} flavors (dataset v{}, updated {})",
            store.len(),
            store.version(),
            store.last_updated()
        );
        store
    }

    /// Parse a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let database: FlavorDatabase = serde_json::from_str(json)?;
        Ok(Self::from_database(database))
    }

    /// Load a dataset file from disk
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Reading dataset from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load the dataset compiled into the library
    pub fn embedded() -> Result<Self> {
        debug!("Using embedded dataset");
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// Load from whichever source configuration resolved to
    pub fn from_source(source: &DatasetSource) -> Result<Self> {
        match source {
            DatasetSource::Embedded => Self::embedded(),
            DatasetSource::File(path) => Self::load(path),
        }
    }

    pub fn version(&self) -> &str {
        &self.database.version
    }

    /// Raw `lastUpdated` string from the dataset
    pub fn last_updated(&self) -> &str {
        &self.database.last_updated
    }

    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        self.database.last_updated_date()
    }

    /// All flavors in dataset order
    pub fn flavors(&self) -> &[Flavor] {
        &self.database.flavors
    }

    pub fn len(&self) -> usize {
        self.database.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.database.flavors.is_empty()
    }

    /// Ids that occur more than once, each reported once, in encounter order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for flavor in &self.database.flavors {
            let id = flavor.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}
