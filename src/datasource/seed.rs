//! Seed data for the in-memory collaborators.
//!
//! A seed file is JSON of the form:
//!
//! ```json
//! {
//!   "jobs": [{ "id": 1, "datafile": "...", "format": "lido", ... }],
//!   "classes": { "E5": "http://erlangen-crm.org/current/E5_Event" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::datasource::{JobConfiguration, MemJobRepository, MemRdfStore};

/// Contents of a seed file. Both sections are optional.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub jobs: Vec<JobConfiguration>,
    #[serde(default)]
    pub classes: HashMap<String, String>,
}

impl Seed {
    /// Reads and parses a seed file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed file {}", path.display()))
    }

    /// Builds the in-memory repository and RDF store from this seed.
    pub fn into_stores(self) -> (MemJobRepository, MemRdfStore) {
        (
            MemJobRepository::from_jobs(self.jobs),
            MemRdfStore::from_mappings(self.classes),
        )
    }
}
