//! Job configuration records.

use serde::{Deserialize, Serialize};

/// Settings of one RDFizer conversion job, as kept by the job repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfiguration {
    /// Job identifier
    pub id: i32,
    /// Path of the input file being converted
    pub datafile: String,
    /// Input record format (e.g. "lido", "marcxml")
    pub format: String,
    /// Base namespace for minted resource URIs
    pub namespace: String,
    /// Named graph the triples are published into
    pub graph: String,
    /// SPARQL update endpoint of the target store
    pub sparql_endpoint: String,
}

impl JobConfiguration {
    /// Creates a configuration with the given id and format and empty
    /// locations.
    pub fn new(id: i32, format: impl Into<String>) -> Self {
        Self {
            id,
            datafile: String::new(),
            format: format.into(),
            namespace: String::new(),
            graph: String::new(),
            sparql_endpoint: String::new(),
        }
    }
}
