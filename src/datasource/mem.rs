//! In-memory collaborators, used by the service binary and by tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::datasource::{JobConfiguration, JobConfigurationRepository, RdfStore};
use crate::error::{LookupError, Result};

fn poisoned(what: &str) -> LookupError {
    LookupError::Resolver(format!("{what} lock poisoned"))
}

// == Job Repository ==
/// Job configurations kept in a map, keyed by id.
#[derive(Debug, Default)]
pub struct MemJobRepository {
    jobs: RwLock<HashMap<i32, JobConfiguration>>,
}

impl MemJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_jobs(jobs: impl IntoIterator<Item = JobConfiguration>) -> Self {
        Self {
            jobs: RwLock::new(jobs.into_iter().map(|job| (job.id, job)).collect()),
        }
    }

    /// Stores `job`, replacing any configuration with the same id.
    pub fn save(&self, job: JobConfiguration) -> Result<()> {
        self.jobs
            .write()
            .map_err(|_| poisoned("job repository"))?
            .insert(job.id, job);
        Ok(())
    }

    /// Deletes the configuration with the given id, returning it.
    pub fn delete(&self, id: i32) -> Result<Option<JobConfiguration>> {
        Ok(self
            .jobs
            .write()
            .map_err(|_| poisoned("job repository"))?
            .remove(&id))
    }

    pub fn len(&self) -> usize {
        self.jobs.read().map(|jobs| jobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobConfigurationRepository for MemJobRepository {
    fn find_one(&self, id: i32) -> Result<Option<JobConfiguration>> {
        Ok(self
            .jobs
            .read()
            .map_err(|_| poisoned("job repository"))?
            .get(&id)
            .cloned())
    }
}

// == RDF Store ==
/// CRM to ALIADA class mappings kept in a map.
#[derive(Debug, Default)]
pub struct MemRdfStore {
    classes: RwLock<HashMap<String, String>>,
}

impl MemRdfStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mappings(mappings: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            classes: RwLock::new(mappings.into_iter().collect()),
        }
    }

    pub fn insert(&self, crm_class: impl Into<String>, aliada_class: impl Into<String>) -> Result<()> {
        self.classes
            .write()
            .map_err(|_| poisoned("rdf store"))?
            .insert(crm_class.into(), aliada_class.into());
        Ok(())
    }

    pub fn remove(&self, crm_class: &str) -> Result<Option<String>> {
        Ok(self
            .classes
            .write()
            .map_err(|_| poisoned("rdf store"))?
            .remove(crm_class))
    }
}

impl RdfStore for MemRdfStore {
    fn crm_to_aliada_class(&self, crm_class: &str) -> Result<Option<String>> {
        Ok(self
            .classes
            .read()
            .map_err(|_| poisoned("rdf store"))?
            .get(crm_class)
            .cloned())
    }
}
