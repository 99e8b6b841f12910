//! Datasource Module
//!
//! Collaborators the cache falls back to: the job configuration repository
//! and the RDF store that knows CRM to ALIADA class mappings.
//!
//! Only in-memory implementations live here; real backends plug in through
//! the traits.

mod job;
mod mem;
pub mod seed;

use std::sync::Arc;

use crate::cache::Resolver;
use crate::error::Result;

pub use job::JobConfiguration;
pub use mem::{MemJobRepository, MemRdfStore};
pub use seed::Seed;

// == Collaborator Traits ==
/// Persistent storage of job configurations.
pub trait JobConfigurationRepository: Send + Sync {
    /// Finds the configuration with the given id.
    fn find_one(&self, id: i32) -> Result<Option<JobConfiguration>>;
}

/// Remote RDF store holding vocabulary mappings.
pub trait RdfStore: Send + Sync {
    /// Returns the ALIADA class mapped to `crm_class`, if the store has one.
    fn crm_to_aliada_class(&self, crm_class: &str) -> Result<Option<String>>;
}

// == Repository Resolver ==
/// Adapts a [`JobConfigurationRepository`] into the resolver of a
/// read-through cache of shared job configurations.
#[derive(Clone)]
pub struct RepositoryResolver {
    repository: Arc<dyn JobConfigurationRepository>,
}

impl RepositoryResolver {
    pub fn new(repository: Arc<dyn JobConfigurationRepository>) -> Self {
        Self { repository }
    }
}

impl Resolver<i32, Arc<JobConfiguration>> for RepositoryResolver {
    fn resolve(&self, id: &i32) -> Result<Option<Arc<JobConfiguration>>> {
        Ok(self.repository.find_one(*id)?.map(Arc::new))
    }
}

// == RDF Store Resolver ==
/// Adapts an [`RdfStore`] into a resolver of CRM class -> ALIADA class.
#[derive(Clone)]
pub struct RdfStoreResolver {
    store: Arc<dyn RdfStore>,
}

impl RdfStoreResolver {
    pub fn new(store: Arc<dyn RdfStore>) -> Self {
        Self { store }
    }
}

impl Resolver<String, String> for RdfStoreResolver {
    fn resolve(&self, crm_class: &String) -> Result<Option<String>> {
        self.store.crm_to_aliada_class(crm_class)
    }
}
