//! Vocabulary Module
//!
//! Maps CIDOC-CRM class identifiers to ALIADA classes: the static tables
//! first, then the RDF store.

mod tables;

use std::sync::Arc;

use tracing::debug;

use crate::cache::{from_fn, Resolver};
use crate::datasource::{RdfStore, RdfStoreResolver};
use crate::error::Result;

pub use tables::VocabularyTables;

/// Class returned when neither the tables nor the store know a CRM class.
pub const DEFAULT_ALIADA_CLASS: &str = "http://erlangen-crm.org/120111/E19_Physical_Object";

// == Class Mapper ==
/// Resolves CRM classes through the static tables and the RDF store.
///
/// Each lookup is a resolver chain, table first, then store. Results are not
/// cached: every table miss goes to the store.
#[derive(Clone)]
pub struct ClassMapper {
    classes: Arc<dyn Resolver<String, String>>,
    event_types: Arc<dyn Resolver<String, String>>,
}

impl ClassMapper {
    pub fn new(tables: VocabularyTables, store: Arc<dyn RdfStore>) -> Self {
        let tables = Arc::new(tables);

        let class_tables = tables.clone();
        let class_table = from_fn(move |crm: &String| -> Result<Option<String>> {
            Ok(class_tables.class(crm).map(|uri| uri.to_string()))
        });
        let event_table = from_fn(move |crm: &String| -> Result<Option<String>> {
            Ok(tables.event_type(crm).map(|uri| uri.to_string()))
        });

        Self {
            classes: Arc::new(Resolver::<String, String>::or_else(
                class_table,
                RdfStoreResolver::new(store.clone()),
            )),
            event_types: Arc::new(Resolver::<String, String>::or_else(
                event_table,
                RdfStoreResolver::new(store),
            )),
        }
    }

    /// Returns the ALIADA class for `crm_class`, falling back to
    /// [`DEFAULT_ALIADA_CLASS`].
    pub fn aliada_class_from(&self, crm_class: &str) -> Result<String> {
        let uri = self.classes.resolve(&crm_class.to_string())?;
        if uri.is_none() {
            debug!(crm_class, "no mapping, using default class");
        }
        Ok(uri.unwrap_or_else(|| DEFAULT_ALIADA_CLASS.to_string()))
    }

    /// Returns the ALIADA class for a CRM event type, if any layer knows it.
    pub fn aliada_event_type_class_from(&self, crm_class: &str) -> Result<Option<String>> {
        self.event_types.resolve(&crm_class.to_string())
    }
}
