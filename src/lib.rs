//! RDFizer Cache - in-memory front of the RDFizer datasource layer
//!
//! Provides a bounded read-through LRU cache of job configurations and
//! CIDOC-CRM to ALIADA vocabulary lookups.

pub mod api;
pub mod cache;
pub mod config;
pub mod datasource;
pub mod error;
pub mod lookup;
pub mod models;
pub mod vocabulary;

pub use api::AppState;
pub use config::Config;
pub use lookup::DatasourceCache;
