//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body of the class lookups (`GET /classes`, `GET /event-types`)
#[derive(Debug, Clone, Serialize)]
pub struct ClassResponse {
    /// The requested CRM class
    pub crm_class: String,
    /// The ALIADA class it maps to
    pub aliada_class: String,
}

impl ClassResponse {
    pub fn new(crm_class: impl Into<String>, aliada_class: impl Into<String>) -> Self {
        Self {
            crm_class: crm_class.into(),
            aliada_class: aliada_class.into(),
        }
    }
}

/// Response body of `DELETE /jobs/:id`
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// The job whose cached configuration was dropped
    pub id: i32,
}

impl InvalidateResponse {
    pub fn new(id: i32) -> Self {
        Self {
            message: format!("Job {} evicted from cache", id),
            id,
        }
    }
}

/// Response body of `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Misses filled from the repository
    pub loads: u64,
    /// Misses where the repository failed
    pub load_failures: u64,
    /// Number of LRU evictions
    pub evictions: u64,
    /// Current number of cached job configurations
    pub total_entries: usize,
    /// Maximum number of cached job configurations
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, capacity: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            loads: stats.loads,
            load_failures: stats.load_failures,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
