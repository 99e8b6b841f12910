//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::DEFAULT_CAPACITY;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of job configurations kept in memory
    pub job_cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// JSON file seeding the in-memory job repository and RDF store
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `JOB_CACHE_CAPACITY` - Cached job configurations (default: 50, must be > 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SEED_FILE` - Optional seed file path
    pub fn from_env() -> Self {
        Self {
            job_cache_capacity: env::var("JOB_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|capacity: &usize| *capacity > 0)
                .unwrap_or(DEFAULT_CAPACITY),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            seed_file: env::var_os("SEED_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            job_cache_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
            seed_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.job_cache_capacity, 50);
        assert_eq!(config.server_port, 3000);
        assert!(config.seed_file.is_none());
    }

    // Env vars are process-wide, so every env-dependent case lives in this
    // one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("JOB_CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        env::remove_var("SEED_FILE");

        let config = Config::from_env();
        assert_eq!(config.job_cache_capacity, 50);
        assert_eq!(config.server_port, 3000);
        assert!(config.seed_file.is_none());

        env::set_var("JOB_CACHE_CAPACITY", "0");
        assert_eq!(Config::from_env().job_cache_capacity, 50);

        env::set_var("JOB_CACHE_CAPACITY", "8");
        env::set_var("SEED_FILE", "/etc/rdfizer/seed.json");
        let config = Config::from_env();
        assert_eq!(config.job_cache_capacity, 8);
        assert_eq!(config.seed_file, Some(PathBuf::from("/etc/rdfizer/seed.json")));

        env::remove_var("JOB_CACHE_CAPACITY");
        env::remove_var("SEED_FILE");
    }
}
