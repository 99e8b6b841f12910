//! API Handlers
//!
//! HTTP request handlers for each lookup endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::datasource::JobConfiguration;
use crate::error::{LookupError, Result};
use crate::lookup::DatasourceCache;
use crate::models::{ClassQuery, ClassResponse, HealthResponse, InvalidateResponse, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Vocabulary lookups and job configuration cache
    pub cache: Arc<DatasourceCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: DatasourceCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Runs a lookup on the blocking pool; misses may call into the
    /// repository or the RDF store.
    async fn lookup<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DatasourceCache) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let cache = self.cache.clone();
        tokio::task::spawn_blocking(move || f(&cache))
            .await
            .map_err(|err| LookupError::Internal(format!("lookup task failed: {}", err)))?
    }
}

/// Handler for GET /classes?crm=...
///
/// Always answers: unknown classes map to the default ALIADA class.
pub async fn class_handler(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> Result<Json<ClassResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(LookupError::InvalidRequest(error_msg));
    }

    let crm = query.crm.clone();
    let aliada = state
        .lookup(move |cache| cache.aliada_class_from(&crm))
        .await?;

    Ok(Json(ClassResponse::new(query.crm, aliada)))
}

/// Handler for GET /event-types?crm=...
pub async fn event_type_handler(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> Result<Json<ClassResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(LookupError::InvalidRequest(error_msg));
    }

    let crm = query.crm.clone();
    let aliada = state
        .lookup(move |cache| cache.aliada_event_type_class_from(&crm))
        .await?
        .ok_or_else(|| LookupError::NotFound(format!("event type {}", query.crm)))?;

    Ok(Json(ClassResponse::new(query.crm, aliada)))
}

/// Handler for GET /jobs/:id
pub async fn job_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<JobConfiguration>> {
    let job = state
        .lookup(move |cache| cache.job_configuration(id))
        .await?
        .ok_or_else(|| LookupError::NotFound(format!("job {}", id)))?;

    Ok(Json(job.as_ref().clone()))
}

/// Handler for DELETE /jobs/:id
///
/// Drops the cached configuration only; the repository is untouched.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InvalidateResponse>> {
    if state.cache.invalidate_job(id) {
        Ok(Json(InvalidateResponse::new(id)))
    } else {
        Err(LookupError::NotFound(format!("job {} is not cached", id)))
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.job_cache_stats();
    Json(StatsResponse::new(&stats, state.cache.job_cache_capacity()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{MemJobRepository, MemRdfStore};

    fn test_state() -> AppState {
        let repository = MemJobRepository::from_jobs(vec![JobConfiguration::new(1, "lido")]);
        let cache =
            DatasourceCache::new(Arc::new(MemRdfStore::new()), Arc::new(repository), 10).unwrap();
        AppState::new(cache)
    }

    fn class_query(crm: &str) -> Query<ClassQuery> {
        Query(ClassQuery {
            crm: crm.to_string(),
        })
    }

    #[tokio::test]
    async fn test_class_handler() {
        let response = class_handler(State(test_state()), class_query("E22"))
            .await
            .unwrap();
        assert_eq!(
            response.aliada_class,
            "http://erlangen-crm.org/current/E22_Man-Made_Object"
        );
    }

    #[tokio::test]
    async fn test_class_handler_invalid_query() {
        let result = class_handler(State(test_state()), class_query("")).await;
        assert!(matches!(result, Err(LookupError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_event_type_handler_not_found() {
        let result = event_type_handler(State(test_state()), class_query("E22")).await;
        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_job_handler() {
        let state = test_state();

        let response = job_handler(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(response.format, "lido");

        let result = job_handler(State(state), Path(2)).await;
        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invalidate_handler() {
        let state = test_state();

        let result = invalidate_handler(State(state.clone()), Path(1)).await;
        assert!(result.is_err(), "nothing cached yet");

        job_handler(State(state.clone()), Path(1)).await.unwrap();
        let response = invalidate_handler(State(state), Path(1)).await.unwrap();
        assert_eq!(response.id, 1);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        job_handler(State(state.clone()), Path(1)).await.unwrap();
        job_handler(State(state.clone()), Path(1)).await.unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.capacity, 10);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
