//! Datasource Cache
//!
//! In-memory front of the datasource layer: vocabulary class lookups and a
//! bounded cache of recently used job configurations.

use std::sync::Arc;

use crate::cache::{BoundedReadThroughCache, CacheStats};
use crate::datasource::{
    JobConfiguration, JobConfigurationRepository, RdfStore, RepositoryResolver,
};
use crate::error::Result;
use crate::vocabulary::{ClassMapper, VocabularyTables};

type JobCache = BoundedReadThroughCache<i32, Arc<JobConfiguration>, RepositoryResolver>;

/// Avoids repeated trips to the job repository and keeps the vocabulary
/// tables at hand.
pub struct DatasourceCache {
    classes: ClassMapper,
    jobs: JobCache,
}

impl DatasourceCache {
    /// Creates the cache over its two collaborators.
    ///
    /// # Errors
    /// `LookupError::InvalidCapacity` if `job_capacity` is zero.
    pub fn new(
        rdf_store: Arc<dyn RdfStore>,
        job_repository: Arc<dyn JobConfigurationRepository>,
        job_capacity: usize,
    ) -> Result<Self> {
        Ok(Self {
            classes: ClassMapper::new(VocabularyTables::aliada(), rdf_store),
            jobs: BoundedReadThroughCache::new(
                job_capacity,
                RepositoryResolver::new(job_repository),
            )?,
        })
    }

    /// ALIADA class for a CIDOC-CRM class; never absent (see
    /// [`ClassMapper::aliada_class_from`]).
    pub fn aliada_class_from(&self, crm_class: &str) -> Result<String> {
        self.classes.aliada_class_from(crm_class)
    }

    /// ALIADA class for a CIDOC-CRM event type, if known.
    pub fn aliada_event_type_class_from(&self, crm_class: &str) -> Result<Option<String>> {
        self.classes.aliada_event_type_class_from(crm_class)
    }

    /// Job configuration with the given id, from the cache or the repository.
    pub fn job_configuration(&self, id: i32) -> Result<Option<Arc<JobConfiguration>>> {
        self.jobs.get(&id)
    }

    /// Forgets a cached job configuration, e.g. after the job was edited.
    pub fn invalidate_job(&self, id: i32) -> bool {
        self.jobs.invalidate(&id).is_some()
    }

    pub fn job_cache_stats(&self) -> CacheStats {
        self.jobs.stats()
    }

    pub fn job_cache_capacity(&self) -> usize {
        self.jobs.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_CAPACITY;
    use crate::datasource::{MemJobRepository, MemRdfStore};
    use crate::error::LookupError;
    use crate::vocabulary::DEFAULT_ALIADA_CLASS;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Barrier;
    use std::thread;

    fn setup(capacity: usize) -> (Arc<MemJobRepository>, DatasourceCache) {
        let repository = Arc::new(MemJobRepository::new());
        for id in 1..=3 {
            repository.save(JobConfiguration::new(id, "lido")).unwrap();
        }
        let cache =
            DatasourceCache::new(Arc::new(MemRdfStore::new()), repository.clone(), capacity)
                .unwrap();
        (repository, cache)
    }

    #[test]
    fn test_zero_capacity() {
        let result = DatasourceCache::new(
            Arc::new(MemRdfStore::new()),
            Arc::new(MemJobRepository::new()),
            0,
        );
        assert!(matches!(result, Err(LookupError::InvalidCapacity(0))));
    }

    #[test]
    fn test_job_configuration_cached_after_first_lookup() {
        let (repository, cache) = setup(DEFAULT_CAPACITY);

        let first = cache.job_configuration(2).unwrap().unwrap();
        repository.delete(2).unwrap();
        let second = cache.job_configuration(2).unwrap().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.job_cache_stats().hits, 1);
    }

    #[test]
    fn test_unknown_job_is_absent_and_not_cached() {
        let (repository, cache) = setup(DEFAULT_CAPACITY);

        assert!(cache.job_configuration(42).unwrap().is_none());
        repository.save(JobConfiguration::new(42, "marcxml")).unwrap();
        assert_eq!(cache.job_configuration(42).unwrap().unwrap().format, "marcxml");
    }

    #[test]
    fn test_invalidate_job_reloads_from_repository() {
        let (repository, cache) = setup(DEFAULT_CAPACITY);

        cache.job_configuration(1).unwrap();
        repository.save(JobConfiguration::new(1, "marcxml")).unwrap();
        assert_eq!(cache.job_configuration(1).unwrap().unwrap().format, "lido");

        assert!(cache.invalidate_job(1));
        assert!(!cache.invalidate_job(1));
        assert_eq!(cache.job_configuration(1).unwrap().unwrap().format, "marcxml");
    }

    #[test]
    fn test_job_cache_bounded() {
        let (_, cache) = setup(2);

        for id in 1..=3 {
            cache.job_configuration(id).unwrap();
        }

        let stats = cache.job_cache_stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(cache.job_cache_capacity(), 2);
    }

    #[test]
    fn test_vocabulary_lookups() {
        let (_, cache) = setup(DEFAULT_CAPACITY);

        assert_eq!(
            cache.aliada_class_from("E25").unwrap(),
            "http://erlangen-crm.org/current/E25_Man-Made_Feature"
        );
        assert_eq!(cache.aliada_class_from("E1").unwrap(), DEFAULT_ALIADA_CLASS);
        assert!(cache
            .aliada_event_type_class_from("http://www.cidoc-crm.org/crm-concepts/E65")
            .unwrap()
            .is_some());
        assert!(cache.aliada_event_type_class_from("E1").unwrap().is_none());
    }

    /// Repository whose first read parks between fetching the row and
    /// returning it, like a slow database round trip.
    struct SlowRepository {
        inner: MemJobRepository,
        first: AtomicBool,
        fetched: Barrier,
        release: Barrier,
    }

    impl JobConfigurationRepository for SlowRepository {
        fn find_one(&self, id: i32) -> Result<Option<JobConfiguration>> {
            let job = self.inner.find_one(id)?;
            if self.first.swap(false, Ordering::SeqCst) {
                self.fetched.wait();
                self.release.wait();
            }
            Ok(job)
        }
    }

    #[test]
    fn test_job_edited_during_slow_read_is_not_stale() {
        let repository = Arc::new(SlowRepository {
            inner: MemJobRepository::from_jobs([JobConfiguration::new(1, "lido")]),
            first: AtomicBool::new(true),
            fetched: Barrier::new(2),
            release: Barrier::new(2),
        });
        let cache =
            DatasourceCache::new(Arc::new(MemRdfStore::new()), repository.clone(), 10).unwrap();

        let stale = thread::scope(|scope| {
            let reader = scope.spawn(|| cache.job_configuration(1).unwrap().unwrap());
            repository.fetched.wait();
            repository
                .inner
                .save(JobConfiguration::new(1, "marcxml"))
                .unwrap();
            cache.invalidate_job(1);
            repository.release.wait();
            reader.join().unwrap()
        });

        assert_eq!(stale.format, "lido");
        assert_eq!(cache.job_configuration(1).unwrap().unwrap().format, "marcxml");
        assert_eq!(cache.job_cache_stats().misses, 2);
    }
}
