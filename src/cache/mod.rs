//! Cache Module
//!
//! Bounded LRU storage and the read-through cache built on top of it.

mod lru;
mod read_through;
pub mod resolver;
mod stats;


// Re-export public types
pub use lru::LruMap;
pub use read_through::BoundedReadThroughCache;
pub use resolver::{from_fn, Chain, FnResolver, Resolver};
pub use stats::CacheStats;

// == Public Constants ==
/// Capacity of the job configuration cache when none is configured
pub const DEFAULT_CAPACITY: usize = 50;
