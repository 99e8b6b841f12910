//! Resolver Module
//!
//! Backing sources consulted by a read-through cache on a miss.

use std::sync::Arc;

use crate::error::Result;

// == Resolver Trait ==
/// A backing source able to produce a value for a key the cache does not hold.
///
/// `Ok(None)` means "not found" and is never cached. An `Err` is a failure of
/// the source itself and is propagated to the caller unchanged.
pub trait Resolver<K, V>: Send + Sync {
    /// Looks `key` up in the backing source.
    fn resolve(&self, key: &K) -> Result<Option<V>>;

    /// Chains `next` behind this resolver: it is consulted only when this
    /// one reports "not found".
    fn or_else<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Resolver<K, V>,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<K, V, R> Resolver<K, V> for Arc<R>
where
    R: Resolver<K, V> + ?Sized,
{
    fn resolve(&self, key: &K) -> Result<Option<V>> {
        (**self).resolve(key)
    }
}

// == Chain ==
/// Two resolvers tried in order; the first value found wins.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<K, V, A, B> Resolver<K, V> for Chain<A, B>
where
    A: Resolver<K, V>,
    B: Resolver<K, V>,
{
    fn resolve(&self, key: &K) -> Result<Option<V>> {
        if let Some(value) = self.first.resolve(key)? {
            return Ok(Some(value));
        }
        self.second.resolve(key)
    }
}

// == Function Resolver ==
/// Adapts a closure into a [`Resolver`].
#[derive(Clone)]
pub struct FnResolver<F>(F);

/// Wraps `f` so it can back a cache or join a [`Chain`].
pub fn from_fn<K, V, F>(f: F) -> FnResolver<F>
where
    F: Fn(&K) -> Result<Option<V>> + Send + Sync,
{
    FnResolver(f)
}

impl<K, V, F> Resolver<K, V> for FnResolver<F>
where
    F: Fn(&K) -> Result<Option<V>> + Send + Sync,
{
    fn resolve(&self, key: &K) -> Result<Option<V>> {
        (self.0)(key)
    }
}
