//! TTL cache in front of a catalog gateway.
//!
//! The catalog is near-static upstream data, so the gateway layer memoizes a
//! successful fetch for a configurable TTL. The core service stays
//! cache-free; callers wire this wrapper in where they construct the
//! gateway.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use rosterdex_core::catalog::gateway::CatalogGateway;
use rosterdex_types::creature::Creature;
use rosterdex_types::error::UpstreamError;

/// Caching wrapper around any [`CatalogGateway`].
///
/// A successful catalog is served from memory until the TTL elapses; errors
/// are never cached. Concurrent fetches after expiry may hit the upstream
/// more than once; the last write wins.
pub struct CachedCatalog<G> {
    inner: G,
    ttl: Duration,
    cached: RwLock<Option<CacheEntry>>,
}

struct CacheEntry {
    creatures: Vec<Creature>,
    fetched_at: Instant,
}

impl<G: CatalogGateway> CachedCatalog<G> {
    /// Wrap `inner` with the given time-to-live.
    pub fn new(inner: G, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: RwLock::new(None),
        }
    }
}

impl<G: CatalogGateway> CatalogGateway for CachedCatalog<G> {
    async fn fetch_catalog(&self) -> Result<Vec<Creature>, UpstreamError> {
        // Scoped read guard: never hold the lock across the upstream await.
        {
            let guard = self.cached.read().await;
            if let Some(entry) = guard.as_ref() {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.creatures.clone());
                }
            }
        }

        let creatures = self.inner.fetch_catalog().await?;

        let mut guard = self.cached.write().await;
        *guard = Some(CacheEntry {
            creatures: creatures.clone(),
            fetched_at: Instant::now(),
        });

        Ok(creatures)
    }
}
