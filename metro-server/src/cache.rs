//! Caching layer for shortest-route results.
//!
//! The network never changes once loaded, so a cached route stays correct
//! for the life of the process. The TTL and capacity only bound memory.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Path, StationId};

/// Cache key for routes: (origin, destination).
type RouteKey = (StationId, StationId);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Cache of shortest routes keyed by endpoint pair.
pub struct RouteCache {
    routes: MokaCache<RouteKey, Arc<Path>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached route.
    pub async fn get(&self, from: StationId, to: StationId) -> Option<Arc<Path>> {
        self.routes.get(&(from, to)).await
    }

    /// Insert a route into the cache.
    pub async fn insert(&self, from: StationId, to: StationId, route: Arc<Path>) {
        self.routes.insert((from, to), route).await;
    }

    /// Get cache statistics (for monitoring).
    ///
    /// Moka updates this lazily; call [`run_pending_tasks`](Self::run_pending_tasks)
    /// first for an exact figure.
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Flush moka's pending maintenance.
    pub async fn run_pending_tasks(&self) {
        self.routes.run_pending_tasks().await;
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineId;

    fn route() -> Arc<Path> {
        let mut path = Path::new(StationId(0));
        path.push(StationId(1), LineId(0), 2.5);
        Arc::new(path)
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn cache_creation() {
        let cache = RouteCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache = RouteCache::new(&CacheConfig::default());
        let route = route();

        assert!(cache.get(StationId(0), StationId(1)).await.is_none());
        cache.insert(StationId(0), StationId(1), route.clone()).await;

        let cached = cache.get(StationId(0), StationId(1)).await.unwrap();
        assert_eq!(cached, route);

        cache.run_pending_tasks().await;
        assert_eq!(cache.entry_count(), 1);
    }

    #[tokio::test]
    async fn key_is_directional() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert(StationId(0), StationId(1), route()).await;

        assert!(cache.get(StationId(1), StationId(0)).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_clears_entries() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert(StationId(0), StationId(1), route()).await;

        cache.invalidate_all();
        assert!(cache.get(StationId(0), StationId(1)).await.is_none());
    }
}
