//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::fare::FareSchedule;
use crate::network::Network;
use crate::planner::{Planner, SearchConfig};

/// Shared application state.
///
/// Contains everything needed to handle requests. The network is read-only
/// once loaded, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded metro network
    pub network: Arc<Network>,

    /// Limits on what a request may ask of the planner
    pub config: Arc<SearchConfig>,

    /// Fare table
    pub fares: Arc<FareSchedule>,

    /// Cached shortest routes
    pub routes: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: Network,
        config: SearchConfig,
        fares: FareSchedule,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            fares: Arc::new(fares),
            routes: Arc::new(RouteCache::new(cache_config)),
        }
    }

    /// A planner over the shared network.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.network)
    }
}
