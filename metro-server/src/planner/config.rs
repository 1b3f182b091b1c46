//! Limits applied by callers that expose the planner to untrusted input.
//!
//! The planner itself never caps a search. These limits are what the web
//! layer is willing to ask of it.

/// Configuration parameters for planner queries.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of paths an enumeration may return.
    pub max_paths: usize,

    /// Largest hop count accepted for a neighbourhood search.
    pub max_hops: usize,

    /// Largest radius accepted for a distance search (km).
    pub max_radius_km: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_paths: usize, max_hops: usize, max_radius_km: f64) -> Self {
        Self {
            max_paths,
            max_hops,
            max_radius_km,
        }
    }

    /// Clamp a requested path limit to `max_paths`.
    pub fn path_limit(&self, requested: Option<usize>) -> usize {
        requested.map_or(self.max_paths, |n| n.min(self.max_paths))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_paths: 500,
            max_hops: 30,
            max_radius_km: 100.0,
        }
    }
}
