//! Planner entry point and shared result types.
//!
//! The search algorithms themselves live in sibling modules, each adding an
//! `impl` block to [`Planner`]. Every query allocates its own search state,
//! so one network can serve any number of planners at once.

use crate::domain::{LineId, Path, StationId};
use crate::network::Network;

/// A station found by the bounded-hop search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub station: StationId,
    /// Line the station was first discovered on
    pub line: LineId,
    /// Hops along that line from the start
    pub hops: usize,
}

/// A station found by the bounded-distance search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceReach {
    pub station: StationId,
    /// Line of the edge that produced the best distance
    pub line: LineId,
    /// Shortest distance from the start in kilometres
    pub distance_km: f64,
}

/// Result of a capped path enumeration.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Paths in discovery order.
    pub paths: Vec<Path>,

    /// False if the cap stopped the enumeration early.
    pub complete: bool,
}

/// Read-only query engine over a network.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    pub(super) network: &'a Network,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// The network this planner queries.
    pub fn network(&self) -> &'a Network {
        self.network
    }
}
