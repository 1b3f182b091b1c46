//! Route planning over a metro network.
//!
//! This module implements the query algorithms:
//! - per-line bounded-hop search and bounded-distance search
//! - exhaustive simple-path enumeration by backtracking
//! - shortest-distance search with Dijkstra
//!
//! All of them read the network and never modify it.

mod config;
mod enumerate;
mod nearby;
mod rank;
mod search;
mod shortest;


pub use config::SearchConfig;
pub use rank::{compare_paths, rank_paths, remove_dominated};
pub use search::{DistanceReach, Planner, Reach, SearchResult};
