//! Exhaustive simple-path enumeration.
//!
//! The number of simple paths grows exponentially with the size of a dense
//! or cyclic network. Nothing here caps the search: callers that need a
//! bound use [`Planner::visit_paths`] and stop the enumeration themselves.

use std::ops::ControlFlow;

use tracing::debug;

use super::rank::{rank_paths, remove_dominated};
use super::search::{Planner, SearchResult};
use crate::domain::{Path, QueryError, StationId};
use crate::network::Network;

/// Backtracking state for one enumeration.
struct Backtrack<'n, F> {
    network: &'n Network,
    end: StationId,
    /// Stations on the current branch
    visited: Vec<bool>,
    path: Path,
    visitor: F,
    emitted: usize,
}

impl<F> Backtrack<'_, F>
where
    F: FnMut(&Path) -> ControlFlow<()>,
{
    fn explore(&mut self, current: StationId) -> ControlFlow<()> {
        if current == self.end {
            self.emitted += 1;
            return (self.visitor)(&self.path);
        }

        let network = self.network;
        for edge in network.edges_from(current) {
            if self.visited[edge.to.index()] {
                continue;
            }

            self.visited[edge.to.index()] = true;
            self.path.push(edge.to, edge.line, edge.distance_km);
            let flow = self.explore(edge.to);
            self.path.pop();
            self.visited[edge.to.index()] = false;

            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }
}

impl Planner<'_> {
    /// Enumerate every simple path from `from` to `to`.
    ///
    /// Each path visits no station twice, starts at `from` and ends at `to`.
    /// Two lines joining the same pair of stations give distinct paths.
    ///
    /// **Resource use:** the result can be exponentially large. Prefer
    /// [`visit_paths`](Self::visit_paths) or [`paths_up_to`](Self::paths_up_to)
    /// wherever the network is not known to be small.
    pub fn all_paths(&self, from: &str, to: &str) -> Result<Vec<Path>, QueryError> {
        let mut paths = Vec::new();
        self.visit_paths(from, to, |path| {
            paths.push(path.clone());
            ControlFlow::Continue(())
        })?;
        Ok(paths)
    }

    /// Feed every simple path from `from` to `to` to `visitor`.
    ///
    /// The visitor sees the search's working path; clone it to keep it.
    /// Returning `ControlFlow::Break` stops the enumeration, and the
    /// returned flow tells the caller whether that happened.
    pub fn visit_paths<F>(
        &self,
        from: &str,
        to: &str,
        visitor: F,
    ) -> Result<ControlFlow<()>, QueryError>
    where
        F: FnMut(&Path) -> ControlFlow<()>,
    {
        let start = self.network.station_by_name(from)?;
        let end = self.network.station_by_name(to)?;
        Ok(self.visit_paths_between(start, end, visitor))
    }

    /// [`visit_paths`](Self::visit_paths) for known station ids.
    pub fn visit_paths_between<F>(
        &self,
        start: StationId,
        end: StationId,
        visitor: F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&Path) -> ControlFlow<()>,
    {
        let mut search = Backtrack {
            network: self.network,
            end,
            visited: vec![false; self.network.station_count()],
            path: Path::new(start),
            visitor,
            emitted: 0,
        };
        search.visited[start.index()] = true;

        let flow = search.explore(start);

        debug!(
            from = self.network.station(start).name(),
            to = self.network.station(end).name(),
            emitted = search.emitted,
            stopped = flow.is_break(),
            "Path enumeration complete"
        );

        flow
    }

    /// Collect at most `limit` simple paths, in discovery order.
    pub fn paths_up_to(
        &self,
        from: &str,
        to: &str,
        limit: usize,
    ) -> Result<SearchResult, QueryError> {
        if limit == 0 {
            // Still validate the names
            self.network.station_by_name(from)?;
            self.network.station_by_name(to)?;
            return Ok(SearchResult {
                paths: Vec::new(),
                complete: false,
            });
        }

        let mut paths = Vec::new();
        let flow = self.visit_paths(from, to, |path| {
            paths.push(path.clone());
            if paths.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;

        Ok(SearchResult {
            paths,
            complete: flow.is_continue(),
        })
    }

    /// Paths that trade distance against transfers, best first.
    ///
    /// Enumerates up to `limit` paths, drops every path beaten on both
    /// distance and transfers by another, and ranks the rest by distance
    /// then transfers.
    pub fn alternatives(
        &self,
        from: &str,
        to: &str,
        limit: usize,
    ) -> Result<SearchResult, QueryError> {
        let SearchResult { paths, complete } = self.paths_up_to(from, to, limit)?;
        let paths = rank_paths(remove_dominated(paths));
        Ok(SearchResult { paths, complete })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    /// A square A-B-C-D-A on Ring plus a B-D diagonal on Cross.
    fn ring() -> Network {
        NetworkBuilder::new()
            .connect("A", "B", "Ring", 1.0)
            .connect("B", "C", "Ring", 1.0)
            .connect("C", "D", "Ring", 1.0)
            .connect("D", "A", "Ring", 1.0)
            .connect("B", "D", "Cross", 1.5)
            .build()
            .unwrap()
    }

    fn names(network: &Network, path: &Path) -> String {
        path.stations()
            .map(|s| network.station(s).name())
            .collect::<Vec<_>>()
            .join("-")
    }

    #[test]
    fn enumerates_every_simple_path() {
        let network = ring();
        let planner = Planner::new(&network);

        let mut found: Vec<_> = planner
            .all_paths("A", "C")
            .unwrap()
            .iter()
            .map(|p| names(&network, p))
            .collect();
        found.sort();

        assert_eq!(found, vec!["A-B-C", "A-B-D-C", "A-D-B-C", "A-D-C"]);
    }

    #[test]
    fn paths_are_simple_and_anchored() {
        let network = ring();
        let planner = Planner::new(&network);
        let a = network.station_by_name("A").unwrap();
        let c = network.station_by_name("C").unwrap();

        for path in planner.all_paths("A", "C").unwrap() {
            assert_eq!(path.origin(), a);
            assert_eq!(path.destination(), c);
            let mut stations: Vec<_> = path.stations().collect();
            let len = stations.len();
            stations.sort();
            stations.dedup();
            assert_eq!(stations.len(), len, "repeated station in path");
        }
    }

    #[test]
    fn parallel_lines_give_distinct_paths() {
        let network = NetworkBuilder::new()
            .connect("A", "B", "Red", 1.0)
            .connect("A", "B", "Blue", 1.0)
            .build()
            .unwrap();
        let paths = Planner::new(&network).all_paths("A", "B").unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn same_endpoints_yield_empty_path() {
        let network = ring();
        let paths = Planner::new(&network).all_paths("B", "B").unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
    }

    #[test]
    fn unreachable_yields_nothing() {
        let network = NetworkBuilder::new()
            .connect("A", "B", "Red", 1.0)
            .station("Z")
            .build()
            .unwrap();
        let paths = Planner::new(&network).all_paths("A", "Z").unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn unknown_endpoint() {
        let network = ring();
        let planner = Planner::new(&network);

        assert_eq!(
            planner.all_paths("A", "Nowhere"),
            Err(QueryError::StationNotFound("Nowhere".into()))
        );
        assert_eq!(
            planner.all_paths("Nowhere", "A"),
            Err(QueryError::StationNotFound("Nowhere".into()))
        );
    }

    #[test]
    fn visitor_can_stop_early() {
        let network = ring();
        let planner = Planner::new(&network);

        let mut seen = 0;
        let flow = planner
            .visit_paths("A", "C", |_| {
                seen += 1;
                ControlFlow::Break(())
            })
            .unwrap();

        assert_eq!(seen, 1);
        assert!(flow.is_break());
    }

    #[test]
    fn paths_up_to_reports_truncation() {
        let network = ring();
        let planner = Planner::new(&network);

        let capped = planner.paths_up_to("A", "C", 2).unwrap();
        assert_eq!(capped.paths.len(), 2);
        assert!(!capped.complete);

        let all = planner.paths_up_to("A", "C", 100).unwrap();
        assert_eq!(all.paths.len(), 4);
        assert!(all.complete);

        let none = planner.paths_up_to("A", "C", 0).unwrap();
        assert!(none.paths.is_empty());
        assert!(planner.paths_up_to("A", "Nowhere", 0).is_err());
    }

    #[test]
    fn alternatives_drop_dominated_paths() {
        let network = ring();
        let planner = Planner::new(&network);

        let result = planner.alternatives("A", "C", 100).unwrap();
        assert!(result.complete);

        // A-B-C and A-D-C are both 2 km with no transfer; the diagonal
        // routes are longer and change line twice.
        let found: Vec<_> = result.paths.iter().map(|p| names(&network, p)).collect();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&"A-B-C".to_string()));
        assert!(found.contains(&"A-D-C".to_string()));
    }
}
