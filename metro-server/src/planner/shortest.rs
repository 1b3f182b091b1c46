//! Shortest-distance search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use super::search::Planner;
use crate::domain::{Path, QueryError, StationId};
use crate::network::Edge;

impl Planner<'_> {
    /// Find the shortest path by distance between two named stations.
    ///
    /// Only distance is minimised. When two routes tie on distance the one
    /// relaxed first wins, so the result is not guaranteed to be the tied
    /// route with fewer transfers. Use [`Planner::alternatives`] when
    /// transfers matter.
    ///
    /// # Errors
    ///
    /// - `StationNotFound` if either name is unknown
    /// - `PathNotFound` if `to` is unreachable from `from`
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Path, QueryError> {
        let start = self.network.station_by_name(from)?;
        let end = self.network.station_by_name(to)?;
        self.shortest_path_between(start, end)
    }

    /// [`shortest_path`](Self::shortest_path) for known station ids.
    pub fn shortest_path_between(
        &self,
        start: StationId,
        end: StationId,
    ) -> Result<Path, QueryError> {
        if start == end {
            return Ok(Path::new(start));
        }

        let n = self.network.station_count();
        let mut best = vec![f64::INFINITY; n];
        // The edge that last improved each station, pointing back at its predecessor
        let mut via: Vec<Option<Edge>> = vec![None; n];
        let mut heap = BinaryHeap::new();
        let mut settled = 0usize;

        best[start.index()] = 0.0;
        heap.push(Reverse((OrderedFloat(0.0), start)));

        while let Some(Reverse((OrderedFloat(dist), station))) = heap.pop() {
            if station == end {
                break;
            }
            if dist > best[station.index()] {
                trace!(station = %station, dist, "Skipping stale queue entry");
                continue;
            }
            if dist == f64::INFINITY {
                break;
            }
            settled += 1;

            for edge in self.network.edges_from(station) {
                let next = dist + edge.distance_km;
                if next < best[edge.to.index()] {
                    best[edge.to.index()] = next;
                    via[edge.to.index()] = Some(*edge);
                    heap.push(Reverse((OrderedFloat(next), edge.to)));
                }
            }
        }

        debug!(
            from = self.network.station(start).name(),
            to = self.network.station(end).name(),
            settled,
            distance_km = best[end.index()],
            "Shortest path search complete"
        );

        self.reconstruct(start, end, &via)
    }

    /// Walk the predecessor chain back from `end`, then replay it forwards.
    fn reconstruct(
        &self,
        start: StationId,
        end: StationId,
        via: &[Option<Edge>],
    ) -> Result<Path, QueryError> {
        let not_found = || QueryError::PathNotFound {
            from: self.network.station(start).name().to_string(),
            to: self.network.station(end).name().to_string(),
        };

        let mut edges = Vec::new();
        let mut current = end;
        while current != start {
            let edge = via[current.index()].ok_or_else(not_found)?;
            edges.push(edge);
            current = edge.from;
        }

        let mut path = Path::new(start);
        for edge in edges.iter().rev() {
            path.push(edge.to, edge.line, edge.distance_km);
        }
        Ok(path)
    }
}
