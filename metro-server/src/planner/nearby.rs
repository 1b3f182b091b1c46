//! Neighbourhood searches: bounded hops and bounded distance.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use ordered_float::OrderedFloat;
use tracing::debug;

use super::search::{DistanceReach, Planner, Reach};
use crate::domain::{LineId, QueryError, StationId};

/// Queue entry for the per-line BFS.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    station: StationId,
    hops: usize,
    line: LineId,
}

impl Planner<'_> {
    /// Find stations within `max_hops` stops of `start` without changing line.
    ///
    /// The search is seeded once per line serving `start`, and each queue
    /// entry only follows edges on its own line. A station is marked visited
    /// the first time it is queued, for the whole search rather than per
    /// line, so it is reported exactly once with the line and hop count of
    /// its first discovery, even if another line also reaches it.
    ///
    /// The start station is never reported, and `max_hops == 0` yields
    /// nothing.
    pub fn within_hops(&self, start: &str, max_hops: usize) -> Result<Vec<Reach>, QueryError> {
        let start = self.network.station_by_name(start)?;
        Ok(self.within_hops_from(start, max_hops))
    }

    /// [`within_hops`](Self::within_hops) for a known station id.
    pub fn within_hops_from(&self, start: StationId, max_hops: usize) -> Vec<Reach> {
        let mut visited = vec![false; self.network.station_count()];
        visited[start.index()] = true;

        let mut queue: VecDeque<Frontier> = self
            .network
            .station(start)
            .lines()
            .iter()
            .map(|&line| Frontier {
                station: start,
                hops: 0,
                line,
            })
            .collect();

        let mut found = Vec::new();

        while let Some(entry) = queue.pop_front() {
            if entry.hops > 0 {
                found.push(Reach {
                    station: entry.station,
                    line: entry.line,
                    hops: entry.hops,
                });
            }

            if entry.hops >= max_hops {
                continue;
            }

            for edge in self.network.edges_from(entry.station) {
                if edge.line != entry.line || visited[edge.to.index()] {
                    continue;
                }
                visited[edge.to.index()] = true;
                queue.push_back(Frontier {
                    station: edge.to,
                    hops: entry.hops + 1,
                    line: entry.line,
                });
            }
        }

        debug!(
            start = self.network.station(start).name(),
            max_hops,
            found = found.len(),
            "Hop search complete"
        );

        found
    }

    /// Find stations strictly closer than `max_km` to `start`, changing lines freely.
    ///
    /// Dijkstra over cumulative distance that stops expanding once the popped
    /// distance reaches `max_km`. Results come out in ascending distance.
    pub fn within_distance(
        &self,
        start: &str,
        max_km: f64,
    ) -> Result<Vec<DistanceReach>, QueryError> {
        let start = self.network.station_by_name(start)?;
        Ok(self.within_distance_from(start, max_km))
    }

    /// [`within_distance`](Self::within_distance) for a known station id.
    pub fn within_distance_from(&self, start: StationId, max_km: f64) -> Vec<DistanceReach> {
        let n = self.network.station_count();
        let mut best = vec![f64::INFINITY; n];
        let mut via: Vec<Option<LineId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        best[start.index()] = 0.0;
        heap.push(Reverse((OrderedFloat(0.0), start)));

        let mut found = Vec::new();

        while let Some(Reverse((OrderedFloat(dist), station))) = heap.pop() {
            if dist > best[station.index()] {
                continue;
            }
            if dist >= max_km {
                continue;
            }

            if let Some(line) = via[station.index()] {
                found.push(DistanceReach {
                    station,
                    line,
                    distance_km: dist,
                });
            }

            let edges = self.network.edges_from(station);
            for &line in self.network.station(station).lines() {
                for edge in edges.iter().filter(|e| e.line == line) {
                    let next = dist + edge.distance_km;
                    if next < max_km && next < best[edge.to.index()] {
                        best[edge.to.index()] = next;
                        via[edge.to.index()] = Some(line);
                        heap.push(Reverse((OrderedFloat(next), edge.to)));
                    }
                }
            }
        }

        debug!(
            start = self.network.station(start).name(),
            max_km,
            found = found.len(),
            "Distance search complete"
        );

        found
    }
}
