//! The metro network graph.
//!
//! Stations and lines live in flat arenas and are addressed by `StationId`
//! and `LineId`. Connections are undirected and scoped to one line: each
//! `connect` call stores an edge in both directions, and two lines serving
//! the same pair of stations keep independent edges.
//!
//! The network is mutated only while it is being built. Every query takes
//! `&self`, so a built network can be shared between threads without locks.

mod timetable;

use std::collections::HashMap;

use crate::domain::{LineId, QueryError, StationId};

pub use timetable::{TimetableError, TimetableReport, load_timetable, parse_timetable};

/// Error raised while building a network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Distance is negative, NaN or infinite
    #[error("invalid distance {distance_km} km between {from} and {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance_km: f64,
    },
}

/// A directed, line-tagged connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: StationId,
    pub to: StationId,
    pub line: LineId,
    pub distance_km: f64,
}

/// A station and its adjacency.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    /// Lines serving this station, in the order they were first seen
    lines: Vec<LineId>,
    /// Outgoing edges, at most one per (neighbour, line)
    edges: Vec<Edge>,
}

impl Station {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns true if the station is served by two or more lines.
    pub fn is_transfer(&self) -> bool {
        self.lines.len() >= 2
    }

    pub fn serves(&self, line: LineId) -> bool {
        self.lines.contains(&line)
    }
}

/// A named line and its member stations.
#[derive(Debug, Clone)]
pub struct Line {
    name: String,
    /// Members in ingestion order, which need not match the physical route
    stations: Vec<StationId>,
}

impl Line {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }
}

/// A transfer station together with every line serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferStation {
    pub station: StationId,
    pub lines: Vec<LineId>,
}

/// The metro graph.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
    station_index: HashMap<String, StationId>,
    line_index: HashMap<String, LineId>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the station called `name`, creating it if needed.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.station_index.get(name) {
            return id;
        }
        let id = StationId(self.stations.len());
        self.stations.push(Station {
            name: name.to_string(),
            lines: Vec::new(),
            edges: Vec::new(),
        });
        self.station_index.insert(name.to_string(), id);
        id
    }

    /// Returns the line called `name`, creating it if needed.
    pub fn add_line(&mut self, name: &str) -> LineId {
        if let Some(&id) = self.line_index.get(name) {
            return id;
        }
        let id = LineId(self.lines.len());
        self.lines.push(Line {
            name: name.to_string(),
            stations: Vec::new(),
        });
        self.line_index.insert(name.to_string(), id);
        id
    }

    /// Connect two stations on `line`.
    ///
    /// Stores the edge in both directions and registers both stations on the
    /// line. Connecting the same pair on the same line again replaces the
    /// distance.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidDistance` if `distance_km` is negative
    /// or not finite. The network is left unchanged.
    pub fn connect(
        &mut self,
        a: StationId,
        b: StationId,
        line: LineId,
        distance_km: f64,
    ) -> Result<(), NetworkError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(NetworkError::InvalidDistance {
                from: self.station(a).name.clone(),
                to: self.station(b).name.clone(),
                distance_km,
            });
        }

        self.join_line(a, line);
        self.join_line(b, line);
        self.upsert_edge(Edge {
            from: a,
            to: b,
            line,
            distance_km,
        });
        self.upsert_edge(Edge {
            from: b,
            to: a,
            line,
            distance_km,
        });
        Ok(())
    }

    /// Record membership on both the station and the line.
    fn join_line(&mut self, station: StationId, line: LineId) {
        let entry = &mut self.stations[station.index()];
        if !entry.lines.contains(&line) {
            entry.lines.push(line);
            self.lines[line.index()].stations.push(station);
        }
    }

    fn upsert_edge(&mut self, edge: Edge) {
        let edges = &mut self.stations[edge.from.index()].edges;
        match edges
            .iter_mut()
            .find(|e| e.to == edge.to && e.line == edge.line)
        {
            Some(existing) => existing.distance_km = edge.distance_km,
            None => edges.push(edge),
        }
    }

    /// Look up a station by its exact name.
    pub fn station_by_name(&self, name: &str) -> Result<StationId, QueryError> {
        self.station_index
            .get(name)
            .copied()
            .ok_or_else(|| QueryError::StationNotFound(name.to_string()))
    }

    /// Look up a line by its exact name.
    pub fn line_by_name(&self, name: &str) -> Result<LineId, QueryError> {
        self.line_index
            .get(name)
            .copied()
            .ok_or_else(|| QueryError::LineNotFound(name.to_string()))
    }

    /// Returns the station with this id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    /// Returns the line with this id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    /// Outgoing edges of a station.
    pub fn edges_from(&self, id: StationId) -> &[Edge] {
        &self.station(id).edges
    }

    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i), s))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineId(i), l))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// List every station served by two or more lines.
    ///
    /// Stations come out in insertion order. Callers that need another order
    /// should sort the result.
    pub fn transfer_stations(&self) -> Vec<TransferStation> {
        self.stations()
            .filter(|(_, station)| station.is_transfer())
            .map(|(id, station)| TransferStation {
                station: id,
                lines: station.lines.clone(),
            })
            .collect()
    }
}

/// Builder for creating networks from station and line names.
///
/// Provides a fluent API for tests and fixtures. The first invalid
/// connection is reported by `build`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
    error: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station that may have no connections.
    pub fn station(mut self, name: &str) -> Self {
        self.inner.add_station(name);
        self
    }

    /// Connect two stations on a line, creating whatever is missing.
    pub fn connect(mut self, from: &str, to: &str, line: &str, distance_km: f64) -> Self {
        if self.error.is_some() {
            return self;
        }
        let a = self.inner.add_station(from);
        let b = self.inner.add_station(to);
        let line = self.inner.add_line(line);
        if let Err(e) = self.inner.connect(a, b, line, distance_km) {
            self.error = Some(e);
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }
}
