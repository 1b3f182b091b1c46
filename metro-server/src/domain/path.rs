//! Path type.
//!
//! A `Path` is an origin station followed by the steps taken from it. Each
//! step records the station reached, the line used to reach it and the
//! distance of that single hop. Totals are derived from the steps, so they
//! can never drift from what the path actually contains.

use std::fmt;

use super::{LineId, StationId};
use crate::network::Network;

/// One edge traversal in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Station reached by this step
    pub station: StationId,
    /// Line the step was taken on
    pub line: LineId,
    /// Length of this hop in kilometres
    pub distance_km: f64,
}

/// A maximal run of consecutive steps on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ride {
    pub line: LineId,
    pub board: StationId,
    pub alight: StationId,
    /// Number of hops ridden
    pub stops: usize,
    pub distance_km: f64,
}

/// A route through the network.
///
/// # Invariants
///
/// - At least one station (the origin)
/// - `total_distance()` is the sum of step distances
/// - `transfer_count()` is the number of adjacent steps whose lines differ
///
/// A path with no steps means "no movement": zero distance, zero transfers.
///
/// # Examples
///
/// ```
/// use metro_server::domain::{LineId, Path, StationId};
///
/// let mut path = Path::new(StationId(0));
/// path.push(StationId(1), LineId(0), 3.0);
/// path.push(StationId(2), LineId(1), 2.0);
///
/// assert_eq!(path.total_distance(), 5.0);
/// assert_eq!(path.transfer_count(), 1);
/// assert_eq!(path.destination(), StationId(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    origin: StationId,
    steps: Vec<Step>,
}

impl Path {
    /// Creates a path that starts and ends at `origin`.
    pub fn new(origin: StationId) -> Self {
        Self {
            origin,
            steps: Vec::new(),
        }
    }

    /// Appends a step reaching `station` on `line`.
    pub fn push(&mut self, station: StationId, line: LineId, distance_km: f64) {
        self.steps.push(Step {
            station,
            line,
            distance_km,
        });
    }

    /// Removes the last step. Used when backtracking.
    pub(crate) fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    pub fn origin(&self) -> StationId {
        self.origin
    }

    /// Returns the final station, which is the origin for an empty path.
    pub fn destination(&self) -> StationId {
        self.steps.last().map_or(self.origin, |s| s.station)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns true if the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns every station in order, origin first.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        std::iter::once(self.origin).chain(self.steps.iter().map(|s| s.station))
    }

    /// Returns the line used for each step, parallel to `steps()`.
    pub fn lines(&self) -> impl Iterator<Item = LineId> + '_ {
        self.steps.iter().map(|s| s.line)
    }

    /// Number of stations including the origin.
    pub fn station_count(&self) -> usize {
        self.steps.len() + 1
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.stations().any(|s| s == station)
    }

    pub fn total_distance(&self) -> f64 {
        self.steps.iter().map(|s| s.distance_km).sum()
    }

    /// Counts line changes between consecutive steps.
    ///
    /// The origin has no incoming line, so the first step never counts.
    pub fn transfer_count(&self) -> usize {
        self.steps
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }

    /// Groups the steps into rides, one per uninterrupted run on a line.
    pub fn rides(&self) -> Vec<Ride> {
        let mut rides: Vec<Ride> = Vec::new();
        let mut previous = self.origin;

        for step in &self.steps {
            match rides.last_mut() {
                Some(ride) if ride.line == step.line => {
                    ride.alight = step.station;
                    ride.stops += 1;
                    ride.distance_km += step.distance_km;
                }
                _ => rides.push(Ride {
                    line: step.line,
                    board: previous,
                    alight: step.station,
                    stops: 1,
                    distance_km: step.distance_km,
                }),
            }
            previous = step.station;
        }

        rides
    }

    /// Renders the path as a rider-facing itinerary using names from `network`.
    ///
    /// The path must have been produced from the same network.
    pub fn display<'a>(&'a self, network: &'a Network) -> PathDisplay<'a> {
        PathDisplay {
            path: self,
            network,
        }
    }
}

/// Itinerary renderer returned by [`Path::display`].
pub struct PathDisplay<'a> {
    path: &'a Path,
    network: &'a Network,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let station = |id: StationId| self.network.station(id).name();
        let line = |id: LineId| self.network.line(id).name();

        if self.path.is_empty() {
            return write!(f, "Already at {}", station(self.path.origin()));
        }

        for (i, ride) in self.path.rides().iter().enumerate() {
            let stops = if ride.stops == 1 { "stop" } else { "stops" };
            if i == 0 {
                writeln!(
                    f,
                    "Take {} from {} to {} ({} {stops})",
                    line(ride.line),
                    station(ride.board),
                    station(ride.alight),
                    ride.stops,
                )?;
            } else {
                writeln!(
                    f,
                    "Change to {} at {} and ride to {} ({} {stops})",
                    line(ride.line),
                    station(ride.board),
                    station(ride.alight),
                    ride.stops,
                )?;
            }
        }

        writeln!(f, "Total distance: {:.2} km", self.path.total_distance())?;
        write!(f, "Transfers: {}", self.path.transfer_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn s(i: usize) -> StationId {
        StationId(i)
    }

    fn l(i: usize) -> LineId {
        LineId(i)
    }

    #[test]
    fn empty_path_is_no_movement() {
        let path = Path::new(s(4));

        assert!(path.is_empty());
        assert_eq!(path.total_distance(), 0.0);
        assert_eq!(path.transfer_count(), 0);
        assert_eq!(path.origin(), s(4));
        assert_eq!(path.destination(), s(4));
        assert_eq!(path.station_count(), 1);
        assert!(path.rides().is_empty());
    }

    #[test]
    fn first_step_is_never_a_transfer() {
        let mut path = Path::new(s(0));
        path.push(s(1), l(3), 1.5);

        assert_eq!(path.transfer_count(), 0);
    }

    #[test]
    fn transfers_count_line_changes() {
        let mut path = Path::new(s(0));
        path.push(s(1), l(0), 1.0);
        path.push(s(2), l(0), 1.0);
        path.push(s(3), l(1), 1.0);
        path.push(s(4), l(0), 1.0);

        assert_eq!(path.transfer_count(), 2);
        assert_eq!(path.total_distance(), 4.0);
    }

    #[test]
    fn pop_restores_previous_state() {
        let mut path = Path::new(s(0));
        path.push(s(1), l(0), 2.0);
        path.push(s(2), l(1), 3.0);

        let popped = path.pop().unwrap();
        assert_eq!(popped.station, s(2));
        assert_eq!(path.total_distance(), 2.0);
        assert_eq!(path.transfer_count(), 0);
        assert_eq!(path.destination(), s(1));
    }

    #[test]
    fn stations_and_lines_are_parallel() {
        let mut path = Path::new(s(0));
        path.push(s(1), l(0), 1.0);
        path.push(s(2), l(1), 1.0);

        let stations: Vec<_> = path.stations().collect();
        let lines: Vec<_> = path.lines().collect();
        assert_eq!(stations, vec![s(0), s(1), s(2)]);
        assert_eq!(lines, vec![l(0), l(1)]);
        assert!(path.contains(s(1)));
        assert!(!path.contains(s(9)));
    }

    #[test]
    fn rides_group_runs_on_one_line() {
        let mut path = Path::new(s(0));
        path.push(s(1), l(0), 1.0);
        path.push(s(2), l(0), 2.0);
        path.push(s(3), l(1), 4.0);

        let rides = path.rides();
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0].board, s(0));
        assert_eq!(rides[0].alight, s(2));
        assert_eq!(rides[0].stops, 2);
        assert_eq!(rides[0].distance_km, 3.0);
        assert_eq!(rides[1].board, s(2));
        assert_eq!(rides[1].alight, s(3));
        assert_eq!(rides[1].line, l(1));
    }

    #[test]
    fn display_itinerary() {
        let network = NetworkBuilder::new()
            .connect("A", "B", "Line1", 3.0)
            .connect("B", "C", "Line1", 5.0)
            .connect("B", "D", "Line2", 2.0)
            .build()
            .unwrap();
        let id = |name: &str| network.station_by_name(name).unwrap();
        let line = |name: &str| network.line_by_name(name).unwrap();

        let mut path = Path::new(id("A"));
        path.push(id("B"), line("Line1"), 3.0);
        path.push(id("D"), line("Line2"), 2.0);

        let text = path.display(&network).to_string();
        assert_eq!(
            text,
            "Take Line1 from A to B (1 stop)\n\
             Change to Line2 at B and ride to D (1 stop)\n\
             Total distance: 5.00 km\n\
             Transfers: 1"
        );
    }

    #[test]
    fn display_empty_path() {
        let network = NetworkBuilder::new()
            .connect("A", "B", "Line1", 3.0)
            .build()
            .unwrap();
        let a = network.station_by_name("A").unwrap();

        assert_eq!(Path::new(a).display(&network).to_string(), "Already at A");
    }
}
