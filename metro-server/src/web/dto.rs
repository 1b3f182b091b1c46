//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Path, Ride};
use crate::fare::{FareQuote, FareSchedule};
use crate::network::{Network, TransferStation};
use crate::planner::{DistanceReach, Reach};

/// Request for stations a few stops away on the same line.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    /// Station name (exact match)
    pub station: String,

    /// Maximum number of stops
    pub hops: usize,
}

/// Request for stations within a distance, changing lines freely.
#[derive(Debug, Deserialize)]
pub struct NearbyKmRequest {
    /// Station name (exact match)
    pub station: String,

    /// Exclusive upper bound in km
    pub km: f64,
}

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,

    /// Maximum number of paths to enumerate (clamped by the server)
    pub limit: Option<usize>,
}

/// Request for a single-journey fare.
#[derive(Debug, Deserialize)]
pub struct FareRequest {
    pub distance_km: f64,
}

/// Request for a day-pass price.
#[derive(Debug, Deserialize)]
pub struct DayPassRequest {
    /// Product code: "1-day", "3-day" or "7-day"
    pub code: String,
}

/// A transfer station and the lines serving it.
#[derive(Debug, Serialize)]
pub struct TransferStationResult {
    pub station: String,
    pub lines: Vec<String>,
}

/// Response for transfer-station discovery.
#[derive(Debug, Serialize)]
pub struct TransfersResponse {
    pub stations: Vec<TransferStationResult>,
}

/// A station reached by the hop search.
#[derive(Debug, Serialize)]
pub struct ReachResult {
    pub station: String,
    pub line: String,
    pub hops: usize,
}

/// Response for the hop search.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub origin: String,
    pub max_hops: usize,
    pub stations: Vec<ReachResult>,
}

/// A station reached by the distance search.
#[derive(Debug, Serialize)]
pub struct DistanceReachResult {
    pub station: String,

    /// Line of the last edge on the best route
    pub line: String,

    pub distance_km: f64,
}

/// Response for the distance search.
#[derive(Debug, Serialize)]
pub struct NearbyKmResponse {
    pub origin: String,
    pub max_km: f64,
    pub stations: Vec<DistanceReachResult>,
}

/// A stretch of a route on one line.
#[derive(Debug, Serialize)]
pub struct RideResult {
    pub line: String,
    pub board: String,
    pub alight: String,
    pub stops: usize,
    pub distance_km: f64,
}

/// A route with its fares.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Station names from origin to destination
    pub stations: Vec<String>,

    pub rides: Vec<RideResult>,

    pub distance_km: f64,

    pub transfers: usize,

    pub fare: FareQuote,

    /// Rider-facing itinerary text
    pub itinerary: String,
}

/// Response for route enumeration.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,

    /// False when the enumeration stopped at the path limit
    pub complete: bool,
}

/// Response for a day-pass price.
#[derive(Debug, Serialize)]
pub struct DayPassResponse {
    pub code: String,
    pub price: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl TransferStationResult {
    pub fn from_transfer(transfer: &TransferStation, network: &Network) -> Self {
        Self {
            station: network.station(transfer.station).name().to_string(),
            lines: transfer
                .lines
                .iter()
                .map(|&l| network.line(l).name().to_string())
                .collect(),
        }
    }
}

impl ReachResult {
    pub fn from_reach(reach: &Reach, network: &Network) -> Self {
        Self {
            station: network.station(reach.station).name().to_string(),
            line: network.line(reach.line).name().to_string(),
            hops: reach.hops,
        }
    }
}

impl DistanceReachResult {
    pub fn from_reach(reach: &DistanceReach, network: &Network) -> Self {
        Self {
            station: network.station(reach.station).name().to_string(),
            line: network.line(reach.line).name().to_string(),
            distance_km: reach.distance_km,
        }
    }
}

impl RideResult {
    pub fn from_ride(ride: &Ride, network: &Network) -> Self {
        Self {
            line: network.line(ride.line).name().to_string(),
            board: network.station(ride.board).name().to_string(),
            alight: network.station(ride.alight).name().to_string(),
            stops: ride.stops,
            distance_km: ride.distance_km,
        }
    }
}

impl RouteResult {
    /// Create from a path found on `network`.
    pub fn from_path(path: &Path, network: &Network, fares: &FareSchedule) -> Self {
        Self {
            stations: path
                .stations()
                .map(|s| network.station(s).name().to_string())
                .collect(),
            rides: path
                .rides()
                .iter()
                .map(|r| RideResult::from_ride(r, network))
                .collect(),
            distance_km: path.total_distance(),
            transfers: path.transfer_count(),
            fare: fares.fare_quote(path),
            itinerary: path.display(network).to_string(),
        }
    }
}
