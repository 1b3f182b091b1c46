//! Query error types.
//!
//! Every failure here is a caller-input error detected at lookup time.
//! Nothing is retried: the network is in memory and a failed query leaves
//! it untouched.

/// Errors returned by network lookups, planner queries and fare lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No station with this exact name
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// No line with this exact name
    #[error("line not found: {0}")]
    LineNotFound(String),

    /// Destination is not reachable from the origin
    #[error("no path from {from} to {to}")]
    PathNotFound { from: String, to: String },

    /// Unknown day-pass product code
    #[error("invalid ticket type: {0}")]
    InvalidTicketType(String),
}
