//! Arena indices for stations and lines.
//!
//! A `Network` stores stations and lines in flat vectors. These newtypes are
//! positions in those vectors, so they are only meaningful for the network
//! that issued them.

use std::fmt;

/// Index of a station within a network.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let id = StationId(3);
/// assert_eq!(id.index(), 3);
///
/// // StationId is Copy, so it's cheap to pass around
/// let copy = id;
/// assert_eq!(id, copy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the position in the network's station arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a line within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

impl LineId {
    /// Returns the position in the network's line arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}
