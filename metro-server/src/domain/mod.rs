//! Domain types for the metro query engine.
//!
//! Stations and lines are referred to by arena indices issued by a
//! `Network`. A `Path` is a plain value built from those indices, so it can
//! be cloned freely while a search branches.

mod error;
mod ids;
mod path;

pub use error::QueryError;
pub use ids::{LineId, StationId};
pub use path::{Path, PathDisplay, Ride, Step};
