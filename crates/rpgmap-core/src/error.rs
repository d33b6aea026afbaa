//! Errors reported by grid operations
//!
//! None of these are fatal to a generation session: each one leaves the grid
//! in a valid state and callers decide whether to log, retry or ignore.

use thiserror::Error;

use crate::geometry::{Point, Rect};
use crate::map::RouteKind;

pub type Result<T, E = MapError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("region {region} lies outside the {width}x{height} grid")]
    OutOfBounds {
        region: Rect,
        width: usize,
        height: usize,
    },

    #[error("route kind {0} is not implemented")]
    UnsupportedRoute(RouteKind),

    #[error("no room cell reachable from {origin}")]
    NoConnectionFound { origin: Point },

    #[error("cell storage does not match a {width}x{height} grid")]
    MalformedGrid { width: usize, height: usize },
}
