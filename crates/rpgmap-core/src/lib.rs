//! rpgmap-core: grid generation engine for tabletop RPG maps
//!
//! Builds dungeon and cave layouts on a fixed-size grid: rooms, hallways,
//! cellular-automaton caves and the connectivity passes that tidy them up.
//! There is no I/O here; renderers read cells through [`render::Canvas`].
//!
//! All randomness comes from a [`MapRng`] passed into each generation call,
//! so a seed always reproduces the same map.

pub mod config;
pub mod error;
pub mod geometry;
pub mod map;
pub mod render;

mod rng;

pub use config::DungeonConfig;
pub use error::{MapError, Result};
pub use geometry::{Point, Rect};
pub use map::Grid;
pub use rng::MapRng;
