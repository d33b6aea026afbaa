//! Grid map
//!
//! Contains the cell types, the grid and the generation passes over it.

mod cave;
mod cell;
mod connectivity;
mod dungeon;
mod grid;
mod hallway;
mod route;

pub use cave::CAVE_SEED_LIMIT;
pub use cell::{Accessibility, AreaType, Cell, PointType, WallType};
pub use connectivity::{MIN_ROOM_SIZE, Region};
pub use grid::Grid;
pub use route::{Orientation, RouteKind, segments};
