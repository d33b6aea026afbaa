//! Grid cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Structural role of a cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum AreaType {
    #[default]
    Nothing = 0,
    Entrance = 1,
    Room = 2,
    Stairs = 3,
    /// Marked by a search pass, drawn for debugging
    Tested = 4,
}

impl AreaType {
    /// Get the display character for this area type
    pub const fn symbol(&self) -> char {
        match self {
            AreaType::Nothing => ' ',
            AreaType::Entrance => '+',
            AreaType::Room => '.',
            AreaType::Stairs => '>',
            AreaType::Tested => '?',
        }
    }
}

/// Wall on one face of a cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum WallType {
    #[default]
    Nothing = 0,
    Wall = 1,
    Door = 2,
    SecretDoor = 3,
}

/// Feature at the corner point of a cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum PointType {
    #[default]
    Nothing = 0,
    Pillar = 1,
}

/// Reachability annotation
///
/// Carried as data only; nothing in the engine computes it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Accessibility {
    Yes,
    No,
    #[default]
    Unknown,
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub area: AreaType,
    pub horizontal_wall: WallType,
    pub vertical_wall: WallType,
    pub point: PointType,
    pub accessible: Accessibility,
}

impl Cell {
    /// A cell with nothing in it
    pub const fn empty() -> Self {
        Self {
            area: AreaType::Nothing,
            horizontal_wall: WallType::Nothing,
            vertical_wall: WallType::Nothing,
            point: PointType::Nothing,
            accessible: Accessibility::Unknown,
        }
    }

    /// A room cell with no walls
    pub const fn room() -> Self {
        Self {
            area: AreaType::Room,
            ..Self::empty()
        }
    }

    pub const fn is_room(&self) -> bool {
        matches!(self.area, AreaType::Room)
    }

    pub const fn is_entrance(&self) -> bool {
        matches!(self.area, AreaType::Entrance)
    }

    pub const fn is_accessible(&self) -> bool {
        matches!(self.accessible, Accessibility::Yes)
    }

    /// True when area, both walls and the point are all `Nothing`
    ///
    /// Accessibility is not part of emptiness.
    pub const fn is_empty(&self) -> bool {
        matches!(
            self,
            Cell {
                area: AreaType::Nothing,
                horizontal_wall: WallType::Nothing,
                vertical_wall: WallType::Nothing,
                point: PointType::Nothing,
                ..
            }
        )
    }
}
