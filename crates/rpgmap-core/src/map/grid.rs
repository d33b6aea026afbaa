//! The map grid and its placement primitives
//!
//! Generation passes that build on these primitives live next to this file
//! (`hallway`, `cave`, `connectivity`, `dungeon`) as further `impl Grid`
//! blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::geometry::{Point, Rect};

use super::cell::{AreaType, Cell};

/// A fixed-size grid of cells, indexed `cells[x][y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    pub(super) cells: Vec<Vec<Cell>>,
}

/// Unchecked serialized form, validated before it becomes a [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = MapError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let well_formed = raw.width > 0
            && raw.height > 0
            && raw.cells.len() == raw.width
            && raw.cells.iter().all(|column| column.len() == raw.height);
        if !well_formed {
            return Err(MapError::MalformedGrid {
                width: raw.width,
                height: raw.height,
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Make an empty grid
    ///
    /// Both dimensions are raised to at least 1.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![vec![Cell::empty(); height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Size as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The whole grid as a rectangle
    pub fn bounds(&self) -> Rect {
        Rect {
            lower: Point::new(0, 0),
            upper: Point::new(self.width as i32, self.height as i32),
        }
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Cell at a point, if it is on the grid
    pub fn get(&self, p: impl Into<Point>) -> Option<&Cell> {
        let p = p.into();
        self.in_bounds(p)
            .then(|| &self.cells[p.x as usize][p.y as usize])
    }

    /// Mutable cell at a point, if it is on the grid
    pub fn get_mut(&mut self, p: impl Into<Point>) -> Option<&mut Cell> {
        let p = p.into();
        if self.in_bounds(p) {
            Some(&mut self.cells[p.x as usize][p.y as usize])
        } else {
            None
        }
    }

    /// Replace the cell at a point
    pub fn set(&mut self, p: impl Into<Point>, cell: Cell) -> Result<()> {
        let p = p.into();
        let region = Rect::cell(p);
        let (width, height) = self.dimensions();
        let slot = self.get_mut(p).ok_or(MapError::OutOfBounds {
            region,
            width,
            height,
        })?;
        *slot = cell;
        Ok(())
    }

    /// Area type at a point; off-grid points read as `Nothing`
    pub fn area_at(&self, p: impl Into<Point>) -> AreaType {
        self.get(p).map_or(AreaType::Nothing, |c| c.area)
    }

    pub(super) fn is_room_at(&self, x: usize, y: usize) -> bool {
        self.cells[x][y].is_room()
    }

    /// True when the point lies on the outermost ring of cells
    pub fn on_edge(&self, x: usize, y: usize) -> bool {
        x == 0 || x == self.width - 1 || y == 0 || y == self.height - 1
    }

    /// Number of cells with the given area type
    pub fn count_area(&self, area: AreaType) -> usize {
        self.cells
            .iter()
            .flat_map(|col| col.iter())
            .filter(|cell| cell.area == area)
            .count()
    }

    /// Reset every cell
    pub fn clear(&mut self) {
        for col in &mut self.cells {
            col.fill(Cell::empty());
        }
    }

    /// Clamp a rectangle to the grid, or report that nothing of it is on the grid
    pub(super) fn clamp(&self, region: Rect) -> Result<Rect> {
        region
            .clamp_to(self.width, self.height)
            .ok_or(MapError::OutOfBounds {
                region,
                width: self.width,
                height: self.height,
            })
    }

    /// Mark a rectangle as room
    ///
    /// The corners are ordered per axis and the half-open rectangle
    /// `[lower, upper)` is clamped to the grid. When nothing is left after
    /// clamping the grid is untouched and `OutOfBounds` is returned.
    pub fn place_room(&mut self, a: impl Into<Point>, b: impl Into<Point>) -> Result<()> {
        let region = self.clamp(Rect::from_corners(a, b))?;
        self.fill_area(region, AreaType::Room, false);
        Ok(())
    }

    /// Mark a room from an origin and signed extents
    ///
    /// A negative extent grows the room towards lower coordinates. Both the
    /// origin and the far boundary must be on the grid, otherwise nothing is
    /// changed. Entrances inside the room are kept.
    pub fn place_room_dimensions(
        &mut self,
        origin: impl Into<Point>,
        extent_h: i32,
        extent_v: i32,
    ) -> Result<()> {
        let origin = origin.into();
        let far = Point::new(
            origin.x.saturating_add(extent_h),
            origin.y.saturating_add(extent_v),
        );
        let region = Rect::from_corners(origin, far);
        if !self.in_bounds(origin) || !self.in_bounds(far) {
            return Err(MapError::OutOfBounds {
                region,
                width: self.width,
                height: self.height,
            });
        }
        self.fill_area(region, AreaType::Room, true);
        Ok(())
    }

    /// Turn the first room cell at or right of `(x, y)` into an entrance
    ///
    /// Scans along the row up to the grid edge. Returns where the entrance
    /// went, or `None` if the row had no room cell from `x` onwards.
    pub fn place_entrance(&mut self, x: i32, y: i32) -> Option<Point> {
        if y < 0 || y as usize >= self.height {
            return None;
        }
        let row = y as usize;
        let start = x.max(0) as usize;
        let col = (start..self.width).find(|&col| self.is_room_at(col, row))?;
        self.cells[col][row].area = AreaType::Entrance;
        Some(Point::new(col as i32, y))
    }

    /// Set the area of every cell in an on-grid rectangle
    pub(super) fn fill_area(&mut self, region: Rect, area: AreaType, keep_entrances: bool) {
        for p in region.points() {
            let cell = &mut self.cells[p.x as usize][p.y as usize];
            if keep_entrances && cell.is_entrance() {
                continue;
            }
            cell.area = area;
        }
    }
}

/// One text row per grid row, using [`AreaType::symbol`]
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| self.cells[x][y].area.symbol())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
