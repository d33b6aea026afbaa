//! Connectivity analysis
//!
//! Flood fills over 4-connected room cells (component size, clearing, orphan
//! removal, partitioning) and the expanding-ring search used to find the
//! nearest room cell to a point. All traversals use an explicit stack.

use crate::error::{MapError, Result};
use crate::geometry::{Point, Rect};
use crate::rng::MapRng;

use super::cell::{AreaType, Cell};
use super::grid::Grid;

/// Components with fewer room cells than this are orphans
pub const MIN_ROOM_SIZE: usize = 15;

const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Visited mask over a grid, indexed `x * height + y`
struct Visited {
    height: usize,
    bits: Vec<bool>,
}

impl Visited {
    fn new(grid: &Grid) -> Self {
        Self {
            height: grid.height(),
            bits: vec![false; grid.width() * grid.height()],
        }
    }

    fn is_set(&self, x: usize, y: usize) -> bool {
        self.bits[x * self.height + y]
    }

    fn mark(&mut self, x: usize, y: usize) {
        self.bits[x * self.height + y] = true;
    }
}

/// A 4-connected set of room cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: Vec<Point>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Smallest rectangle holding every cell
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.cells.first()?;
        let mut lower = first;
        let mut upper = first;
        for p in &self.cells[1..] {
            lower = Point::new(lower.x.min(p.x), lower.y.min(p.y));
            upper = Point::new(upper.x.max(p.x), upper.y.max(p.y));
        }
        Some(Rect {
            lower,
            upper: Point::new(upper.x + 1, upper.y + 1),
        })
    }

    /// Closest pair of cells `(ours, theirs)` by squared distance
    ///
    /// Ties keep the first pair found. `None` if either region is empty.
    pub fn nearest_cells(&self, other: &Region) -> Option<(Point, Point)> {
        let mut best: Option<(u64, Point, Point)> = None;
        for ours in &self.cells {
            for theirs in &other.cells {
                let d = ours.distance2(theirs);
                if best.is_none_or(|(b, _, _)| d < b) {
                    best = Some((d, *ours, *theirs));
                }
            }
        }
        best.map(|(_, a, b)| (a, b))
    }
}

impl Grid {
    /// Push the on-grid 4-neighbours of a cell
    fn push_neighbours(&self, stack: &mut Vec<(usize, usize)>, x: usize, y: usize) {
        for (dx, dy) in NEIGHBOURS {
            let nx = x as i64 + i64::from(dx);
            let ny = y as i64 + i64::from(dy);
            if nx >= 0 && ny >= 0 && (nx as usize) < self.width() && (ny as usize) < self.height()
            {
                stack.push((nx as usize, ny as usize));
            }
        }
    }

    /// Collect the room component containing `(x, y)`, marking it in `visited`
    fn collect_component(&self, x: usize, y: usize, visited: &mut Visited) -> Vec<Point> {
        let mut component = Vec::new();
        let mut stack = vec![(x, y)];

        while let Some((cx, cy)) = stack.pop() {
            if visited.is_set(cx, cy) || !self.is_room_at(cx, cy) {
                continue;
            }
            visited.mark(cx, cy);
            component.push(Point::new(cx as i32, cy as i32));
            self.push_neighbours(&mut stack, cx, cy);
        }

        component
    }

    fn to_index(&self, p: Point) -> Option<(usize, usize)> {
        self.in_bounds(p).then_some((p.x as usize, p.y as usize))
    }

    /// Number of room cells 4-connected to a point
    ///
    /// 0 when the point is off the grid or not a room.
    pub fn room_size(&self, p: impl Into<Point>) -> usize {
        let Some((x, y)) = self.to_index(p.into()) else {
            return 0;
        };
        let mut visited = Visited::new(self);
        self.collect_component(x, y, &mut visited).len()
    }

    /// Turn the room component containing a point back into `Nothing`
    ///
    /// Returns how many cells were cleared.
    pub fn clear_room(&mut self, p: impl Into<Point>) -> usize {
        let Some((x, y)) = self.to_index(p.into()) else {
            return 0;
        };
        let mut visited = Visited::new(self);
        let component = self.collect_component(x, y, &mut visited);
        for p in &component {
            self.cells[p.x as usize][p.y as usize].area = AreaType::Nothing;
        }
        component.len()
    }

    /// Remove every room component smaller than [`MIN_ROOM_SIZE`]
    pub fn remove_orphans(&mut self) -> usize {
        self.remove_orphans_smaller_than(MIN_ROOM_SIZE)
    }

    /// Remove every room component with fewer than `min_size` cells
    ///
    /// Each component is measured once; returns how many were removed.
    pub fn remove_orphans_smaller_than(&mut self, min_size: usize) -> usize {
        let mut visited = Visited::new(self);
        let mut removed = 0;

        for x in 0..self.width() {
            for y in 0..self.height() {
                if visited.is_set(x, y) || !self.is_room_at(x, y) {
                    continue;
                }
                let component = self.collect_component(x, y, &mut visited);
                if component.len() < min_size {
                    for p in &component {
                        self.cells[p.x as usize][p.y as usize].area = AreaType::Nothing;
                    }
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            log::debug!("removed {removed} orphan rooms smaller than {min_size}");
        }
        removed
    }

    /// Every room component, in scan order of their first cell
    pub fn partition_regions(&self) -> Vec<Region> {
        let mut visited = Visited::new(self);
        let mut regions = Vec::new();

        for x in 0..self.width() {
            for y in 0..self.height() {
                if visited.is_set(x, y) || !self.is_room_at(x, y) {
                    continue;
                }
                let cells = self.collect_component(x, y, &mut visited);
                regions.push(Region { cells });
            }
        }

        regions
    }

    /// Nearest room cell to a point by expanding square rings
    ///
    /// See [`Grid::find_by`].
    pub fn find_nearest_connected(&self, origin: impl Into<Point>, rng: &mut MapRng) -> Result<Point> {
        self.find_by(origin, rng, Cell::is_room)
    }

    /// Nearest cell matching `cond` by expanding square rings
    ///
    /// Rings of Chebyshev radius 1, 2, 3... around `origin` are clamped to the
    /// grid and their four edges scanned. The first radius with any match
    /// stops the search and one match is picked at random. The origin cell
    /// itself is never considered. Once the clamped ring spans the whole grid
    /// without a match, `NoConnectionFound` is returned; callers fall back to
    /// the origin.
    pub fn find_by<F>(&self, origin: impl Into<Point>, rng: &mut MapRng, cond: F) -> Result<Point>
    where
        F: Fn(&Cell) -> bool,
    {
        let origin = origin.into();
        let (x0, y0) = self.to_index(origin).ok_or(MapError::OutOfBounds {
            region: Rect::cell(origin),
            width: self.width(),
            height: self.height(),
        })?;
        let (x_last, y_last) = (self.width() - 1, self.height() - 1);
        let mut found: Vec<Point> = Vec::new();
        let mut radius = 0;

        loop {
            radius += 1;
            let xmin = x0.saturating_sub(radius);
            let xmax = (x0 + radius).min(x_last);
            let ymin = y0.saturating_sub(radius);
            let ymax = (y0 + radius).min(y_last);
            let saturated = xmin == 0 && ymin == 0 && xmax == x_last && ymax == y_last;

            let mut check = |x: usize, y: usize| {
                if (x, y) != (x0, y0) && cond(&self.cells[x][y]) {
                    found.push(Point::new(x as i32, y as i32));
                }
            };
            // rows own the corners; a collapsed ring has one row or column
            for x in xmin..=xmax {
                check(x, ymin);
                if ymax != ymin {
                    check(x, ymax);
                }
            }
            for y in ymin + 1..ymax {
                check(xmin, y);
                if xmax != xmin {
                    check(xmax, y);
                }
            }

            if !found.is_empty() || saturated {
                break;
            }
        }

        rng.choose(&found)
            .copied()
            .ok_or(MapError::NoConnectionFound { origin })
    }

    /// Mark the room cell nearest to a point as the entrance
    ///
    /// A room cell at the point itself is used directly.
    pub fn place_entrance_near(&mut self, p: impl Into<Point>, rng: &mut MapRng) -> Result<Point> {
        let p = p.into();
        let target = match self.get(p) {
            Some(cell) if cell.is_room() => p,
            _ => self.find_nearest_connected(p, rng)?,
        };
        self.cells[target.x as usize][target.y as usize].area = AreaType::Entrance;
        Ok(target)
    }
}
