//! Hallways and randomly placed rooms

use crate::error::{MapError, Result};
use crate::geometry::{Point, Rect};
use crate::rng::MapRng;

use super::cell::AreaType;
use super::grid::Grid;
use super::route::{self, RouteKind};

impl Grid {
    /// Carve an L-shaped hallway between two points
    ///
    /// The bend orientation comes from `route`; unsupported kinds are routed
    /// vertically with a warning. Each leg is clamped like [`Grid::place_room`]
    /// and a leg that misses the grid entirely is skipped. Fails only when
    /// both legs miss.
    pub fn place_hallway(
        &mut self,
        origin: impl Into<Point>,
        dest: impl Into<Point>,
        width: u32,
        route: RouteKind,
        rng: &mut MapRng,
    ) -> Result<()> {
        let origin = origin.into();
        let dest = dest.into();
        let orientation = route.resolve_or_fallback(rng);
        log::debug!("hallway {origin} -> {dest} ({orientation}, width {width})");

        let mut carved = None;
        for leg in route::segments(origin, dest, orientation, width) {
            match self.clamp(leg) {
                Ok(region) => {
                    self.fill_area(region, AreaType::Room, false);
                    carved = Some(Ok(()));
                }
                Err(err) => {
                    carved.get_or_insert(Err(err));
                }
            }
        }
        carved.unwrap_or(Ok(()))
    }

    /// Place a room of random size, optionally linked to the nearest room
    ///
    /// Width and height are drawn from `2..=scale` and the origin from one
    /// independent draw per axis. The room covers `origin ± size / 2` on each
    /// axis, inclusive. When `connected`, a Manhattan hallway is first carved
    /// from the room's anchor `origin + size / 2` (a corner cell of the room)
    /// to the nearest existing room cell. If the anchor falls off the grid
    /// nothing is placed and `OutOfBounds` is returned. If there is no room to link to, the room is placed
    /// on its own.
    pub fn place_random_room(
        &mut self,
        scale: usize,
        connected: bool,
        rng: &mut MapRng,
    ) -> Result<()> {
        let scale = scale.max(2);
        let width = rng.range(2, scale) as i32;
        let height = rng.range(2, scale) as i32;

        let x0 = rng.range(0, self.width() - 1) as i32;
        let y0 = rng.range(0, self.height() - 1) as i32;
        let (half_w, half_h) = (width / 2, height / 2);

        if connected {
            let anchor = Point::new(x0 + half_w, y0 + half_h);
            if !self.in_bounds(anchor) {
                return Err(MapError::OutOfBounds {
                    region: Rect::cell(anchor),
                    width: self.width(),
                    height: self.height(),
                });
            }
            match self.find_nearest_connected(anchor, rng) {
                Ok(target) => {
                    log::debug!("linking room at {anchor} to {target}");
                    self.place_hallway(anchor, target, 1, RouteKind::Manhattan, rng)?;
                }
                Err(err) => log::warn!("{err}; placing room unlinked"),
            }
        }

        self.place_room(
            (x0 - half_w, y0 - half_h),
            (x0 + half_w + 1, y0 + half_h + 1),
        )
    }
}
