//! Hallway routing
//!
//! Decides which way an L-shaped hallway bends and splits it into the two
//! rectangles that get carved.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::{MapError, Result};
use crate::geometry::{Point, Rect};
use crate::rng::MapRng;

/// How two points should be joined
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RouteKind {
    /// Single bend, orientation picked at random
    #[default]
    Manhattan,
    /// Horizontal leg first
    Horizontal,
    /// Vertical leg first
    Vertical,
    /// Straight line, diagonals allowed
    Direct,
    /// Legs at 0, 45 and 90 degrees
    Subway,
}

/// Concrete bend of an L-shaped hallway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl RouteKind {
    /// Resolve to a concrete orientation
    ///
    /// Manhattan consumes one coin flip. Kinds without an implementation
    /// return `UnsupportedRoute`; see [`RouteKind::resolve_or_fallback`].
    pub fn resolve(self, rng: &mut MapRng) -> Result<Orientation> {
        match self {
            RouteKind::Manhattan => Ok(if rng.coin() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            }),
            RouteKind::Horizontal => Ok(Orientation::Horizontal),
            RouteKind::Vertical => Ok(Orientation::Vertical),
            RouteKind::Direct | RouteKind::Subway => Err(MapError::UnsupportedRoute(self)),
        }
    }

    /// Resolve, routing unsupported kinds vertically with a warning
    pub fn resolve_or_fallback(self, rng: &mut MapRng) -> Orientation {
        self.resolve(rng).unwrap_or_else(|err| {
            log::warn!("{err}; routing vertically instead");
            Orientation::Vertical
        })
    }
}

/// The two rectangles of an L-shaped hallway
///
/// Each leg covers both of its endpoints and is `width` cells thick, growing
/// towards higher coordinates. A width of 0 is treated as 1.
pub fn segments(origin: Point, dest: Point, orientation: Orientation, width: u32) -> [Rect; 2] {
    let bend = match orientation {
        Orientation::Horizontal => Point::new(dest.x, origin.y),
        Orientation::Vertical => Point::new(origin.x, dest.y),
    };
    [leg(origin, bend, width), leg(bend, dest, width)]
}

fn leg(a: Point, b: Point, width: u32) -> Rect {
    let thickness = i32::try_from(width.max(1)).unwrap_or(i32::MAX);
    let span = Rect::from_corners(a, b);
    Rect {
        lower: span.lower,
        upper: Point::new(
            span.upper.x.saturating_add(thickness),
            span.upper.y.saturating_add(thickness),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kinds_resolve_without_rng_draws() {
        let mut a = MapRng::new(3);
        let mut b = MapRng::new(3);
        assert_eq!(
            RouteKind::Horizontal.resolve(&mut a),
            Ok(Orientation::Horizontal)
        );
        assert_eq!(RouteKind::Vertical.resolve(&mut a), Ok(Orientation::Vertical));
        // no draws were consumed
        assert_eq!(a.rn2(1000), b.rn2(1000));
    }

    #[test]
    fn test_manhattan_picks_both() {
        let mut rng = MapRng::new(42);
        let mut horizontal = 0;
        let mut vertical = 0;
        for _ in 0..200 {
            match RouteKind::Manhattan.resolve(&mut rng).unwrap() {
                Orientation::Horizontal => horizontal += 1,
                Orientation::Vertical => vertical += 1,
            }
        }
        assert!(horizontal > 50 && vertical > 50);
    }

    #[test]
    fn test_unsupported_falls_back_vertical() {
        let mut rng = MapRng::new(42);
        assert_eq!(
            RouteKind::Direct.resolve(&mut rng),
            Err(MapError::UnsupportedRoute(RouteKind::Direct))
        );
        assert_eq!(
            RouteKind::Subway.resolve_or_fallback(&mut rng),
            Orientation::Vertical
        );
    }

    #[test]
    fn test_horizontal_segments() {
        let [first, second] = segments(
            Point::new(1, 1),
            Point::new(5, 4),
            Orientation::Horizontal,
            1,
        );
        assert_eq!(first, Rect::from_corners((1, 1), (6, 2)));
        assert_eq!(second, Rect::from_corners((5, 1), (6, 5)));
    }

    #[test]
    fn test_vertical_segments_reverse_direction() {
        let [first, second] = segments(
            Point::new(5, 4),
            Point::new(1, 1),
            Orientation::Vertical,
            2,
        );
        assert_eq!(first, Rect::from_corners((5, 1), (7, 6)));
        assert_eq!(second, Rect::from_corners((1, 1), (7, 3)));
    }
}
