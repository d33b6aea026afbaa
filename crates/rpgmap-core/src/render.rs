//! Drawing contract for map renderers
//!
//! The engine never draws. A renderer implements [`Canvas`] over whatever
//! surface it owns and [`render`] walks the grid issuing fill calls.

use crate::map::{AreaType, Grid};

/// An RGB colour with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const ROOM: Color = Color::rgb(0.8, 0.8, 0.8);
    pub const ENTRANCE: Color = Color::rgb(1.0, 0.078, 0.5764);
    pub const TESTED: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Colour for an area type, `None` for types that are left undrawn
    pub const fn for_area(area: AreaType) -> Option<Color> {
        match area {
            AreaType::Room => Some(Color::ROOM),
            AreaType::Entrance => Some(Color::ENTRANCE),
            AreaType::Tested => Some(Color::TESTED),
            AreaType::Nothing | AreaType::Stairs => None,
        }
    }
}

/// A surface a renderer can paint on
pub trait Canvas {
    fn set_color(&mut self, color: Color);

    /// Fill an axis-aligned rectangle in pixels
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
}

/// Pixel offset of a cell edge, `None` past the `u32` range
fn pixel(index: usize, scale: u32) -> Option<u32> {
    u32::try_from(index).ok()?.checked_mul(scale)
}

/// Paint every drawable cell as a `scale`-pixel square
///
/// Cells whose pixel offset does not fit in a `u32` are skipped.
pub fn render<C: Canvas + ?Sized>(grid: &Grid, scale: u32, canvas: &mut C) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let Some(cell) = grid.get((x as i32, y as i32)) else {
                continue;
            };
            let Some(color) = Color::for_area(cell.area) else {
                continue;
            };
            let (Some(px), Some(py)) = (pixel(x, scale), pixel(y, scale)) else {
                continue;
            };
            canvas.set_color(color);
            canvas.fill_rect(px, py, scale, scale);
        }
    }
}
