//! # Layout Components
//!
//! Boxes and rules drawn with `^GB`.

use super::{Component, Origin};
use crate::protocol::commands::{self, FIELD_SEPARATOR};

/// Thinnest border the printer draws reliably, in dots.
pub const MIN_THICKNESS: i32 = 5;

/// Side of one texture dot, in dots.
const DOT_SIZE: i32 = 3;

/// Clearance on each side of a texture dot when sizing the grid.
const DOT_PADDING: i32 = 14;

/// A box, line, or filled rectangle.
///
/// ## Example
///
/// ```
/// use zpl_label::components::*;
///
/// assert_eq!(GraphicBox::new(0, 0, 100, 50).to_zpl(), "^FO0,0^GB100,50,5^FS");
/// assert_eq!(GraphicBox::vertical_line(10, 0, 200, 2).to_zpl(), "^FO10,0^GB5,200,5^FS");
/// assert_eq!(
///     GraphicBox::new(0, 0, 100, 50).plain_background().to_zpl(),
///     "^FO0,0^GB100,50,50^FS"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GraphicBox {
    origin: Origin,
    width: i32,
    height: i32,
    thickness: i32,
    textured: bool,
}

impl GraphicBox {
    /// An outlined box with a 5-dot border.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Origin::new(x, y),
            width,
            height,
            thickness: MIN_THICKNESS,
            textured: false,
        }
    }

    /// A vertical rule, 5 dots wide.
    pub fn vertical_line(x: i32, y: i32, height: i32, thickness: i32) -> Self {
        Self {
            thickness,
            ..Self::new(x, y, MIN_THICKNESS, height)
        }
    }

    /// A horizontal rule, 5 dots high.
    pub fn horizontal_line(x: i32, y: i32, width: i32, thickness: i32) -> Self {
        Self {
            thickness,
            ..Self::new(x, y, width, MIN_THICKNESS)
        }
    }

    /// Fill the inside with a grid of small dots.
    pub fn textured_background(mut self) -> Self {
        self.textured = true;
        self
    }

    /// Fill the box solid (border as thick as the shorter side).
    pub fn plain_background(mut self) -> Self {
        self.textured = false;
        self.thickness = self.width.min(self.height);
        self
    }

    /// Texture dots that fit inside the border, centered in the box.
    fn texture_dots(&self, out: &mut String) {
        let cell = DOT_SIZE + DOT_PADDING * 2;
        let step = DOT_SIZE + DOT_PADDING / 2;

        let columns = (self.width - self.thickness * 2) / cell;
        let rows = (self.height - self.thickness * 2) / cell;

        let start_x = self.origin.x + (self.width - columns * cell) / 2;
        let start_y = self.origin.y + (self.height - rows * cell) / 2;
        let end_x = start_x + columns * cell;
        let end_y = start_y + rows * cell;

        let mut x = start_x;
        while x < end_x {
            let mut y = start_y;
            while y < end_y {
                out.push_str(&commands::field_origin(x, y));
                out.push_str(&commands::graphic_box(DOT_SIZE, DOT_SIZE, DOT_SIZE));
                out.push_str(FIELD_SEPARATOR);
                y += step;
            }
            x += step;
        }
    }
}

impl Component for GraphicBox {
    fn emit(&self, out: &mut String) {
        self.origin.emit(out);
        out.push_str(&commands::graphic_box(
            self.width,
            self.height,
            self.thickness.max(MIN_THICKNESS),
        ));
        out.push_str(FIELD_SEPARATOR);

        if self.textured {
            self.texture_dots(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_thin_border_is_raised() {
        let zpl = GraphicBox::horizontal_line(0, 0, 300, 1).to_zpl();
        assert_eq!(zpl, "^FO0,0^GB300,5,5^FS");
    }

    #[test]
    fn test_thick_line() {
        let zpl = GraphicBox::horizontal_line(0, 0, 300, 8).to_zpl();
        assert_eq!(zpl, "^FO0,0^GB300,5,8^FS");
    }

    #[test]
    fn test_texture_too_small_has_no_dots() {
        let zpl = GraphicBox::new(0, 0, 30, 30).textured_background().to_zpl();
        assert_eq!(zpl, "^FO0,0^GB30,30,5^FS");
    }

    #[test]
    fn test_texture_grid() {
        // Inner 62x31 → 2 columns × 1 row of 31-dot cells
        let zpl = GraphicBox::new(0, 0, 72, 41).textured_background().to_zpl();
        let dots = zpl.matches("^GB3,3,3^FS").count();

        // 62 dots wide stepped by 10 → 7 columns; 31 tall → 4 rows
        assert_eq!(dots, 7 * 4);
        // First dot centered: (72 - 62) / 2 = 5, (41 - 31) / 2 = 5
        assert!(zpl.contains("^FS^FO5,5^GB3,3,3^FS"));
    }

    #[test]
    fn test_plain_background_clears_texture() {
        let zpl = GraphicBox::new(0, 0, 100, 100)
            .textured_background()
            .plain_background()
            .to_zpl();
        assert_eq!(zpl, "^FO0,0^GB100,100,100^FS");
    }
}
