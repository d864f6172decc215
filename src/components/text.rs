//! # Text Components
//!
//! Single-line text and wrapped text blocks, both using the scalable font 0.

use super::{Component, Origin};
use crate::protocol::commands::{self, FIELD_DATA_HEX, FIELD_REVERSE, FIELD_SEPARATOR};

/// Default character size in dots.
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// # Scalable Font (^A0N,h,w)
///
/// Font 0, normal orientation. Height and width are in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub height: u32,
    pub width: u32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            height: DEFAULT_FONT_SIZE,
            width: DEFAULT_FONT_SIZE,
        }
    }
}

impl Component for Font {
    fn emit(&self, out: &mut String) {
        out.push_str(&format!("^A0N,{},{}", self.height, self.width));
    }
}

fn emit_field_data(out: &mut String, text: &str) {
    out.push_str(FIELD_DATA_HEX);
    out.push_str(&commands::escape(text));
    out.push_str(FIELD_SEPARATOR);
}

/// A single line of text.
///
/// ## Example
///
/// ```
/// use zpl_label::components::*;
///
/// let text = Text::new(10, 10, "Hello").font_size(20);
/// assert_eq!(text.to_zpl(), r"^FO10,10^A0N,20,18^FH\^FDHello^FS");
/// ```
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    origin: Origin,
    font: Font,
    bold: bool,
    reversed: bool,
}

impl Text {
    /// Create a text field at `(x, y)` with the default 14-dot font.
    pub fn new(x: i32, y: i32, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            origin: Origin::new(x, y),
            font: Font::default(),
            bold: false,
            reversed: false,
        }
    }

    /// Set the character height; width becomes 90% of it.
    pub fn font_size(mut self, size: u32) -> Self {
        self.font = Font {
            height: size,
            width: size * 90 / 100,
        };
        self
    }

    /// Set height and width independently.
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Simulate bold by overprinting the text shifted 1 and 2 dots right.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Print white-on-black over whatever is underneath.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    fn emit_at(&self, origin: Origin, out: &mut String) {
        origin.emit(out);
        self.font.emit(out);
        if self.reversed {
            out.push_str(FIELD_REVERSE);
        }
        emit_field_data(out, &self.content);
    }
}

impl Component for Text {
    fn emit(&self, out: &mut String) {
        if self.bold {
            for dx in [1, 2] {
                self.emit_at(Origin::new(self.origin.x + dx, self.origin.y), out);
            }
        }
        self.emit_at(self.origin, out);
    }
}

/// A wrapped block of text (^FB).
///
/// ## Example
///
/// ```
/// use zpl_label::components::*;
///
/// let block = TextBlock::new(0, 0, 300, "Line one\nline two").max_lines(2);
/// assert_eq!(
///     block.to_zpl(),
///     "^FO0,0^A0N,14,14^FB300,2,0^FH\\^FDLine one\nline two^FS"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TextBlock {
    content: String,
    origin: Origin,
    font: Font,
    width: u32,
    max_lines: u32,
    line_spacing: i32,
    reversed: bool,
}

impl TextBlock {
    /// Create a block `width` dots wide. Defaults to 5 lines, no extra spacing.
    pub fn new(x: i32, y: i32, width: u32, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            origin: Origin::new(x, y),
            font: Font::default(),
            width,
            max_lines: 5,
            line_spacing: 0,
            reversed: false,
        }
    }

    /// Maximum number of lines before text is dropped.
    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = lines;
        self
    }

    /// Extra dots between lines (may be negative).
    pub fn line_spacing(mut self, spacing: i32) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Print white-on-black.
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Square characters of `size` dots.
    pub fn font_size(mut self, size: u32) -> Self {
        self.font = Font {
            height: size,
            width: size,
        };
        self
    }
}

impl Component for TextBlock {
    fn emit(&self, out: &mut String) {
        self.origin.emit(out);
        self.font.emit(out);
        out.push_str(&format!(
            "^FB{},{},{}",
            self.width, self.max_lines, self.line_spacing
        ));
        if self.reversed {
            out.push_str(FIELD_REVERSE);
        }
        emit_field_data(out, &self.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_default_font() {
        let text = Text::new(5, 6, "x");
        assert_eq!(text.to_zpl(), r"^FO5,6^A0N,14,14^FH\^FDx^FS");
    }

    #[test]
    fn test_font_size_narrows_width() {
        let text = Text::new(0, 0, "x").font_size(30);
        assert!(text.to_zpl().contains("^A0N,30,27"));
    }

    #[test]
    fn test_bold_overprints() {
        let zpl = Text::new(10, 0, "B").bold().to_zpl();
        assert_eq!(
            zpl,
            concat!(
                r"^FO11,0^A0N,14,14^FH\^FDB^FS",
                r"^FO12,0^A0N,14,14^FH\^FDB^FS",
                r"^FO10,0^A0N,14,14^FH\^FDB^FS",
            )
        );
    }

    #[test]
    fn test_reversed_text() {
        let zpl = Text::new(0, 0, "R").reversed().to_zpl();
        assert_eq!(zpl, r"^FO0,0^A0N,14,14^FR^FH\^FDR^FS");
    }

    #[test]
    fn test_text_is_escaped() {
        let zpl = Text::new(0, 0, "50% ^off~").to_zpl();
        assert!(zpl.contains(r"^FD50% \5Eoff\7E^FS"));
    }

    #[test]
    fn test_text_block_options() {
        let zpl = TextBlock::new(1, 2, 200, "abc")
            .font_size(20)
            .max_lines(3)
            .line_spacing(-2)
            .reversed(true)
            .to_zpl();
        assert_eq!(zpl, r"^FO1,2^A0N,20,20^FB200,3,-2^FR^FH\^FDabc^FS");
    }
}
