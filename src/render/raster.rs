//! # Raster Input
//!
//! The codec never parses image files. It reads pixels through the
//! [`Raster`] trait, which any decoded image can implement.
//!
//! ## Channel Depth
//!
//! Pixels are reported as four 16-bit channels (R, G, B, A). 8-bit sources
//! are widened with `v * 257`, so the top 8 bits of every channel equal the
//! original byte:
//!
//! ```text
//! 0x00 → 0x0000    0x80 → 0x8080    0xFF → 0xFFFF
//! ```
//!
//! ## Alpha
//!
//! Color channels are premultiplied by alpha (`c * a / 0xFFFF`), so a
//! semi-transparent pixel reads darker than its straight color. Opaque
//! pixels are unchanged; fully transparent ones read as `[0, 0, 0, 0]`.
//!
//! ```text
//! straight [255, 255, 255, 100] → premultiplied [100, 100, 100, 100]
//! ```

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Rgba, RgbaImage};

/// A decoded image the binarizer can read.
pub trait Raster {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel at `(x, y)` as premultiplied `[r, g, b, a]`, 16 bits per
    /// channel.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

/// Widen an 8-bit RGBA pixel to 16 bits per channel.
#[inline]
pub fn widen(p: [u8; 4]) -> [u16; 4] {
    p.map(|v| v as u16 * 257)
}

/// Premultiply the color channels of a straight 16-bit RGBA pixel.
#[inline]
pub fn premultiply(p: [u16; 4]) -> [u16; 4] {
    let [r, g, b, a] = p;
    let scale = |c: u16| (c as u32 * a as u32 / 0xFFFF) as u16;
    [scale(r), scale(g), scale(b), a]
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        premultiply(widen(self.get_pixel(x, y).0))
    }
}

impl Raster for ImageBuffer<Rgba<u16>, Vec<u16>> {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        premultiply(self.get_pixel(x, y).0)
    }
}

impl Raster for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        // 16-bit variants are read directly; going through get_pixel would
        // round instead of keeping the top byte.
        let straight = match self {
            DynamicImage::ImageLuma16(buf) => buf.get_pixel(x, y).to_rgba().0,
            DynamicImage::ImageLumaA16(buf) => buf.get_pixel(x, y).to_rgba().0,
            DynamicImage::ImageRgb16(buf) => buf.get_pixel(x, y).to_rgba().0,
            DynamicImage::ImageRgba16(buf) => buf.get_pixel(x, y).0,
            _ => widen(GenericImageView::get_pixel(self, x, y).0),
        };
        premultiply(straight)
    }
}
