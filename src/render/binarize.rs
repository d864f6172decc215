//! # Binarizer
//!
//! Converts a [`Raster`] into a 1-bit [`Bitmap`] using a fixed brightness
//! threshold. There is no dithering or error diffusion; every pixel is
//! classified on its own.
//!
//! ## Threshold Rule
//!
//! Channels arrive premultiplied by alpha (see [`super::raster`]), so
//! semi-transparent pixels darken toward ink.
//!
//! ```text
//! sum = (R >> 8) + (G >> 8) + (B >> 8)      // 0..=765
//! alpha == 0          → background (sum forced to 381)
//! sum <= 380          → ink  (bit 1)
//! sum >  380          → background (bit 0)
//! ```
//!
//! ## Bit Packing
//!
//! Rows are packed MSB-first, each row padded to a whole byte:
//!
//! ```text
//! width = 10 → width_bytes = 2
//!
//! pixels:  █ ░ █ ░ █ ░ █ ░ █ █
//! bytes:   10101010 11000000 → AA C0
//! ```

use image::{GrayImage, Luma};

use super::raster::Raster;
use crate::error::ZplError;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Highest R+G+B sum (8-bit channels) that still prints as ink.
pub const BLACK_LIMIT: u16 = 380;

/// Classify a single pixel.
///
/// Fully transparent pixels are always background, whatever their color.
///
/// ## Example
///
/// ```
/// use zpl_label::render::binarize::is_ink;
///
/// let c = |v: u8| v as u16 * 257;
/// assert!(is_ink([c(127), c(127), c(126), 0xFFFF]));  // 380
/// assert!(!is_ink([c(127), c(127), c(127), 0xFFFF])); // 381
/// assert!(!is_ink([0, 0, 0, 0]));                      // transparent
/// ```
#[inline]
pub fn is_ink(rgba: [u16; 4]) -> bool {
    let [r, g, b, a] = rgba;
    let sum = if a == 0 {
        BLACK_LIMIT + 1
    } else {
        (r >> 8) + (g >> 8) + (b >> 8)
    };
    sum <= BLACK_LIMIT
}

/// A packed 1-bit-per-pixel image.
///
/// `data` holds `height` rows of `width_bytes` bytes each. Within a byte,
/// bit 7 is the leftmost dot. Padding bits at the end of a row are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    width_bytes: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap already-packed rows.
    ///
    /// Bits past `width` in the last byte of each row are cleared, so padding
    /// never prints.
    ///
    /// Fails with [`ZplError::InvalidInput`] if the geometry is empty or the
    /// data length is not `ceil(width / 8) * height`.
    ///
    /// ```
    /// use zpl_label::render::binarize::Bitmap;
    ///
    /// let bitmap = Bitmap::from_packed(4, 1, vec![0xFF]).unwrap();
    /// assert_eq!(bitmap.data(), &[0xF0]);
    /// ```
    pub fn from_packed(width: u32, height: u32, mut data: Vec<u8>) -> Result<Self, ZplError> {
        if width == 0 || height == 0 {
            return Err(ZplError::InvalidInput(format!(
                "bitmap must not be empty ({}x{})",
                width, height
            )));
        }

        let width_bytes = width.div_ceil(8) as usize;
        let expected = width_bytes * height as usize;
        if data.len() != expected {
            return Err(ZplError::InvalidInput(format!(
                "bitmap data length mismatch. Expected {} ({} bytes × {} rows), got {}",
                expected,
                width_bytes,
                height,
                data.len()
            )));
        }

        let used = width % 8;
        if used != 0 {
            let mask = 0xFFu8 << (8 - used);
            for row in data.chunks_mut(width_bytes) {
                if let Some(last) = row.last_mut() {
                    *last &= mask;
                }
            }
        }

        Ok(Self {
            width,
            height,
            width_bytes,
            data,
        })
    }

    /// Width in dots.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, `ceil(width / 8)`.
    pub fn width_bytes(&self) -> usize {
        self.width_bytes
    }

    /// Total packed size, `width_bytes * height`.
    pub fn total_bytes(&self) -> usize {
        self.data.len()
    }

    /// Packed rows, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width_bytes;
        &self.data[start..start + self.width_bytes]
    }

    /// Whether the dot at `(x, y)` is ink. Padding dots past `width` read as
    /// background.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x >= width_bytes * 8`.
    pub fn get(&self, x: u32, y: u32) -> bool {
        let byte = self.row(y)[x as usize / 8];
        (byte >> (7 - (x % 8))) & 1 == 1
    }

    /// Render the rows as uppercase hex, two digits per byte, with a `\n`
    /// after every row.
    ///
    /// ```
    /// use zpl_label::render::binarize::Bitmap;
    ///
    /// let bitmap = Bitmap::from_packed(10, 2, vec![0xAA, 0xC0, 0x00, 0x40]).unwrap();
    /// assert_eq!(bitmap.hex_rows(), "AAC0\n0040\n");
    /// ```
    pub fn hex_rows(&self) -> String {
        let mut out = String::with_capacity((self.width_bytes * 2 + 1) * self.height as usize);
        for row in self.data.chunks(self.width_bytes) {
            for &byte in row {
                out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
                out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
            }
            out.push('\n');
        }
        out
    }

    /// Number of ink dots.
    pub fn ink_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Render as a grayscale image (ink = black, background = white).
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) { Luma([0]) } else { Luma([255]) }
        })
    }
}

/// Threshold a raster into a packed bitmap.
///
/// Pixels are visited left-to-right, top-to-bottom. Bits accumulate MSB-first
/// and a partial byte is flushed at the end of each row.
///
/// ## Errors
///
/// [`ZplError::InvalidInput`] when the raster has zero width or height.
///
/// ## Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use zpl_label::render::binarize::binarize;
///
/// let mut img = RgbaImage::from_pixel(10, 1, Rgba([255, 255, 255, 255]));
/// img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
/// img.put_pixel(9, 0, Rgba([0, 0, 0, 255]));
///
/// let bitmap = binarize(&img).unwrap();
/// assert_eq!(bitmap.data(), &[0x80, 0x40]);
/// ```
pub fn binarize<R: Raster + ?Sized>(raster: &R) -> Result<Bitmap, ZplError> {
    let width = raster.width();
    let height = raster.height();
    if width == 0 || height == 0 {
        return Err(ZplError::InvalidInput(format!(
            "cannot encode a zero-area image ({}x{})",
            width, height
        )));
    }

    let width_bytes = width.div_ceil(8) as usize;
    let mut data = Vec::with_capacity(width_bytes * height as usize);

    for y in 0..height {
        let mut acc = 0u8;
        let mut bits = 0u32;
        for x in 0..width {
            if is_ink(raster.rgba16(x, y)) {
                acc |= 1 << (7 - bits);
            }
            bits += 1;
            if bits == 8 || x == width - 1 {
                data.push(acc);
                acc = 0;
                bits = 0;
            }
        }
    }

    log::trace!(
        "binarized {}x{} raster into {} bytes ({} per row)",
        width,
        height,
        data.len(),
        width_bytes
    );

    Ok(Bitmap {
        width,
        height,
        width_bytes,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn gray(sum: u16) -> [u16; 4] {
        // Spread the sum over the three channels
        let r = sum / 3;
        let g = sum / 3;
        let b = sum - r - g;
        [r * 257, g * 257, b * 257, 0xFFFF]
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(is_ink(gray(0)));
        assert!(is_ink(gray(380)));
        assert!(!is_ink(gray(381)));
        assert!(!is_ink(gray(765)));
    }

    #[test]
    fn test_only_top_byte_counts() {
        // Low bytes are ignored
        assert!(is_ink([0x7FFF, 0x7FFF, 0x7EFF, 0xFFFF]));
        assert!(!is_ink([0x7F00, 0x7F00, 0x7F00, 0xFFFF]));
    }

    #[test]
    fn test_transparency_overrides_color() {
        assert!(!is_ink([0, 0, 0, 0]));
        let [r, g, b, _] = gray(100);
        assert!(!is_ink([r, g, b, 0]));
        // Any non-zero alpha keeps the color rule
        assert!(is_ink([0, 0, 0, 1]));
    }

    #[test]
    fn test_zero_area_is_invalid() {
        let img = RgbaImage::new(0, 5);
        assert!(matches!(binarize(&img), Err(ZplError::InvalidInput(_))));

        let img = RgbaImage::new(5, 0);
        assert!(matches!(binarize(&img), Err(ZplError::InvalidInput(_))));
    }

    #[test]
    fn test_totals() {
        for (w, h) in [(1, 1), (7, 3), (8, 2), (9, 4), (16, 1), (17, 5)] {
            let img = RgbaImage::from_pixel(w, h, WHITE);
            let bitmap = binarize(&img).unwrap();
            assert_eq!(bitmap.width_bytes(), w.div_ceil(8) as usize);
            assert_eq!(bitmap.total_bytes(), w.div_ceil(8) as usize * h as usize);
        }
    }

    #[test]
    fn test_msb_first_packing() {
        let mut img = RgbaImage::from_pixel(8, 1, WHITE);
        img.put_pixel(0, 0, BLACK);
        img.put_pixel(7, 0, BLACK);

        let bitmap = binarize(&img).unwrap();
        assert_eq!(bitmap.data(), &[0x81]);
        assert!(bitmap.get(0, 0));
        assert!(!bitmap.get(1, 0));
        assert!(bitmap.get(7, 0));
    }

    #[test]
    fn test_partial_byte_padding_per_row() {
        // 3 dots wide, all black: each row is 11100000
        let img = RgbaImage::from_pixel(3, 2, BLACK);
        let bitmap = binarize(&img).unwrap();

        assert_eq!(bitmap.data(), &[0xE0, 0xE0]);
        assert_eq!(bitmap.hex_rows(), "E0\nE0\n");
    }

    #[test]
    fn test_single_pixel_wide() {
        let mut img = RgbaImage::from_pixel(1, 3, WHITE);
        img.put_pixel(0, 1, BLACK);

        let bitmap = binarize(&img).unwrap();
        assert_eq!(bitmap.data(), &[0x00, 0x80, 0x00]);
    }

    #[test]
    fn test_transparent_black_is_background() {
        let img = RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 0]));
        let bitmap = binarize(&img).unwrap();
        assert_eq!(bitmap.data(), &[0x00]);
    }

    #[test]
    fn test_from_packed_validates_length() {
        assert!(Bitmap::from_packed(9, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            Bitmap::from_packed(9, 2, vec![0; 3]),
            Err(ZplError::InvalidInput(_))
        ));
        assert!(matches!(
            Bitmap::from_packed(0, 2, vec![]),
            Err(ZplError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_packed_clears_padding_bits() {
        let bitmap = Bitmap::from_packed(4, 2, vec![0xFF, 0x9F]).unwrap();
        assert_eq!(bitmap.data(), &[0xF0, 0x90]);
        assert_eq!(bitmap.ink_count(), 6);
        assert!(!bitmap.get(4, 0));

        // Whole-byte widths are left alone
        let bitmap = Bitmap::from_packed(16, 1, vec![0xFF, 0xFF]).unwrap();
        assert_eq!(bitmap.data(), &[0xFF, 0xFF]);

        // Only the last byte of each row carries padding
        let bitmap = Bitmap::from_packed(9, 2, vec![0xFF, 0xFF, 0x01, 0x7F]).unwrap();
        assert_eq!(bitmap.data(), &[0xFF, 0x80, 0x01, 0x00]);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let bitmap = Bitmap::from_packed(8, 2, vec![0, 0]).unwrap();
        bitmap.row(2);
    }

    #[test]
    fn test_hex_rows_uppercase() {
        let bitmap = Bitmap::from_packed(24, 1, vec![0x0A, 0xBC, 0xF1]).unwrap();
        assert_eq!(bitmap.hex_rows(), "0ABCF1\n");
    }

    #[test]
    fn test_semi_transparent_white_is_ink() {
        // Premultiplied: 255 at alpha 100 reads as 100 per channel, sum 300
        let img = RgbaImage::from_pixel(8, 1, Rgba([255, 255, 255, 100]));
        let bitmap = binarize(&img).unwrap();
        assert_eq!(bitmap.data(), &[0xFF]);

        // Mostly opaque white stays background
        let img = RgbaImage::from_pixel(8, 1, Rgba([255, 255, 255, 200]));
        assert_eq!(binarize(&img).unwrap().data(), &[0x00]);
    }

    #[test]
    fn test_gray_image_roundtrip() {
        let bitmap = Bitmap::from_packed(10, 1, vec![0xAA, 0xC0]).unwrap();
        let img = bitmap.to_gray_image();

        assert_eq!(img.get_pixel(0, 0), &Luma([0]));
        assert_eq!(img.get_pixel(1, 0), &Luma([255]));
        assert_eq!(img.get_pixel(9, 0), &Luma([0]));
        assert_eq!(bitmap.ink_count(), 6);
    }
}
