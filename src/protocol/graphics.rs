//! # ZPL Graphic Fields
//!
//! This module turns images into `^GF` graphic fields and back.
//!
//! ## Pipeline
//!
//! ```text
//! Raster ──binarize──► Bitmap ──hex_rows──► "00FF\n..." ──compress──► ",hK0IF:"
//!                                                                       │
//!                                   "^GFA,<total>,<total>,<row>,<data>" ◄┘
//! ```
//!
//! ## Field Format
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Format | `A` (ASCII hex, compressed) |
//! | Binary byte count | `width_bytes × height` |
//! | Graphic field count | same as binary byte count |
//! | Bytes per row | `ceil(width / 8)` |
//! | Data | compressed hex (see [`compression`](super::compression)) |
//!
//! ## Bit Packing
//!
//! Same layout as every 1-bit printer bitmap:
//! - Bit 7 (MSB) = leftmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! ```

use super::commands;
use super::compression;
use crate::error::ZplError;
use crate::render::binarize::{self, Bitmap};
use crate::render::raster::Raster;

/// Field prefix for compressed ASCII graphic data.
pub const GFA_PREFIX: &str = "^GFA,";

/// # Graphic Field (^GFA,a,b,c,data)
///
/// Wrap compressed data into a graphic field. Pure formatting.
///
/// ## Example
///
/// ```
/// use zpl_label::protocol::graphics;
///
/// assert_eq!(graphics::graphic_field(2, 1, ",:"), "^GFA,2,2,1,,:");
/// ```
pub fn graphic_field(total_bytes: usize, width_bytes: usize, data: &str) -> String {
    format!(
        "{}{},{},{},{}",
        GFA_PREFIX, total_bytes, total_bytes, width_bytes, data
    )
}

/// Compress a bitmap into a graphic field.
pub fn encode_bitmap(bitmap: &Bitmap) -> String {
    let data = compression::compress(&bitmap.hex_rows(), bitmap.width_bytes());

    log::debug!(
        "encoded {}x{} bitmap: {} bytes → {} chars",
        bitmap.width(),
        bitmap.height(),
        bitmap.total_bytes(),
        data.len()
    );

    graphic_field(bitmap.total_bytes(), bitmap.width_bytes(), &data)
}

/// Threshold and compress an image into a graphic field.
///
/// This is the whole codec: the result depends only on the image.
///
/// ## Errors
///
/// [`ZplError::InvalidInput`] for a zero-area image.
///
/// ## Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use zpl_label::protocol::graphics;
///
/// let white = RgbaImage::from_pixel(8, 2, Rgba([255, 255, 255, 255]));
/// assert_eq!(graphics::encode_image(&white).unwrap(), "^GFA,2,2,1,,:");
/// ```
pub fn encode_image<R: Raster + ?Sized>(raster: &R) -> Result<String, ZplError> {
    let bitmap = binarize::binarize(raster)?;
    Ok(encode_bitmap(&bitmap))
}

/// # Positioned Image Field (^FO x,y ^GFA... ^FS)
///
/// A graphic field placed at a label position and terminated.
///
/// ```
/// use zpl_label::protocol::graphics;
///
/// let field = graphics::image_field(10, 20, "^GFA,2,2,1,,:");
/// assert_eq!(field, "^FO10,20^GFA,2,2,1,,:^FS");
/// ```
pub fn image_field(x: i32, y: i32, graphic: &str) -> String {
    let mut out = commands::field_origin(x, y);
    out.push_str(graphic);
    out.push_str(commands::FIELD_SEPARATOR);
    out
}

// ============================================================================
// PARSING
// ============================================================================

/// A parsed `^GFA` field.
///
/// Only built by [`GraphicField::parse`], so `width_bytes` is never zero and
/// always divides `total_bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicField {
    total_bytes: usize,
    width_bytes: usize,
    data: String,
}

impl GraphicField {
    /// Parse a graphic field.
    ///
    /// Leading `^FO..` and a trailing `^FS` are tolerated, so the output of
    /// [`image_field`] parses as well as a bare field. Whitespace inside the
    /// data (line breaks from pretty-printed files) is ignored.
    ///
    /// ```
    /// use zpl_label::protocol::graphics::GraphicField;
    ///
    /// let field = GraphicField::parse("^FO0,0^GFA,2,2,1,,:^FS").unwrap();
    /// assert_eq!(field.width_bytes(), 1);
    /// assert_eq!(field.height(), 2);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ZplError> {
        let start = input
            .find(GFA_PREFIX)
            .ok_or_else(|| ZplError::InvalidCommand("no ^GFA field found".to_string()))?;
        let body = &input[start + GFA_PREFIX.len()..];
        let body = body.split('^').next().unwrap_or_default();

        let mut parts = body.splitn(4, ',');
        let mut number = |name: &str| -> Result<usize, ZplError> {
            let raw = parts
                .next()
                .ok_or_else(|| ZplError::InvalidCommand(format!("missing {}", name)))?;
            raw.trim().parse().map_err(|_| {
                ZplError::InvalidCommand(format!("invalid {} '{}'", name, raw.trim()))
            })
        };

        let total_bytes = number("binary byte count")?;
        let field_count = number("graphic field count")?;
        let width_bytes = number("bytes per row")?;
        let data: String = parts
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if total_bytes != field_count {
            return Err(ZplError::InvalidCommand(format!(
                "byte counts disagree ({} vs {})",
                total_bytes, field_count
            )));
        }
        if width_bytes == 0 || total_bytes % width_bytes != 0 {
            return Err(ZplError::InvalidCommand(format!(
                "{} bytes is not a whole number of {}-byte rows",
                total_bytes, width_bytes
            )));
        }

        Ok(Self {
            total_bytes,
            width_bytes,
            data,
        })
    }

    /// Total packed bytes (`width_bytes × height`).
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Packed bytes per row.
    pub fn width_bytes(&self) -> usize {
        self.width_bytes
    }

    /// Compressed hex data, whitespace removed.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.total_bytes / self.width_bytes
    }

    /// Decode the data back into a bitmap.
    ///
    /// The field does not record the dot width, so the bitmap is
    /// `width_bytes × 8` dots wide; padding dots come back as background.
    pub fn decode(&self) -> Result<Bitmap, ZplError> {
        let data = compression::decompress(&self.data, self.width_bytes, self.height())?;
        let width = u32::try_from(self.width_bytes * 8)
            .map_err(|_| ZplError::InvalidCommand("field too wide".to_string()))?;
        let height = u32::try_from(self.height())
            .map_err(|_| ZplError::InvalidCommand("field too tall".to_string()))?;
        Bitmap::from_packed(width, height, data)
    }
}

// ============================================================================
// TESTS
// ============================================================================
