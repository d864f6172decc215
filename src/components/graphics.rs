//! # Graphics Components
//!
//! Images embedded as compressed `^GFA` graphic fields.

use super::{Component, Origin};
use crate::error::ZplError;
use crate::protocol::commands::FIELD_SEPARATOR;
use crate::protocol::graphics;
use crate::render::binarize::{self, Bitmap};
use crate::render::raster::Raster;

/// An image field.
///
/// The image is thresholded and compressed when the component is built, so
/// emitting it repeatedly is cheap.
///
/// ## Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use zpl_label::components::*;
///
/// let white = RgbaImage::from_pixel(8, 2, Rgba([255, 255, 255, 255]));
/// let field = Image::from_raster(30, 40, &white)?;
///
/// assert_eq!(field.to_zpl(), "^FO30,40^GFA,2,2,1,,:^FS");
/// # Ok::<(), zpl_label::ZplError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    origin: Origin,
    field: String,
}

impl Image {
    /// Encode a raster image placed at `(x, y)`.
    ///
    /// Fails with [`ZplError::InvalidInput`] for a zero-area image.
    pub fn from_raster<R: Raster + ?Sized>(x: i32, y: i32, raster: &R) -> Result<Self, ZplError> {
        let bitmap = binarize::binarize(raster)?;
        Ok(Self::from_bitmap(x, y, &bitmap))
    }

    /// Encode an already binarized bitmap placed at `(x, y)`.
    pub fn from_bitmap(x: i32, y: i32, bitmap: &Bitmap) -> Self {
        Self {
            origin: Origin::new(x, y),
            field: graphics::encode_bitmap(bitmap),
        }
    }

    /// The `^GFA` field without position or terminator.
    pub fn graphic_field(&self) -> &str {
        &self.field
    }
}

impl Component for Image {
    fn emit(&self, out: &mut String) {
        self.origin.emit(out);
        out.push_str(&self.field);
        out.push_str(FIELD_SEPARATOR);
    }
}
