//! # Rendering Module
//!
//! This module turns decoded images into printer bitmaps.
//!
//! ## Modules
//!
//! - [`raster`]: The [`Raster`](raster::Raster) input trait and `image` adapters
//! - [`binarize`]: Fixed-threshold conversion to a packed 1-bit [`Bitmap`](binarize::Bitmap)
//!
//! ## Usage Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use zpl_label::render::binarize;
//!
//! let img = RgbaImage::from_pixel(20, 10, Rgba([0, 0, 0, 255]));
//! let bitmap = binarize::binarize(&img)?;
//!
//! assert_eq!(bitmap.width_bytes(), 3);
//! assert_eq!(bitmap.total_bytes(), 30);
//! # Ok::<(), zpl_label::ZplError>(())
//! ```

pub mod binarize;
pub mod raster;
