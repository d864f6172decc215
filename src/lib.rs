//! # zpl-label - ZPL Label Library
//!
//! zpl-label builds ZPL II label formats for Zebra-compatible label printers.
//! It provides:
//!
//! - **Graphic field codec**: images to compressed `^GFA` fields, and back
//! - **Components**: text, text blocks, bar codes, QR codes, boxes, images
//! - **Label assembly**: header settings from a JSON-loadable configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use zpl_label::components::{ComponentExt, Image, Label, Text};
//!
//! // Load any image the `image` crate can decode
//! let logo = image::open("logo.png").map_err(|e| zpl_label::ZplError::Image(e.to_string()))?;
//!
//! let label = Label::new()
//!     .child(Image::from_raster(20, 20, &logo)?)
//!     .child(Text::new(20, 220, "Thank you!").font_size(40).bold());
//!
//! println!("{}", label.to_zpl());
//!
//! # Ok::<(), zpl_label::error::ZplError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ZPL commands and the `^GFA` codec |
//! | [`render`] | Raster input and binarization |
//! | [`components`] | Label field builders |
//! | [`printer`] | Label configuration |
//! | [`error`] | Error types |
//!
//! ## Graphic Field Codec
//!
//! [`protocol::graphics::encode_image`] is a pure function of the image:
//! threshold each pixel (R+G+B ≤ 380 is ink, transparent is never ink),
//! pack rows MSB-first, then compress the hex rows with the ZPL repeat-count
//! alphabet and line shorthand. Decoding the data reproduces the bitmap
//! exactly.

pub mod components;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;

// Re-exports for convenience
pub use error::ZplError;
pub use printer::LabelConfig;
pub use protocol::graphics::{GraphicField, encode_image};
pub use render::binarize::Bitmap;
pub use render::raster::Raster;
