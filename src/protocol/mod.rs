//! # ZPL Protocol Implementation
//!
//! This module provides low-level command builders for the ZPL II label
//! language and the compressed graphic field codec.
//!
//! ## Module Structure
//!
//! - [`commands`]: Label framing and field commands (`^XA`, `^FO`, `^FS`, ...)
//! - [`compression`]: Run-length alphabet and line shorthand for `^GFA` data
//! - [`graphics`]: Graphic field assembly, parsing and decoding
//!
//! ## Usage Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use zpl_label::protocol::{commands, graphics};
//!
//! let logo = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]));
//!
//! let mut zpl = String::new();
//! zpl.push_str(commands::START_FORMAT);
//! zpl.push_str(&graphics::image_field(40, 40, &graphics::encode_image(&logo)?));
//! zpl.push_str(commands::END_FORMAT);
//!
//! assert_eq!(zpl, "^XA^FO40,40^GFA,32,32,2,!:::::::::::::::^FS^XZ");
//! # Ok::<(), zpl_label::ZplError>(())
//! ```

pub mod commands;
pub mod compression;
pub mod graphics;
