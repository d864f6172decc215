//! # Printer Module
//!
//! This module provides label-wide printer settings.
//!
//! ## Modules
//!
//! - [`config`]: Label header settings and JSON loading

pub mod config;

pub use config::{BarcodeDefaults, LabelConfig};
