//! # Error Types
//!
//! This module defines error types used throughout the zpl-label library.

use thiserror::Error;

/// Main error type for zpl-label operations
#[derive(Debug, Error)]
pub enum ZplError {
    /// Input that cannot be encoded (zero-area raster, bad bitmap geometry)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed command or field data
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Image loading or saving error
    #[error("Image error: {0}")]
    Image(String),

    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
