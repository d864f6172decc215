//! # Label Configuration
//!
//! This module defines the label-wide settings written into every label
//! header: darkness, print width, horizontal shift and bar code defaults.
//!
//! ## Defaults
//!
//! | Setting | Value | Command |
//! |---------|-------|---------|
//! | Darkness | 15 | `~SD15` |
//! | Print width | 812 dots (4" at 203 DPI) | `^PW812` |
//! | Shift | 0 dots | `^LS0` |
//! | Bar code module / ratio / height | 2 / 3 / 10 | `^BY2,3,10` |
//!
//! ## Loading From JSON
//!
//! Every field is optional; missing fields keep their default.
//!
//! ```
//! use zpl_label::printer::LabelConfig;
//!
//! let config = LabelConfig::from_json_str(r#"{ "darkness": 20, "barcode": { "height": 50 } }"#)?;
//! assert_eq!(config.darkness, 20);
//! assert_eq!(config.width_dots, 812);
//! assert_eq!(config.barcode.height, 50);
//! assert_eq!(config.barcode.module_width, 2);
//! # Ok::<(), zpl_label::ZplError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ZplError;

/// Highest darkness level accepted by `~SD`.
pub const MAX_DARKNESS: u8 = 30;

/// # Bar Code Field Defaults (^BY)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeDefaults {
    /// Narrow bar width in dots (1-100)
    pub module_width: u32,

    /// Wide to narrow bar ratio (2-3)
    pub ratio: u32,

    /// Default bar code height in dots
    pub height: u32,
}

impl BarcodeDefaults {
    /// `^BY2,3,10`
    pub const STANDARD: Self = Self {
        module_width: 2,
        ratio: 3,
        height: 10,
    };
}

impl Default for BarcodeDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// # Label Configuration
///
/// Settings emitted once per label, before any field.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
///
/// At 203 DPI:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   812 dots ≈ 101.6mm (4 inches)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Print darkness, 0-30
    pub darkness: u8,

    /// Label print width in dots
    pub width_dots: u32,

    /// Horizontal content shift in dots (negative shifts left)
    pub shift_dots: i32,

    /// Resolution in dots per inch (for mm conversions only)
    pub dpi: u16,

    /// Bar code defaults
    pub barcode: BarcodeDefaults,
}

impl LabelConfig {
    /// # 4" Label at 203 DPI
    ///
    /// The common desktop label format (e.g. 4×6 shipping labels).
    pub const FOUR_INCH_203DPI: Self = Self {
        darkness: 15,
        width_dots: 812,
        shift_dots: 0,
        dpi: 203,
        barcode: BarcodeDefaults::STANDARD,
    };

    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ZplError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ZplError::Config(format!("invalid label config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, ZplError> {
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded label config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ZplError> {
        if self.darkness > MAX_DARKNESS {
            return Err(ZplError::Config(format!(
                "darkness {} out of range 0-{}",
                self.darkness, MAX_DARKNESS
            )));
        }
        if self.width_dots == 0 {
            return Err(ZplError::Config("print width must be positive".to_string()));
        }
        if self.dpi == 0 {
            return Err(ZplError::Config("dpi must be positive".to_string()));
        }
        Ok(())
    }

    /// Calculate dots per millimeter
    ///
    /// ## Example
    ///
    /// ```
    /// use zpl_label::printer::LabelConfig;
    ///
    /// let config = LabelConfig::FOUR_INCH_203DPI;
    /// assert!((config.dots_per_mm() - 8.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }

    /// Convert millimeters to dots
    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> i32 {
        (mm * self.dots_per_mm()).round() as i32
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::FOUR_INCH_203DPI
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabelConfig::default();
        assert_eq!(config.darkness, 15);
        assert_eq!(config.width_dots, 812);
        assert_eq!(config.shift_dots, 0);
        assert_eq!(config.barcode, BarcodeDefaults::STANDARD);
    }

    #[test]
    fn test_width_mm() {
        let width = LabelConfig::FOUR_INCH_203DPI.width_mm();
        // 812 dots at 203 DPI = 4 inches
        assert!((width - 101.6).abs() < 0.5);
    }

    #[test]
    fn test_mm_to_dots() {
        let dots = LabelConfig::FOUR_INCH_203DPI.mm_to_dots(10.0);
        assert!((dots - 80).abs() < 2);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = LabelConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LabelConfig::default());
    }

    #[test]
    fn test_negative_shift() {
        let config = LabelConfig::from_json_str(r#"{ "shift_dots": -12 }"#).unwrap();
        assert_eq!(config.shift_dots, -12);
    }

    #[test]
    fn test_rejects_out_of_range_darkness() {
        let err = LabelConfig::from_json_str(r#"{ "darkness": 31 }"#).unwrap_err();
        assert!(matches!(err, ZplError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            LabelConfig::from_json_str("{ darkness: "),
            Err(ZplError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LabelConfig::from_json_file(Path::new("/nonexistent/label.json")).unwrap_err();
        assert!(matches!(err, ZplError::Io(_)));
    }
}
