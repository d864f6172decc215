//! # Barcode Components
//!
//! Code 128 and QR code fields. Symbol generation happens in the printer;
//! these only emit the field commands.

use super::{Component, Origin};
use crate::protocol::commands::{FIELD_DATA_HEX, FIELD_SEPARATOR};

/// A Code 128 bar code (^BC).
///
/// Module width and ratio come from the label's `^BY` defaults.
///
/// ## Example
///
/// ```
/// use zpl_label::components::*;
///
/// assert_eq!(Code128::new(10, 20, "ABC123").to_zpl(), r"^FO10,20^BC^FH\^FDABC123^FS");
/// assert_eq!(
///     Code128::new(10, 20, "ABC123").height(60).to_zpl(),
///     r"^FO10,20^BC,60^FH\^FDABC123^FS"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Code128 {
    data: String,
    origin: Origin,
    height: Option<u32>,
}

impl Code128 {
    /// Create a Code 128 field at `(x, y)`.
    pub fn new(x: i32, y: i32, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            origin: Origin::new(x, y),
            height: None,
        }
    }

    /// Bar height in dots. Without it the `^BY` default applies.
    pub fn height(mut self, height: u32) -> Self {
        self.height = (height > 0).then_some(height);
        self
    }
}

impl Component for Code128 {
    fn emit(&self, out: &mut String) {
        self.origin.emit(out);
        out.push_str("^BC");
        if let Some(height) = self.height {
            out.push_str(&format!(",{}", height));
        }
        out.push_str(FIELD_DATA_HEX);
        out.push_str(&self.data);
        out.push_str(FIELD_SEPARATOR);
    }
}

/// A QR code (^BQN,2,m).
///
/// Model 2, error correction level L with automatic input mode.
///
/// ## Example
///
/// ```
/// use zpl_label::components::*;
///
/// let qr = QrCode::new(0, 0, "https://example.com").magnification(4);
/// assert_eq!(qr.to_zpl(), r"^FO0,0^BQN,2,4^FH\^FDLA,https://example.com^FS");
/// ```
#[derive(Debug, Clone)]
pub struct QrCode {
    uri: String,
    origin: Origin,
    magnification: u32,
}

impl QrCode {
    /// Create a QR code field with magnification 2.
    pub fn new(x: i32, y: i32, uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            origin: Origin::new(x, y),
            magnification: 2,
        }
    }

    /// Module size multiplier (1-10).
    pub fn magnification(mut self, magnification: u32) -> Self {
        self.magnification = magnification.clamp(1, 10);
        self
    }
}

impl Component for QrCode {
    fn emit(&self, out: &mut String) {
        self.origin.emit(out);
        out.push_str(&format!("^BQN,2,{}", self.magnification));
        out.push_str(FIELD_DATA_HEX);
        out.push_str("LA,");
        out.push_str(&self.uri);
        out.push_str(FIELD_SEPARATOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_code128_zero_height_uses_default() {
        let zpl = Code128::new(0, 0, "1").height(0).to_zpl();
        assert_eq!(zpl, r"^FO0,0^BC^FH\^FD1^FS");
    }

    #[test]
    fn test_qr_default_magnification() {
        let zpl = QrCode::new(5, 5, "x").to_zpl();
        assert!(zpl.contains("^BQN,2,2"));
    }

    #[test]
    fn test_qr_magnification_clamped() {
        assert!(QrCode::new(0, 0, "x").magnification(0).to_zpl().contains("^BQN,2,1"));
        assert!(QrCode::new(0, 0, "x").magnification(50).to_zpl().contains("^BQN,2,10"));
    }
}
