//! # ZPL Label Commands
//!
//! This module implements the fixed-syntax ZPL II commands used to frame a
//! label and position fields on it.
//!
//! ## Protocol Overview
//!
//! ZPL is a text protocol. Commands start with a caret (`^`) for format
//! commands or a tilde (`~`) for control commands, followed by a two-letter
//! mnemonic and comma-separated parameters:
//!
//! ```text
//! ^XA                     start of label
//! ^FO50,100               field origin (x, y in dots)
//! ^A0N,30,27              font
//! ^FH\^FDHello^FS         field data, terminated by ^FS
//! ^XZ                     end of label
//! ```
//!
//! ## Field Data Escaping
//!
//! Field data is preceded by `^FH\`, which enables hex escapes with `\` as
//! the indicator. Characters the parser would treat as commands are replaced
//! with their hex code (see [`escape`]).

// ============================================================================
// LABEL FRAMING
// ============================================================================

/// # Start Format (^XA)
///
/// Opens a label format. Every label must start with `^XA`.
pub const START_FORMAT: &str = "^XA";

/// # End Format (^XZ)
///
/// Closes a label format and prints it.
pub const END_FORMAT: &str = "^XZ";

/// # Field Separator (^FS)
///
/// Terminates the current field.
pub const FIELD_SEPARATOR: &str = "^FS";

/// # Field Reverse Print (^FR)
///
/// Prints the next field white-on-black against whatever is underneath.
pub const FIELD_REVERSE: &str = "^FR";

/// # Field Hex + Field Data (^FH\^FD)
///
/// Starts field data with `\` as the hex escape indicator.
pub const FIELD_DATA_HEX: &str = r"^FH\^FD";

/// # Label Reverse Off (^LRN)
pub const LABEL_REVERSE_OFF: &str = "^LRN";

/// # UTF-8 Encoding (^CI28)
pub const UTF8_ENCODING: &str = "^CI28";

/// # Tear-Off Media Mode (^MMT)
///
/// After printing, the label is advanced to the tear bar.
pub const MEDIA_TEAR_OFF: &str = "^MMT";

/// # Print Quantity (^PQ1,0,1,Y)
///
/// One label, no pause, one replicate, override pause count.
pub const PRINT_ONE: &str = "^PQ1,0,1,Y";

// ============================================================================
// PARAMETERIZED COMMANDS
// ============================================================================

/// # Set Darkness (~SD n)
///
/// Print darkness, 0 (lightest) to 30 (darkest).
///
/// ## Example
///
/// ```
/// use zpl_label::protocol::commands;
///
/// assert_eq!(commands::darkness(15), "~SD15");
/// ```
#[inline]
pub fn darkness(level: u8) -> String {
    format!("~SD{}", level)
}

/// # Print Width (^PW n)
///
/// Label print width in dots.
#[inline]
pub fn print_width(dots: u32) -> String {
    format!("^PW{}", dots)
}

/// # Label Shift (^LS n)
///
/// Shifts all label content horizontally. Negative values shift left.
#[inline]
pub fn label_shift(dots: i32) -> String {
    format!("^LS{}", dots)
}

/// # Bar Code Field Default (^BY w,r,h)
///
/// ## Parameters
///
/// | Param | Meaning | Range |
/// |-------|---------|-------|
/// | `w` | Module (narrow bar) width in dots | 1-10 |
/// | `r` | Wide to narrow bar ratio | 2.0-3.0 |
/// | `h` | Default bar code height in dots | 1-32000 |
#[inline]
pub fn barcode_defaults(module_width: u32, ratio: u32, height: u32) -> String {
    format!("^BY{},{},{}", module_width, ratio, height)
}

/// # Field Origin (^FO x,y)
///
/// Sets the top-left corner of the next field, in dots.
///
/// ```
/// use zpl_label::protocol::commands;
///
/// assert_eq!(commands::field_origin(50, 100), "^FO50,100");
/// ```
#[inline]
pub fn field_origin(x: i32, y: i32) -> String {
    format!("^FO{},{}", x, y)
}

/// # Graphic Box (^GB w,h,t)
///
/// Draws a box (or a line, when one side equals the thickness).
#[inline]
pub fn graphic_box(width: i32, height: i32, thickness: i32) -> String {
    format!("^GB{},{},{}", width, height, thickness)
}

// ============================================================================
// FIELD DATA
// ============================================================================

/// Escape characters the ZPL parser would interpret inside field data.
///
/// Used together with [`FIELD_DATA_HEX`]:
///
/// | Char | Escape |
/// |------|--------|
/// | `\` | `\5C` |
/// | `~` | `\7E` |
/// | `^` | `\5E` |
///
/// ```
/// use zpl_label::protocol::commands;
///
/// assert_eq!(commands::escape("a^b~c"), r"a\5Eb\7Ec");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str(r"\5C"),
            '~' => out.push_str(r"\7E"),
            '^' => out.push_str(r"\5E"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darkness() {
        assert_eq!(darkness(0), "~SD0");
        assert_eq!(darkness(30), "~SD30");
    }

    #[test]
    fn test_print_width() {
        assert_eq!(print_width(812), "^PW812");
    }

    #[test]
    fn test_label_shift_negative() {
        assert_eq!(label_shift(-20), "^LS-20");
        assert_eq!(label_shift(0), "^LS0");
    }

    #[test]
    fn test_barcode_defaults() {
        assert_eq!(barcode_defaults(2, 3, 10), "^BY2,3,10");
    }

    #[test]
    fn test_field_origin() {
        assert_eq!(field_origin(0, 0), "^FO0,0");
        assert_eq!(field_origin(812, 1218), "^FO812,1218");
    }

    #[test]
    fn test_graphic_box() {
        assert_eq!(graphic_box(100, 5, 5), "^GB100,5,5");
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape(r"C:\temp"), r"C:\5Ctemp");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("Olá, 世界!"), "Olá, 世界!");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // The inserted backslashes must not be escaped again
        assert_eq!(escape(r"\^"), r"\5C\5E");
    }
}
