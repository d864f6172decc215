//! # Declarative Components
//!
//! Builders for the fields of a ZPL label.
//!
//! ## Design Philosophy
//!
//! Each field is a value you configure with chained methods, then collect
//! into a [`Label`]:
//!
//! ```
//! use zpl_label::components::*;
//!
//! let label = Label::new()
//!     .child(Text::new(20, 20, "SHIP TO").font_size(30).bold())
//!     .child(TextBlock::new(20, 60, 400, "Churra Mart\n221B Baker St").max_lines(3))
//!     .child(GraphicBox::horizontal_line(20, 150, 770, 3))
//!     .child(Code128::new(20, 180, "1Z999AA10123456784").height(80))
//!     .child(QrCode::new(600, 180, "https://example.com"));
//!
//! let zpl = label.to_zpl();
//! assert!(zpl.starts_with("^XA~SD15"));
//! assert!(zpl.ends_with("^XZ"));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which appends ZPL text.
//! Every field starts with `^FO` and ends with `^FS`.

mod barcode;
mod graphics;
mod label;
mod layout;
mod text;

pub use barcode::*;
pub use graphics::*;
pub use label::*;
pub use layout::*;
pub use text::*;

use crate::protocol::commands;

/// Trait for declarative components.
pub trait Component {
    /// Append this component's ZPL to `out`.
    fn emit(&self, out: &mut String);
}

/// Extension trait for rendering components.
pub trait ComponentExt: Component {
    /// Render this component on its own.
    fn to_zpl(&self) -> String {
        let mut out = String::new();
        self.emit(&mut out);
        out
    }
}

// Blanket implementation for all components
impl<T: Component + ?Sized> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component + Send + Sync> {
    fn emit(&self, out: &mut String) {
        self.as_ref().emit(out);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, out: &mut String) {
        (*self).emit(out);
    }
}

/// Top-left corner of a field, in dots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

impl Origin {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Component for Origin {
    fn emit(&self, out: &mut String) {
        out.push_str(&commands::field_origin(self.x, self.y));
    }
}
