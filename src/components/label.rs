//! # Label Component
//!
//! The root container for building labels.

use super::Component;
use crate::printer::LabelConfig;
use crate::protocol::commands;

/// Label is the root container component.
///
/// It writes the label header from its [`LabelConfig`], then every child in
/// order, then `^XZ`.
///
/// ## Header
///
/// ```text
/// ^XA ~SD15 ^LRN ^CI28 ^MMT ^PW812 ^LS0 ^BY2,3,10 ^PQ1,0,1,Y
/// ```
///
/// ## Example
///
/// ```
/// use zpl_label::components::*;
///
/// let label = Label::new()
///     .darkness(20)
///     .child(Text::new(10, 10, "Hello"));
///
/// let zpl = label.to_zpl();
/// assert_eq!(
///     zpl,
///     r"^XA~SD20^LRN^CI28^MMT^PW812^LS0^BY2,3,10^PQ1,0,1,Y^FO10,10^A0N,14,14^FH\^FDHello^FS^XZ"
/// );
/// ```
pub struct Label {
    config: LabelConfig,
    children: Vec<Box<dyn Component + Send + Sync>>,
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Label {
    /// Create an empty label with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LabelConfig::default())
    }

    /// Create an empty label with a specific configuration.
    pub fn with_config(config: LabelConfig) -> Self {
        Self {
            config,
            children: Vec::new(),
        }
    }

    /// The label's configuration.
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Set print darkness.
    pub fn darkness(mut self, darkness: u8) -> Self {
        self.config.darkness = darkness;
        self
    }

    /// Set print width in dots.
    pub fn width(mut self, width_dots: u32) -> Self {
        self.config.width_dots = width_dots;
        self
    }

    /// Shift all content horizontally (negative shifts left).
    pub fn shift(mut self, shift_dots: i32) -> Self {
        self.config.shift_dots = shift_dots;
        self
    }

    /// Set the default bar code height.
    pub fn barcode_height(mut self, height: u32) -> Self {
        self.config.barcode.height = height;
        self
    }

    /// Add a child component.
    pub fn child<C: Component + Send + Sync + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + Send + Sync + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }

    /// Number of child components.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the label has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Label {
    fn emit(&self, out: &mut String) {
        let config = &self.config;
        out.push_str(commands::START_FORMAT);
        out.push_str(&commands::darkness(config.darkness));
        out.push_str(commands::LABEL_REVERSE_OFF);
        out.push_str(commands::UTF8_ENCODING);
        out.push_str(commands::MEDIA_TEAR_OFF);
        out.push_str(&commands::print_width(config.width_dots));
        out.push_str(&commands::label_shift(config.shift_dots));
        out.push_str(&commands::barcode_defaults(
            config.barcode.module_width,
            config.barcode.ratio,
            config.barcode.height,
        ));
        out.push_str(commands::PRINT_ONE);

        for child in &self.children {
            child.emit(out);
        }

        out.push_str(commands::END_FORMAT);
    }
}
