//! Text field widget.
//!
//! # Example
//!
//! ```
//! use pagecraft::geometry::Rect;
//! use pagecraft::writer::form_fields::TextFieldWidget;
//!
//! let field = TextFieldWidget::new("comments", Rect::new(130.0, 500.0, 350.0, 60.0))
//!     .unwrap()
//!     .with_value("Multiline comment")
//!     .multiline();
//! assert!(field.is_multiline());
//! ```

use super::{validate_name, validate_rect, FieldAppearance, TextFieldFlags};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;
use serde::Serialize;

/// A text input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFieldWidget {
    /// Field name (unique on the page)
    name: String,
    /// Bounding rectangle for the widget
    rect: Rect,
    /// Current value
    value: String,
    /// Field flags
    #[serde(serialize_with = "super::field_flags::serialize_bits")]
    flags: TextFieldFlags,
    /// Appearance hints
    appearance: FieldAppearance,
}

impl TextFieldWidget {
    /// Create a new, empty, single-line text field.
    ///
    /// # Arguments
    ///
    /// * `name` - Field name, preserved verbatim for form-data extraction
    /// * `rect` - Position and size of the field
    pub fn new(name: impl Into<String>, rect: Rect) -> Result<Self> {
        let name = name.into();
        validate_name("field name", &name)?;
        validate_rect(&rect)?;
        Ok(Self {
            name,
            rect,
            value: String::new(),
            flags: TextFieldFlags::empty(),
            appearance: FieldAppearance::default(),
        })
    }

    /// Set the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Make this a multiline text field.
    pub fn multiline(mut self) -> Self {
        self.flags |= TextFieldFlags::MULTILINE;
        self
    }

    /// Make the field read-only.
    pub fn read_only(mut self) -> Self {
        self.flags |= TextFieldFlags::READ_ONLY;
        self
    }

    /// Make the field required.
    pub fn required(mut self) -> Self {
        self.flags |= TextFieldFlags::REQUIRED;
        self
    }

    /// Set border color.
    pub fn with_border_color(mut self, color: Rgba) -> Self {
        self.appearance.border_color = Some(color);
        self
    }

    /// Set background color.
    pub fn with_background_color(mut self, color: Rgba) -> Self {
        self.appearance.background_color = Some(color);
        self
    }

    /// Set font size; must be > 0.
    pub fn with_font_size(mut self, size: f32) -> Result<Self> {
        self.appearance = self.appearance.with_font_size(size)?;
        Ok(self)
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the field accepts multiple lines.
    pub fn is_multiline(&self) -> bool {
        self.flags.contains(TextFieldFlags::MULTILINE)
    }

    /// Get the field flags.
    pub fn flags(&self) -> TextFieldFlags {
        self.flags
    }

    /// Get the appearance hints.
    pub fn appearance(&self) -> &FieldAppearance {
        &self.appearance
    }
}
