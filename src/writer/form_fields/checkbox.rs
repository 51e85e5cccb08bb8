//! Checkbox widget.

use super::{validate_name, validate_rect, ButtonFieldFlags, FieldAppearance};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;
use serde::Serialize;

/// A checkbox field widget.
///
/// Checkboxes are button fields that toggle between on and off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckboxWidget {
    /// Field name (unique on the page)
    name: String,
    /// Bounding rectangle for the widget
    rect: Rect,
    /// Whether the checkbox is checked
    checked: bool,
    /// Export value when checked (default: "Yes")
    export_value: String,
    /// Field flags
    #[serde(serialize_with = "super::field_flags::serialize_bits")]
    flags: ButtonFieldFlags,
    /// Appearance hints
    appearance: FieldAppearance,
}

impl CheckboxWidget {
    /// Create a new, unchecked checkbox.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique field name
    /// * `rect` - Position and size (typically square, e.g., 16x16)
    pub fn new(name: impl Into<String>, rect: Rect) -> Result<Self> {
        let name = name.into();
        validate_name("field name", &name)?;
        validate_rect(&rect)?;
        Ok(Self {
            name,
            rect,
            checked: false,
            export_value: "Yes".to_string(),
            flags: ButtonFieldFlags::empty(),
            appearance: FieldAppearance::default(),
        })
    }

    /// Set the checkbox as checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the export value (value submitted when checked).
    pub fn with_export_value(mut self, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_name("export value", &value)?;
        self.export_value = value;
        Ok(self)
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

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Value submitted when checked.
    pub fn export_value(&self) -> &str {
        &self.export_value
    }

    /// Get the field flags.
    pub fn flags(&self) -> ButtonFieldFlags {
        self.flags
    }

    /// Get the appearance hints.
    pub fn appearance(&self) -> &FieldAppearance {
        &self.appearance
    }
}
