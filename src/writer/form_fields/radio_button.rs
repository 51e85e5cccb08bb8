//! Radio button widget.
//!
//! Each radio button names its group; buttons sharing a group form one field
//! whose value is the export value of the selected button. At most one button
//! per group may start selected, which the page assembler checks as buttons
//! are added.
//!
//! # Example
//!
//! ```
//! use pagecraft::geometry::Rect;
//! use pagecraft::writer::form_fields::RadioWidget;
//!
//! let first = RadioWidget::new("radio_group", "sel_0", Rect::new(50.0, 300.0, 16.0, 16.0))
//!     .unwrap()
//!     .selected();
//! assert!(first.is_selected());
//! ```

use super::{validate_name, validate_rect, ButtonFieldFlags, FieldAppearance};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;
use serde::Serialize;

/// A single radio button belonging to a named group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioWidget {
    /// Group field name
    group_name: String,
    /// Export value for this button
    value: String,
    /// Bounding rectangle
    rect: Rect,
    /// Whether this button starts selected
    selected: bool,
    /// Field flags (RADIO always set)
    #[serde(serialize_with = "super::field_flags::serialize_bits")]
    flags: ButtonFieldFlags,
    /// Appearance hints
    appearance: FieldAppearance,
}

impl RadioWidget {
    /// Create an unselected radio button.
    ///
    /// # Arguments
    ///
    /// * `group_name` - Name shared by every button of the group
    /// * `value` - Export value submitted when this button is selected
    /// * `rect` - Position and size of the button
    pub fn new(group_name: impl Into<String>, value: impl Into<String>, rect: Rect) -> Result<Self> {
        let group_name = group_name.into();
        let value = value.into();
        validate_name("radio group name", &group_name)?;
        validate_name("radio export value", &value)?;
        validate_rect(&rect)?;
        Ok(Self {
            group_name,
            value,
            rect,
            selected: false,
            flags: ButtonFieldFlags::RADIO,
            appearance: FieldAppearance::default(),
        })
    }

    /// Mark this button as the group's selection.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Set the initial selection state.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Require one button of the group to stay on.
    pub fn no_toggle_to_off(mut self) -> Self {
        self.flags |= ButtonFieldFlags::NO_TOGGLE_TO_OFF;
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

    /// Get the group name.
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Get the export value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether this button starts selected.
    pub fn is_selected(&self) -> bool {
        self.selected
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radio_flags_always_radio() {
        let radio = RadioWidget::new("g", "a", Rect::new(0.0, 0.0, 16.0, 16.0))
            .unwrap()
            .no_toggle_to_off();
        assert!(radio.flags().contains(ButtonFieldFlags::RADIO));
        assert!(radio.flags().contains(ButtonFieldFlags::NO_TOGGLE_TO_OFF));
        assert!(!radio.is_selected());
    }

    #[test]
    fn test_radio_validation() {
        let rect = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert!(RadioWidget::new("", "a", rect).is_err());
        assert!(RadioWidget::new("g", "", rect).is_err());
        assert!(RadioWidget::new("g", "a", Rect::new(0.0, 0.0, 0.0, 0.0)).is_err());
    }
}
