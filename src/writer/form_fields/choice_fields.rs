//! Choice (dropdown) widget.
//!
//! # Example
//!
//! ```
//! use pagecraft::geometry::Rect;
//! use pagecraft::writer::form_fields::ChoiceWidget;
//!
//! let dropdown = ChoiceWidget::new(
//!     "dropdown",
//!     Rect::new(50.0, 150.0, 200.0, 22.0),
//!     vec!["Opción 1", "Opción 2", "Opción 3"],
//!     "Opción 2",
//! )
//! .unwrap();
//! assert_eq!(dropdown.selected_index(), Some(1));
//! ```

use super::{validate_name, validate_rect, ChoiceFieldFlags, FieldAppearance};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::Serialize;

/// A dropdown (combo box) selection field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceWidget {
    /// Field name (unique on the page)
    name: String,
    /// Bounding rectangle
    rect: Rect,
    /// Selected value (always one of `options`)
    value: String,
    /// Options in display order
    options: Vec<String>,
    /// Field flags (COMBO always set)
    #[serde(serialize_with = "super::field_flags::serialize_bits")]
    flags: ChoiceFieldFlags,
    /// Appearance hints
    appearance: FieldAppearance,
}

impl ChoiceWidget {
    /// Create a dropdown with `value` selected.
    ///
    /// Fails when `options` is empty or does not contain `value`.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        rect: Rect,
        options: impl IntoIterator<Item = S>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        validate_name("field name", &name)?;
        validate_rect(&rect)?;
        if options.is_empty() {
            return Err(Error::invalid(format!("choice field '{}' has no options", name)));
        }
        if !options.contains(&value) {
            return Err(Error::invalid(format!(
                "choice field '{}': value '{}' is not one of its options",
                name, value
            )));
        }

        Ok(Self {
            name,
            rect,
            value,
            options,
            flags: ChoiceFieldFlags::COMBO,
            appearance: FieldAppearance::default(),
        })
    }

    /// Allow typing a value that is not in the list.
    pub fn editable(mut self) -> Self {
        self.flags |= ChoiceFieldFlags::EDIT;
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

    /// Get the selected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the selected value in `options`.
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.value)
    }

    /// Get the field flags.
    pub fn flags(&self) -> ChoiceFieldFlags {
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

    fn rect() -> Rect {
        Rect::new(50.0, 150.0, 200.0, 22.0)
    }

    #[test]
    fn test_choice_value_must_be_an_option() {
        let result = ChoiceWidget::new("dropdown", rect(), vec!["a", "b"], "c");
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_choice_requires_options() {
        let result = ChoiceWidget::new("dropdown", rect(), Vec::<String>::new(), "a");
        assert!(result.is_err());
    }

    #[test]
    fn test_choice_keeps_option_order() {
        let choice = ChoiceWidget::new("dropdown", rect(), vec!["z", "a", "m"], "m")
            .unwrap()
            .editable();
        assert_eq!(choice.options(), &["z", "a", "m"]);
        assert_eq!(choice.selected_index(), Some(2));
        assert!(choice.flags().contains(ChoiceFieldFlags::COMBO | ChoiceFieldFlags::EDIT));
    }
}
