//! Interactive form field widgets.
//!
//! Widgets describe form fields attached to a page, independent of how a
//! writer draws them. Every constructor validates its input: the rectangle
//! must have positive width and height and names must be non-empty.
//! Page-level rules (unique names, one selected radio per group) are
//! enforced when the widget is added to a
//! [`PageAssembler`](crate::writer::PageAssembler).
//!
//! # Supported Field Types
//!
//! - **Text Fields** (`TextFieldWidget`): Single-line and multiline text input
//! - **Checkboxes** (`CheckboxWidget`): Boolean on/off fields
//! - **Radio Buttons** (`RadioWidget`): One button of a named group
//! - **Choices** (`ChoiceWidget`): Dropdown selection lists
//!
//! # Example
//!
//! ```
//! use pagecraft::geometry::Rect;
//! use pagecraft::writer::form_fields::{CheckboxWidget, TextFieldWidget};
//!
//! let name_field = TextFieldWidget::new("nombre", Rect::new(130.0, 630.0, 250.0, 22.0))
//!     .unwrap()
//!     .with_value("Juan Pérez");
//!
//! let agree = CheckboxWidget::new("check_0", Rect::new(50.0, 400.0, 16.0, 16.0))
//!     .unwrap()
//!     .checked();
//! assert!(agree.is_checked());
//! assert_eq!(name_field.value(), "Juan Pérez");
//! ```

mod checkbox;
mod choice_fields;
mod field_flags;
mod radio_button;
mod text_field;

pub use checkbox::CheckboxWidget;
pub use choice_fields::ChoiceWidget;
pub use field_flags::{ButtonFieldFlags, ChoiceFieldFlags, TextFieldFlags};
pub use radio_button::RadioWidget;
pub use text_field::TextFieldWidget;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::Serialize;

/// Visual hints a writer may use when generating the widget appearance.
///
/// Set through the widget builders, which validate the font size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAppearance {
    border_color: Option<Rgba>,
    background_color: Option<Rgba>,
    font_size: f32,
}

impl Default for FieldAppearance {
    fn default() -> Self {
        Self {
            border_color: Some(Rgba::black()),
            background_color: Some(Rgba::white()),
            font_size: 12.0,
        }
    }
}

impl FieldAppearance {
    /// Border color (None for no border).
    pub fn border_color(&self) -> Option<Rgba> {
        self.border_color
    }

    /// Background color (None for transparent).
    pub fn background_color(&self) -> Option<Rgba> {
        self.background_color
    }

    /// Font size for variable text, in points (always > 0).
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Validated copy with a new font size.
    pub(crate) fn with_font_size(mut self, size: f32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::invalid(format!("font size must be > 0, got {}", size)));
        }
        self.font_size = size;
        Ok(self)
    }
}

pub(crate) fn validate_rect(rect: &Rect) -> Result<()> {
    if rect.has_positive_area() && rect.x.is_finite() && rect.y.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "widget rect must have positive width and height, got {}x{}",
            rect.width, rect.height
        )))
    }
}

pub(crate) fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        Err(Error::invalid(format!("{} must not be empty", kind)))
    } else {
        Ok(())
    }
}

/// A form field widget attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Widget {
    /// Text input
    TextField(TextFieldWidget),
    /// On/off checkbox
    Checkbox(CheckboxWidget),
    /// One button of a radio group
    Radio(RadioWidget),
    /// Dropdown choice
    Choice(ChoiceWidget),
}

impl Widget {
    /// Fully qualified field name; for radio buttons this is the group name.
    pub fn field_name(&self) -> &str {
        match self {
            Widget::TextField(w) => w.name(),
            Widget::Checkbox(w) => w.name(),
            Widget::Radio(w) => w.group_name(),
            Widget::Choice(w) => w.name(),
        }
    }

    /// Widget annotation rectangle.
    pub fn rect(&self) -> Rect {
        match self {
            Widget::TextField(w) => w.rect(),
            Widget::Checkbox(w) => w.rect(),
            Widget::Radio(w) => w.rect(),
            Widget::Choice(w) => w.rect(),
        }
    }

    /// PDF field type name (Tx, Btn, Ch).
    pub fn field_type(&self) -> &'static str {
        match self {
            Widget::TextField(_) => "Tx",
            Widget::Checkbox(_) | Widget::Radio(_) => "Btn",
            Widget::Choice(_) => "Ch",
        }
    }

    /// Raw `/Ff` value.
    pub fn field_flags(&self) -> u32 {
        match self {
            Widget::TextField(w) => w.flags().bits(),
            Widget::Checkbox(w) => w.flags().bits(),
            Widget::Radio(w) => w.flags().bits(),
            Widget::Choice(w) => w.flags().bits(),
        }
    }

    /// Appearance hints.
    pub fn appearance(&self) -> &FieldAppearance {
        match self {
            Widget::TextField(w) => w.appearance(),
            Widget::Checkbox(w) => w.appearance(),
            Widget::Radio(w) => w.appearance(),
            Widget::Choice(w) => w.appearance(),
        }
    }
}

impl From<TextFieldWidget> for Widget {
    fn from(w: TextFieldWidget) -> Self {
        Widget::TextField(w)
    }
}

impl From<CheckboxWidget> for Widget {
    fn from(w: CheckboxWidget) -> Self {
        Widget::Checkbox(w)
    }
}

impl From<RadioWidget> for Widget {
    fn from(w: RadioWidget) -> Self {
        Widget::Radio(w)
    }
}

impl From<ChoiceWidget> for Widget {
    fn from(w: ChoiceWidget) -> Self {
        Widget::Choice(w)
    }
}
