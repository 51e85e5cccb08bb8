//! Configuration for page assembly.

use crate::color::Rgba;

/// Standard page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    #[default]
    Letter,
    /// A4 (210mm x 297mm)
    A4,
    /// Legal (8.5" x 14")
    Legal,
    /// A3 (297mm x 420mm)
    A3,
    /// Custom dimensions in points
    Custom(f32, f32),
}

impl PageSize {
    /// Get dimensions in points (1 inch = 72 points).
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::A3 => (842.0, 1190.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

/// Page assembly configuration.
///
/// Every page starts from a graphics state built out of these values.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Size used for pages opened without an explicit size.
    pub page_size: PageSize,

    /// Initial fill color.
    pub fill_color: Rgba,

    /// Initial stroke color.
    pub stroke_color: Rgba,

    /// Initial line width (must be > 0).
    pub line_width: f32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblerConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_size: PageSize::Letter,
            fill_color: Rgba::black(),
            stroke_color: Rgba::black(),
            line_width: 1.0,
        }
    }

    /// Set the default page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the initial fill color.
    pub fn with_fill_color(mut self, color: Rgba) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the initial stroke color.
    pub fn with_stroke_color(mut self, color: Rgba) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the initial line width.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}
