//! Free-standing page annotations.
//!
//! Annotations sit alongside form widgets on a page but carry no field value:
//!
//! - **Link**: a clickable region that opens a URI
//! - **Stamp**: a labelled rubber-stamp marker with a color
//!
//! # Example
//!
//! ```
//! use pagecraft::color::Rgba;
//! use pagecraft::geometry::Rect;
//! use pagecraft::writer::annotations::{Annotation, LinkAnnotation, StampAnnotation};
//!
//! let link = LinkAnnotation::uri(Rect::new(50.0, 632.0, 250.0, 30.0), "https://www.example.com")
//!     .unwrap();
//! let stamp = StampAnnotation::new(Rect::new(80.0, 292.0, 180.0, 50.0), "APROBADO", Rgba::red())
//!     .unwrap();
//!
//! let annotations: Vec<Annotation> = vec![link.into(), stamp.into()];
//! assert_eq!(annotations[0].subtype(), "Link");
//! ```

use super::form_fields::{validate_name, validate_rect};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;
use serde::Serialize;

/// A link annotation pointing at a URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkAnnotation {
    /// Clickable area
    rect: Rect,
    /// Target URI, kept verbatim
    target: String,
}

impl LinkAnnotation {
    /// Create a link that opens `target` when `rect` is clicked.
    pub fn uri(rect: Rect, target: impl Into<String>) -> Result<Self> {
        let target = target.into();
        validate_rect(&rect)?;
        validate_name("link target", target.trim())?;
        Ok(Self { rect, target })
    }

    /// Get the clickable area.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the target URI.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// A stamp annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampAnnotation {
    /// Bounding rectangle for the stamp
    rect: Rect,
    /// Stamp label (e.g. "Approved")
    label: String,
    /// Stamp color
    color: Rgba,
}

impl StampAnnotation {
    /// Create a stamp with the given label and color.
    pub fn new(rect: Rect, label: impl Into<String>, color: Rgba) -> Result<Self> {
        let label = label.into();
        validate_rect(&rect)?;
        validate_name("stamp label", &label)?;
        Ok(Self { rect, label, color })
    }

    /// Get the rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the color.
    pub fn color(&self) -> Rgba {
        self.color
    }
}

/// Annotation attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Annotation {
    /// URI link
    Link(LinkAnnotation),
    /// Rubber stamp
    Stamp(StampAnnotation),
}

impl Annotation {
    /// Get the annotation rectangle.
    pub fn rect(&self) -> Rect {
        match self {
            Annotation::Link(a) => a.rect(),
            Annotation::Stamp(a) => a.rect(),
        }
    }

    /// PDF annotation subtype name.
    pub fn subtype(&self) -> &'static str {
        match self {
            Annotation::Link(_) => "Link",
            Annotation::Stamp(_) => "Stamp",
        }
    }
}

impl From<LinkAnnotation> for Annotation {
    fn from(link: LinkAnnotation) -> Self {
        Annotation::Link(link)
    }
}

impl From<StampAnnotation> for Annotation {
    fn from(stamp: StampAnnotation) -> Self {
        Annotation::Stamp(stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_link_keeps_target_verbatim() {
        let url = "https://www.example.com/a%20b?x=1&y=ñ";
        let link = LinkAnnotation::uri(Rect::new(50.0, 632.0, 250.0, 30.0), url).unwrap();
        assert_eq!(link.target(), url);
    }

    #[test]
    fn test_link_validation() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(LinkAnnotation::uri(rect, "   "), Err(Error::InvalidParameter(_))));
        assert!(LinkAnnotation::uri(Rect::new(0.0, 0.0, 0.0, 10.0), "https://a").is_err());
    }

    #[test]
    fn test_stamp() {
        let stamp = StampAnnotation::new(Rect::new(80.0, 292.0, 180.0, 50.0), "APROBADO", Rgba::red())
            .unwrap();
        assert_eq!(stamp.label(), "APROBADO");
        assert_eq!(stamp.color(), Rgba::red());
        assert!(StampAnnotation::new(stamp.rect(), "", Rgba::red()).is_err());
    }

    #[test]
    fn test_annotation_dispatch() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let annot: Annotation = StampAnnotation::new(rect, "Draft", Rgba::blue()).unwrap().into();
        assert_eq!(annot.subtype(), "Stamp");
        assert_eq!(annot.rect(), rect);
    }
}
