//! Page content assembly.
//!
//! ## Architecture
//!
//! ```text
//! shapes / PathBuilder ──► Path
//!                            ↓
//! GraphicsStateStack ──► [PageAssembler] ◄── Widget / Annotation
//!                            ↓ finalize
//!                          Page ──► [ContentStreamBuilder] (operators + ExtGStates)
//!                            ↓
//!                    [DocumentBuilder] ──► Document (JSON for the writer)
//! ```
//!
//! ## Example
//!
//! ```
//! use pagecraft::color::Rgba;
//! use pagecraft::geometry::Rect;
//! use pagecraft::writer::form_fields::CheckboxWidget;
//! use pagecraft::writer::{shapes, DocumentBuilder, PageAssembler};
//!
//! let mut page = PageAssembler::new();
//! page.set_fill_color(Rgba::new(0.0, 0.0, 1.0, 0.4).unwrap()).unwrap();
//! page.fill(&shapes::circle(100.0, 300.0, 40.0).unwrap()).unwrap();
//! page.add_widget(CheckboxWidget::new("check_0", Rect::new(50.0, 400.0, 16.0, 16.0)).unwrap())
//!     .unwrap();
//!
//! let mut doc = DocumentBuilder::new();
//! doc.add_page(page.finalize().unwrap());
//! let doc = doc.build();
//! assert_eq!(doc.pages()[0].widgets().len(), 1);
//! ```

pub mod annotations;
mod content_stream;
mod document;
pub mod form_fields;
mod graphics_state;
mod page_assembler;
mod path;
pub mod shapes;

pub use annotations::{Annotation, LinkAnnotation, StampAnnotation};
pub use content_stream::{AlphaState, ContentStream, ContentStreamBuilder, ContentStreamOp};
pub use document::{Document, DocumentBuilder, DocumentMetadata};
pub use form_fields::{
    ButtonFieldFlags, CheckboxWidget, ChoiceFieldFlags, ChoiceWidget, FieldAppearance,
    RadioWidget, TextFieldFlags, TextFieldWidget, Widget,
};
pub use graphics_state::{DashPattern, GraphicsState, GraphicsStateStack};
pub use page_assembler::{DrawOp, Page, PageAssembler, PaintMode};
pub use path::{Path, PathBuilder, PathSegment};
