//! # pagecraft
//!
//! Page content assembly: a stack-based graphics state, vector paths and
//! canonical shapes, source-over color compositing, and interactive form
//! widgets and annotations, collected into a serializable page model that an
//! external writer or renderer consumes.
//!
//! ## Core Features
//!
//! - **Graphics State**: save/restore stack; transforms compose, never replace
//! - **Paths**: move/line/curve/close builder with strict subpath rules
//! - **Shapes**: rectangle, rounded rectangle, ellipse/circle, regular star
//! - **Transparency**: straight alpha, paint order preserved, source-over semantics
//! - **Forms**: text fields, checkboxes, radio groups, dropdowns
//! - **Annotations**: links and stamps
//! - **Output**: JSON page model and PDF content stream operators
//!
//! ## Quick Start
//!
//! ```
//! use pagecraft::color::Rgba;
//! use pagecraft::writer::{shapes, DocumentBuilder, PageAssembler};
//!
//! # fn main() -> pagecraft::Result<()> {
//! let mut page = PageAssembler::new();
//! page.set_fill_color(Rgba::new(1.0, 0.84, 0.0, 0.7)?)?;
//! page.set_line_width(2.0)?;
//! page.fill_and_stroke(&shapes::regular_star(170.0, 162.0, 50.0, 20.0, 5)?)?;
//!
//! let mut doc = DocumentBuilder::new();
//! doc.add_page(page.finalize()?);
//! let json = doc.build().to_json()?;
//! assert!(json.contains("\"ops\""));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and color
pub mod color;
pub mod compositing;
pub mod geometry;

// Configuration
pub mod config;

// Page assembly
pub mod writer;

// Renderer validation document
pub mod fixture;

// Re-exports
pub use color::Rgba;
pub use config::{AssemblerConfig, PageSize};
pub use error::{Error, Result};
pub use writer::{Document, Page, PageAssembler};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
