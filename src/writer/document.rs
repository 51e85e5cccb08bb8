//! Document model.
//!
//! A [`Document`] is the ordered page sequence handed to an external writer.
//! It is produced by [`DocumentBuilder::build`] and exposes no mutating API.
//!
//! # Example
//!
//! ```
//! use pagecraft::writer::{DocumentBuilder, DocumentMetadata, PageAssembler};
//!
//! let mut assembler = PageAssembler::new();
//! let page = assembler.finalize().unwrap();
//!
//! let mut builder = DocumentBuilder::new();
//! builder.metadata(DocumentMetadata::new().title("Renderer test"));
//! builder.add_page(page);
//! let doc = builder.build();
//! assert_eq!(doc.page_count(), 1);
//! ```

use super::page_assembler::Page;
use crate::error::Result;
use serde::Serialize;

/// Metadata for a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
}

impl DocumentMetadata {
    /// Create new empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set document subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set creator application.
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }
}

/// Collects finalized pages in order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    metadata: DocumentMetadata,
    pages: Vec<Page>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document metadata.
    pub fn metadata(&mut self, metadata: DocumentMetadata) -> &mut Self {
        self.metadata = metadata;
        self
    }

    /// Append a finalized page.
    pub fn add_page(&mut self, page: Page) -> &mut Self {
        log::trace!("Page {} added to document", self.pages.len() + 1);
        self.pages.push(page);
        self
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Produce the immutable document.
    pub fn build(self) -> Document {
        log::debug!("Built document with {} page(s)", self.pages.len());
        Document {
            metadata: self.metadata,
            pages: self.pages,
        }
    }
}

/// An immutable, ordered sequence of pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    metadata: DocumentMetadata,
    pages: Vec<Page>,
}

impl Document {
    /// Pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page at `index` (0-based).
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Document metadata.
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
