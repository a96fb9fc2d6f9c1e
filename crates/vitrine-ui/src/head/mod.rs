//! Document head access behind a capability trait.
//!
//! # Design
//! - Callers depend on [`DocumentHeadWriter`], never on the DOM directly.
//! - Headless contexts inject [`NoopHeadWriter`]; browsers inject the DOM
//!   writer; tests and previews use [`MemoryHeadWriter`].
//! - Deduplication is a linear scan over existing stylesheet links.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::HeadWriteError;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomHeadWriter;

/// What happened when a stylesheet was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylesheetOutcome {
    /// A new link element was appended.
    Inserted,
    /// A link with the same `href` already existed.
    AlreadyPresent,
    /// Nothing was touched (headless context or empty `href`).
    Skipped,
}

/// Capability to add stylesheet links to the current document head.
pub trait DocumentHeadWriter {
    /// Ensure a `<link rel="stylesheet" href=...>` exists, at most once per `href`.
    ///
    /// # Errors
    ///
    /// Returns [`HeadWriteError`] when the document cannot be inspected or changed.
    fn ensure_stylesheet(&self, href: &str) -> Result<StylesheetOutcome, HeadWriteError>;
}

impl<T: DocumentHeadWriter + ?Sized> DocumentHeadWriter for &T {
    fn ensure_stylesheet(&self, href: &str) -> Result<StylesheetOutcome, HeadWriteError> {
        (**self).ensure_stylesheet(href)
    }
}

impl<T: DocumentHeadWriter + ?Sized> DocumentHeadWriter for Rc<T> {
    fn ensure_stylesheet(&self, href: &str) -> Result<StylesheetOutcome, HeadWriteError> {
        (**self).ensure_stylesheet(href)
    }
}

/// Head writer for contexts without a document.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHeadWriter;

impl DocumentHeadWriter for NoopHeadWriter {
    fn ensure_stylesheet(&self, _href: &str) -> Result<StylesheetOutcome, HeadWriteError> {
        Ok(StylesheetOutcome::Skipped)
    }
}

/// In-memory head that records stylesheet links in insertion order.
#[derive(Debug, Default)]
pub struct MemoryHeadWriter {
    stylesheets: RefCell<Vec<String>>,
}

impl MemoryHeadWriter {
    /// Start from a head that already carries the given stylesheets.
    #[must_use]
    pub fn with_stylesheets<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stylesheets: RefCell::new(hrefs.into_iter().map(Into::into).collect()),
        }
    }

    /// Stylesheet hrefs currently in the head.
    #[must_use]
    pub fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.borrow().clone()
    }

    /// Number of links pointing at `href`.
    #[must_use]
    pub fn count(&self, href: &str) -> usize {
        self.stylesheets
            .borrow()
            .iter()
            .filter(|existing| existing.as_str() == href)
            .count()
    }
}

impl DocumentHeadWriter for MemoryHeadWriter {
    fn ensure_stylesheet(&self, href: &str) -> Result<StylesheetOutcome, HeadWriteError> {
        if href.is_empty() {
            return Ok(StylesheetOutcome::Skipped);
        }
        let mut stylesheets = self.stylesheets.borrow_mut();
        if stylesheets.iter().any(|existing| existing == href) {
            return Ok(StylesheetOutcome::AlreadyPresent);
        }
        stylesheets.push(href.to_string());
        Ok(StylesheetOutcome::Inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_writer_skips_everything() {
        let outcome = NoopHeadWriter.ensure_stylesheet("https://cdn.example/a.css");
        assert_eq!(outcome.ok(), Some(StylesheetOutcome::Skipped));
    }

    #[test]
    fn memory_writer_inserts_each_href_once() {
        let head = MemoryHeadWriter::default();
        let href = "https://cdn.example/a.css";
        assert_eq!(head.ensure_stylesheet(href).ok(), Some(StylesheetOutcome::Inserted));
        assert_eq!(
            head.ensure_stylesheet(href).ok(),
            Some(StylesheetOutcome::AlreadyPresent)
        );
        assert_eq!(head.count(href), 1);
    }

    #[test]
    fn memory_writer_respects_preexisting_links() {
        let head = MemoryHeadWriter::with_stylesheets(["https://cdn.example/base.css"]);
        assert_eq!(
            head.ensure_stylesheet("https://cdn.example/base.css").ok(),
            Some(StylesheetOutcome::AlreadyPresent)
        );
        assert_eq!(head.stylesheets().len(), 1);
    }

    #[test]
    fn empty_href_is_skipped() {
        let head = MemoryHeadWriter::default();
        assert_eq!(head.ensure_stylesheet("").ok(), Some(StylesheetOutcome::Skipped));
        assert!(head.stylesheets().is_empty());
    }

    #[test]
    fn shared_writer_sees_the_same_head() {
        let head = Rc::new(MemoryHeadWriter::default());
        let shared = Rc::clone(&head);
        let _ = shared.ensure_stylesheet("https://cdn.example/b.css");
        assert_eq!(head.count("https://cdn.example/b.css"), 1);
    }
}
