//! Browser head writer backed by `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlLinkElement};

use super::{DocumentHeadWriter, StylesheetOutcome};
use crate::error::HeadWriteError;

const STYLESHEET_SELECTOR: &str = "link[rel=\"stylesheet\"]";

/// Writes stylesheet links into the live document head.
#[derive(Clone, Debug)]
pub struct DomHeadWriter {
    document: Document,
}

impl DomHeadWriter {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`HeadWriteError::DocumentUnavailable`] outside a browsing context.
    pub fn from_window() -> Result<Self, HeadWriteError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| Self { document })
            .ok_or(HeadWriteError::DocumentUnavailable)
    }

    /// Document the writer is bound to.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    fn has_stylesheet(&self, href: &str) -> Result<bool, HeadWriteError> {
        let links = self
            .document
            .query_selector_all(STYLESHEET_SELECTOR)
            .map_err(dom_error("query_selector_all"))?;
        for index in 0..links.length() {
            let Some(node) = links.item(index) else {
                continue;
            };
            if let Ok(link) = node.dyn_into::<HtmlLinkElement>() {
                if link.href() == href {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl DocumentHeadWriter for DomHeadWriter {
    fn ensure_stylesheet(&self, href: &str) -> Result<StylesheetOutcome, HeadWriteError> {
        if href.is_empty() {
            return Ok(StylesheetOutcome::Skipped);
        }
        if self.has_stylesheet(href)? {
            return Ok(StylesheetOutcome::AlreadyPresent);
        }

        let head = self.document.head().ok_or(HeadWriteError::HeadMissing)?;
        let link = self
            .document
            .create_element("link")
            .map_err(dom_error("create_element"))?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|element| HeadWriteError::Dom {
                operation: "dyn_into",
                detail: format!("{element:?}"),
            })?;
        link.set_rel("stylesheet");
        link.set_href(href);
        head.append_child(&link)
            .map_err(dom_error("append_child"))?;
        Ok(StylesheetOutcome::Inserted)
    }
}

fn dom_error(operation: &'static str) -> impl Fn(JsValue) -> HeadWriteError {
    move |value| HeadWriteError::Dom {
        operation,
        detail: format!("{value:?}"),
    }
}
