//! HTML element renderer.

use std::io::Write;

use scriv_emit::{Error, Result, SourceWriter};

use crate::attrs::Attrs;
use crate::writer::HtmlWriterExt;

/// A single HTML element with attributes.
///
/// ```text
/// <p id="id1">
///   Text
/// </p>
/// <img src="logo.png"/>
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attrs: Attrs,
    self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attrs::new(),
            self_closing: false,
        }
    }

    /// Set one attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs = self.attrs.set(key, value);
        self
    }

    /// Replace the whole attribute map.
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Render as `<name attrs/>`; such an element cannot hold content.
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// Emit the element, with an optional text content line.
    ///
    /// An element without content still emits the closed empty pair
    /// (`<p>` directly followed by `</p>`).
    pub fn render<W: Write>(
        &self,
        w: &mut SourceWriter<W>,
        content: Option<&str>,
    ) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "element" });
        }
        if self.self_closing {
            if content.is_some() {
                return Err(Error::BodyNotAllowed {
                    element: "element",
                    name: self.name.clone(),
                });
            }
            return w.line(&format!("<{}{}/>", self.name, self.attrs));
        }
        let block = w.tag(&self.name, &self.attrs)?;
        match content {
            Some(text) => block.enter(|w| w.text(text)),
            // left pending: the empty pair is finalized by the next write
            None => Ok(()),
        }
    }
}
