//! HTML markup emission built on the scriv core.
//!
//! Markup blocks differ from brace blocks: the opening line is the full
//! open tag and the close line is the matching end tag, with DOM-style
//! 2-space indentation in between. [`HtmlWriterExt`] adds tag blocks and
//! the doctype preamble to any [`SourceWriter`](scriv_emit::SourceWriter);
//! [`Element`] is the renderer for a single element.
//!
//! # Example
//!
//! ```
//! use scriv_emit::{SourceWriter, Style};
//! use scriv_html::{Attrs, HtmlWriterExt};
//!
//! let mut w = SourceWriter::with_style(Vec::new(), Style::html());
//! w.doctype()?;
//! w.tag("p", &Attrs::new().set("id", "id1"))?
//!     .enter(|w| w.text("Text"))?;
//! assert_eq!(
//!     w.into_string()?,
//!     "<!DOCTYPE html>\n<p id=\"id1\">\n  Text\n</p>\n"
//! );
//! # Ok::<(), scriv_emit::Error>(())
//! ```

mod attrs;
mod element;
mod writer;

pub use attrs::Attrs;
pub use element::Element;
pub use scriv_emit::{Error, Result};
pub use writer::HtmlWriterExt;
