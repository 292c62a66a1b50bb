//! Block-structured text emission for source-code generators.
//!
//! This crate is the language-agnostic core of the scriv family: it owns
//! the output sink, tracks indentation, and emits nested scoped blocks with
//! correct delimiters. The per-language crates (`scriv-cpp`, `scriv-java`,
//! `scriv-html`) are thin renderers over these primitives.
//!
//! - [`SourceWriter`] - line emission, appends, blank lines, scoped blocks
//! - [`Block`] - single-use handle for an opened block
//! - [`BlockSpec`] - per-block delimiter override (markup tags)
//! - [`Style`], [`Indent`], [`LineEnding`] - pluggable formatting strategy
//! - [`Render`], [`RenderSplit`] - traits the element renderers implement
//! - [`Error`], [`Result`] - the shared error type, all tiers fatal
//!
//! # Example
//!
//! ```
//! use scriv_emit::{SourceWriter, Style};
//!
//! let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
//! w.line("#include <cstddef>")?;
//! w.blank_line()?;
//! w.with_block("class A", ";", |w| {
//!     w.line("int m_member;")
//! })?;
//! let text = w.into_string()?;
//! assert!(text.ends_with("};\n"));
//! # Ok::<(), scriv_emit::Error>(())
//! ```

mod error;
mod render;
mod style;
mod writer;

pub use error::{Error, Result};
pub use render::{Render, RenderSplit};
pub use style::{Indent, LineEnding, Style};
pub use writer::{Block, BlockSpec, SourceWriter};
