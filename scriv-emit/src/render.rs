//! Render traits implemented by the language element types.

use std::io::Write;

use crate::error::Result;
use crate::writer::SourceWriter;

/// An element that renders its current state through a writer.
pub trait Render<W: Write> {
    /// Emit the element's textual form.
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()>;
}

/// An element with two textual forms: a signature-only declaration and a
/// full definition carrying the fully-qualified name and body.
pub trait RenderSplit<W: Write>: Render<W> {
    /// Emit the signature-only form.
    fn render_declaration(&self, w: &mut SourceWriter<W>) -> Result<()>;

    /// Emit the full form, fully qualified if the element is nested.
    fn render_definition(&self, w: &mut SourceWriter<W>) -> Result<()>;
}
