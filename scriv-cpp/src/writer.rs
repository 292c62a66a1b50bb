//! C++-specific writer extensions.

use std::io::Write;

use scriv_emit::{Result, SourceWriter};

/// C++-specific emission helpers for [`SourceWriter`].
pub trait CppWriterExt {
    /// Emit an access specifier or ANSI C label one indent level to the
    /// left of the current block body, e.g. `public:`.
    fn label(&mut self, text: &str) -> Result<()>;
}

impl<W: Write> CppWriterExt for SourceWriter<W> {
    fn label(&mut self, text: &str) -> Result<()> {
        self.line_at(&format!("{text}:"), -1)
    }
}
