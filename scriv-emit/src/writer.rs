//! Block-structured text writer.
//!
//! [`SourceWriter`] owns an output sink and tracks the current indentation
//! depth. Lines are emitted through [`SourceWriter::line`]; nested scoped
//! regions are emitted through [`SourceWriter::block`], which returns a
//! [`Block`] handle entered with a closure:
//!
//! ```
//! use scriv_emit::{SourceWriter, Style};
//!
//! let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
//! w.with_block("class A", ";", |w| {
//!     w.line("int m_member;")
//! })?;
//! assert_eq!(w.into_string()?, "class A\n{\n\tint m_member;\n};\n");
//! # Ok::<(), scriv_emit::Error>(())
//! ```
//!
//! A block that is never entered stays *pending*: its delimiters are
//! emitted, bracketing nothing, as soon as the next line or block forces it
//! closed. This is how empty blocks are finalized without an explicit
//! scope in the caller.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::style::Style;

/// Delimiter layout for one block, resolved at creation time.
///
/// The writer's [`Style`] provides the default brace pair; markup blocks
/// override it so that the opening line is the full open tag and the close
/// line is the matching end tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    opening: String,
    open_delim: Option<String>,
    close_line: String,
}

impl BlockSpec {
    /// A brace-style block: opening line, open delimiter on its own line,
    /// close delimiter plus optional terminator (e.g. `;` for a class).
    pub fn braced(
        opening: impl Into<String>,
        open_delim: impl Into<String>,
        close_delim: &str,
        terminator: &str,
    ) -> Self {
        Self {
            opening: opening.into(),
            open_delim: Some(open_delim.into()),
            close_line: format!("{close_delim}{terminator}"),
        }
    }

    /// A block whose opening line already carries the delimiter (markup
    /// open tags); only the close line is emitted on exit.
    pub fn enclosed(opening: impl Into<String>, close_line: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            open_delim: None,
            close_line: close_line.into(),
        }
    }
}

/// A block whose opening line has been written but whose delimiters have
/// not yet been emitted.
#[derive(Debug)]
struct PendingBlock {
    open_delim: Option<String>,
    close_line: String,
}

/// Sequential text emitter with indentation bookkeeping and nested scoped
/// blocks.
///
/// The writer holds the last emitted line in a buffer until the next line
/// starts, so [`append`](Self::append) can extend the previous physical
/// line. [`finish`](Self::finish) flushes the buffer and returns the sink;
/// consuming the writer makes writing after close unrepresentable.
#[derive(Debug)]
pub struct SourceWriter<W: Write> {
    out: W,
    style: Style,
    depth: usize,
    line: Option<String>,
    pending: Option<PendingBlock>,
}

impl<W: Write> SourceWriter<W> {
    /// Create a writer with the default style (4-space indentation).
    pub fn new(out: W) -> Self {
        Self::with_style(out, Style::default())
    }

    /// Create a writer with an explicit formatting style.
    pub fn with_style(out: W, style: Style) -> Self {
        Self {
            out,
            style,
            depth: 0,
            line: None,
            pending: None,
        }
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The writer's formatting style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Emit a line at the current indentation depth.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.line_at(text, 0)
    }

    /// Emit a line at the current depth plus `offset` indent levels.
    ///
    /// An offset that underflows depth zero is a contract violation and
    /// fails with [`Error::IndentUnderflow`].
    pub fn line_at(&mut self, text: &str, offset: i32) -> Result<()> {
        self.finalize_pending()?;
        self.emit(text, offset)
    }

    /// Extend the previous physical line; no indentation, no line ending.
    ///
    /// Does not touch pending-block state, so the opening line of a block
    /// can still be extended before the block is entered or finalized.
    pub fn append(&mut self, text: &str) {
        match &mut self.line {
            Some(line) => line.push_str(text),
            None => self.line = Some(text.to_string()),
        }
    }

    /// Insert `n` empty lines (no indentation padding).
    pub fn blank_lines(&mut self, n: usize) -> Result<()> {
        self.finalize_pending()?;
        for _ in 0..n {
            self.emit("", 0)?;
        }
        Ok(())
    }

    /// Insert a single empty line.
    pub fn blank_line(&mut self) -> Result<()> {
        self.blank_lines(1)
    }

    /// Start a scoped block using the style's delimiter pair.
    ///
    /// Writes `opening` as a line and registers the block as pending. The
    /// returned [`Block`] is entered with [`Block::enter`]; if it is
    /// dropped unentered, the next write finalizes the block with its
    /// delimiters bracketing nothing.
    pub fn block(&mut self, opening: &str, terminator: &str) -> Result<Block<'_, W>> {
        let spec = BlockSpec::braced(
            opening,
            self.style.open_delim,
            self.style.close_delim,
            terminator,
        );
        self.scope(spec)
    }

    /// Start a scoped block with per-block delimiters.
    pub fn scope(&mut self, spec: BlockSpec) -> Result<Block<'_, W>> {
        self.finalize_pending()?;
        self.emit(&spec.opening, 0)?;
        self.pending = Some(PendingBlock {
            open_delim: spec.open_delim,
            close_line: spec.close_line,
        });
        Ok(Block { writer: self })
    }

    /// Start a block, enter it, run `f` inside it, and exit it.
    pub fn with_block<F>(&mut self, opening: &str, terminator: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.block(opening, terminator)?.enter(f)
    }

    /// Finalize any pending block, flush the buffered line and the sink,
    /// and return the sink.
    pub fn finish(mut self) -> Result<W> {
        self.finalize_pending()?;
        self.flush_line()?;
        self.out.flush()?;
        Ok(self.out)
    }

    /// Emit the delimiters of an unentered pending block, if one exists.
    fn finalize_pending(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            if let Some(open) = pending.open_delim {
                self.emit(&open, 0)?;
            }
            self.emit(&pending.close_line, 0)?;
        }
        Ok(())
    }

    /// Flush the buffered line, then buffer a new one. Empty text stays an
    /// empty line rather than indentation padding.
    fn emit(&mut self, text: &str, offset: i32) -> Result<()> {
        let depth = self
            .depth
            .checked_add_signed(offset as isize)
            .ok_or(Error::IndentUnderflow {
                depth: self.depth,
                offset,
            })?;
        self.flush_line()?;
        let mut line = String::new();
        if !text.is_empty() {
            for _ in 0..depth {
                line.push_str(self.style.indent.as_str());
            }
            line.push_str(text);
        }
        self.line = Some(line);
        Ok(())
    }

    fn flush_line(&mut self) -> Result<()> {
        if let Some(line) = self.line.take() {
            self.out.write_all(line.as_bytes())?;
            self.out.write_all(self.style.line_ending.as_str().as_bytes())?;
        }
        Ok(())
    }
}

impl SourceWriter<Vec<u8>> {
    /// Finish the writer and return the emitted text.
    pub fn into_string(self) -> Result<String> {
        let bytes = self.finish()?;
        Ok(String::from_utf8(bytes).expect("emitted text is UTF-8"))
    }
}

impl SourceWriter<BufWriter<File>> {
    /// Create a writer over a newly created (or truncated) file.
    pub fn create(path: impl AsRef<Path>, style: Style) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_style(BufWriter::new(file), style))
    }
}

/// Handle for a block whose opening line has been written.
///
/// The handle mutably borrows the writer, so no other writes can
/// interleave while it is live. Entry is single-use: [`enter`](Self::enter)
/// consumes the handle, and exit always restores the depth captured at
/// entry.
#[derive(Debug)]
pub struct Block<'w, W: Write> {
    writer: &'w mut SourceWriter<W>,
}

impl<'w, W: Write> Block<'w, W> {
    /// Extend the block's opening line (e.g. a trailing inheritance
    /// clause) before the block is entered or finalized.
    pub fn append(&mut self, text: &str) {
        self.writer.append(text);
    }

    /// Enter the block: emit the open delimiter, indent, run `f`, then
    /// dedent and emit the close delimiter plus terminator.
    ///
    /// A pending block created inside `f` and never entered is finalized
    /// before this block closes.
    pub fn enter<F>(self, f: F) -> Result<()>
    where
        F: FnOnce(&mut SourceWriter<W>) -> Result<()>,
    {
        let pending = self
            .writer
            .pending
            .take()
            .expect("a live Block always has its pending state");
        if let Some(open) = pending.open_delim {
            self.writer.emit(&open, 0)?;
        }
        self.writer.depth += 1;
        let entry_depth = self.writer.depth;
        f(&mut *self.writer)?;
        self.writer.finalize_pending()?;
        debug_assert_eq!(
            self.writer.depth, entry_depth,
            "block exited at a different depth than it was entered"
        );
        self.writer.depth -= 1;
        self.writer.emit(&pending.close_line, 0)?;
        Ok(())
    }
}
