//! HTML-specific writer extensions.

use std::io::Write;

use scriv_emit::{Block, BlockSpec, Result, SourceWriter};

use crate::attrs::Attrs;

/// DOM-style emission helpers for [`SourceWriter`].
pub trait HtmlWriterExt<W: Write> {
    /// Emit the `<!DOCTYPE html>` preamble.
    fn doctype(&mut self) -> Result<()>;

    /// Start a tag block: the opening line is the full open tag, the close
    /// line is `</name>`. An unentered tag finalizes as an empty pair.
    fn tag(&mut self, name: &str, attrs: &Attrs) -> Result<Block<'_, W>>;

    /// Emit a text line inside the current tag.
    fn text(&mut self, content: &str) -> Result<()>;
}

impl<W: Write> HtmlWriterExt<W> for SourceWriter<W> {
    fn doctype(&mut self) -> Result<()> {
        self.line("<!DOCTYPE html>")
    }

    fn tag(&mut self, name: &str, attrs: &Attrs) -> Result<Block<'_, W>> {
        self.scope(BlockSpec::enclosed(
            format!("<{name}{attrs}>"),
            format!("</{name}>"),
        ))
    }

    fn text(&mut self, content: &str) -> Result<()> {
        self.line(content)
    }
}

#[cfg(test)]
mod tests {
    use scriv_emit::Style;

    use super::*;

    fn writer() -> SourceWriter<Vec<u8>> {
        SourceWriter::with_style(Vec::new(), Style::html())
    }

    #[test]
    fn test_tag_with_attributes() {
        let mut w = writer();
        w.tag("p", &Attrs::new().set("id", "id1").set("name", "name1"))
            .unwrap()
            .enter(|w| w.text("Text"))
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "<p id=\"id1\" name=\"name1\">\n  Text\n</p>\n"
        );
    }

    #[test]
    fn test_unentered_tag_closes_empty() {
        let mut w = writer();
        w.tag("div", &Attrs::new()).unwrap();
        w.tag("p", &Attrs::new()).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "<div>\n</div>\n<p>\n</p>\n"
        );
    }

    #[test]
    fn test_nested_tags_indent_two_spaces() {
        let mut w = writer();
        w.doctype().unwrap();
        w.tag("html", &Attrs::new())
            .unwrap()
            .enter(|w| {
                w.tag("body", &Attrs::new())?.enter(|w| w.text("Hello"))
            })
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "<!DOCTYPE html>\n<html>\n  <body>\n    Hello\n  </body>\n</html>\n"
        );
    }
}
