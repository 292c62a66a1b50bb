//! Java enum renderer.

use std::io::Write;

use scriv_emit::{Error, Render, Result, SourceWriter};

/// A Java enum with its values rendered inline.
///
/// ```text
/// enum Color { RED, GREEN, BLUE }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enum {
    name: String,
    values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Append one value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append several values.
    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "enum" });
        }
        Ok(())
    }
}

impl<W: Write> Render<W> for Enum {
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if self.values.is_empty() {
            w.line(&format!("enum {} {{}}", self.name))
        } else {
            w.line(&format!(
                "enum {} {{ {} }}",
                self.name,
                self.values.join(", ")
            ))
        }
    }
}
