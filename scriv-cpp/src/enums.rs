//! C++ enum renderer.

use std::io::Write;

use scriv_emit::{Error, Render, Result, SourceWriter};

/// A C++ enum with explicitly numbered items and an optional trailing
/// counter item.
///
/// ```text
/// enum Items
/// {
///     eChair = 0,
///     eTable = 1,
///     eShelve = 2,
///     eItemsCount = 3
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    prefix: Option<String>,
    is_class: bool,
    add_counter: bool,
    items: Vec<String>,
    doc: Option<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            is_class: false,
            add_counter: true,
            items: Vec::new(),
            doc: None,
        }
    }

    /// Prefix added to every item, `e` by default.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Emit `enum class` instead of `enum`.
    pub fn class_(mut self) -> Self {
        self.is_class = true;
        self
    }

    /// Drop the terminating `<Name>Count` item.
    pub fn no_counter(mut self) -> Self {
        self.add_counter = false;
        self
    }

    /// Documentation line emitted above the enum.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Append one item.
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Append several items.
    pub fn items(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.items.extend(items.into_iter().map(Into::into));
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
        if let Some(doc) = &self.doc {
            w.line(doc)?;
        }
        let keyword = if self.is_class { "enum class" } else { "enum" };
        let prefix = self.prefix.as_deref().unwrap_or("e");
        w.with_block(&format!("{keyword} {}", self.name), ";", |w| {
            let mut counter = 0usize;
            for item in &self.items {
                w.line(&format!("{prefix}{item} = {counter},"))?;
                counter += 1;
            }
            if self.add_counter {
                w.line(&format!("{prefix}{}Count = {counter}", self.name))?;
            }
            Ok(())
        })
    }
}
