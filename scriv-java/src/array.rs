//! Java array renderer.

use std::io::Write;

use scriv_emit::{Error, Render, Result, SourceWriter};

/// A Java array, either initialized in place or allocated with `new`.
///
/// ```text
/// int[] anArray;
/// int[] arrayWithItems = { 1, 2, 3 };
/// int[] dynamicArray = new int[16];
/// ```
#[derive(Debug, Clone, Default)]
pub struct Array {
    name: String,
    ty: String,
    items: Vec<String>,
    size: Option<usize>,
    is_dynamic: bool,
    doc: Option<String>,
}

impl Array {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Append one item of the `{ .. }` initializer.
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Append several items.
    pub fn items(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Element count for the `new` form.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Allocate with `new ty[size]` instead of an initializer list.
    pub fn dynamic(mut self) -> Self {
        self.is_dynamic = true;
        self
    }

    /// Javadoc text rendered as `/** text */` above the array.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "array" });
        }
        if self.size.is_some() && !self.items.is_empty() {
            return Err(Error::SizeConflict {
                element: "array",
                name: self.name.clone(),
                detail: "an explicit size cannot be combined with items",
            });
        }
        if self.size.is_some() && !self.is_dynamic {
            return Err(Error::SizeConflict {
                element: "array",
                name: self.name.clone(),
                detail: "an explicit size requires the `new` form",
            });
        }
        if self.is_dynamic && self.size.is_none() {
            return Err(Error::SizeConflict {
                element: "array",
                name: self.name.clone(),
                detail: "the `new` form requires an explicit size",
            });
        }
        Ok(())
    }
}

impl<W: Write> Render<W> for Array {
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if let Some(doc) = &self.doc {
            w.line(&format!("/** {doc} */"))?;
        }
        if self.is_dynamic {
            let size = self.size.unwrap_or_default();
            w.line(&format!(
                "{}[] {} = new {}[{}];",
                self.ty, self.name, self.ty, size
            ))
        } else if self.items.is_empty() {
            w.line(&format!("{}[] {};", self.ty, self.name))
        } else {
            w.line(&format!(
                "{}[] {} = {{ {} }};",
                self.ty,
                self.name,
                self.items.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use scriv_emit::Style;

    use super::*;

    fn writer() -> SourceWriter<Vec<u8>> {
        SourceWriter::with_style(Vec::new(), Style::ansi_cpp())
    }

    #[test]
    fn test_bare_array() {
        let mut w = writer();
        Array::new("anArray", "int").render(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "int[] anArray;\n");
    }

    #[test]
    fn test_initialized_array() {
        let mut w = writer();
        Array::new("arrayWithItems", "int")
            .items(["1", "2", "3"])
            .render(&mut w)
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "int[] arrayWithItems = { 1, 2, 3 };\n"
        );
    }

    #[test]
    fn test_dynamic_array() {
        let mut w = writer();
        Array::new("buffer", "byte")
            .dynamic()
            .size(16)
            .render(&mut w)
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "byte[] buffer = new byte[16];\n"
        );
    }

    #[test]
    fn test_size_with_items_is_rejected() {
        let mut w = writer();
        let array = Array::new("a", "int").dynamic().size(3).item("1");
        assert!(matches!(
            array.render(&mut w),
            Err(Error::SizeConflict { .. })
        ));
    }

    #[test]
    fn test_size_requires_dynamic() {
        let mut w = writer();
        let array = Array::new("a", "int").size(3);
        assert!(matches!(
            array.render(&mut w),
            Err(Error::SizeConflict { .. })
        ));
    }

    #[test]
    fn test_dynamic_requires_size() {
        let mut w = writer();
        let array = Array::new("a", "int").dynamic();
        assert!(matches!(
            array.render(&mut w),
            Err(Error::SizeConflict { .. })
        ));
    }
}
