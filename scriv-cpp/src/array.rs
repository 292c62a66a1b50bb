//! C++ array renderer.

use std::io::Write;

use scriv_emit::{Error, Render, RenderSplit, Result, SourceWriter};

use crate::element::qualified;

/// A C++ array, automatic or class member.
///
/// ```text
/// int arr[] = {1, 2, 3};
/// static const char* my_array[] =
/// {
///     "Hello",
///     "World"
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Array {
    name: String,
    ty: String,
    size: Option<String>,
    items: Vec<String>,
    doc: Option<String>,
    is_static: bool,
    is_const: bool,
    newline_align: bool,
    is_member: bool,
    qualifier: Vec<String>,
}

impl Array {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Explicit size expression between the brackets, e.g. `5`.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
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

    /// Documentation line emitted above the array.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// `static` prefix.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// `const` prefix.
    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Place every item on its own line in the definition.
    pub fn newline_align(mut self) -> Self {
        self.newline_align = true;
        self
    }

    pub(crate) fn make_member(&mut self, qualifier: Vec<String>) {
        self.is_member = true;
        self.qualifier = qualifier;
    }

    pub(crate) fn is_static(&self) -> bool {
        self.is_static
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "array" });
        }
        Ok(())
    }

    fn prefixes(&self) -> String {
        let mut out = String::new();
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_const {
            out.push_str("const ");
        }
        out
    }

    fn brackets(&self) -> String {
        format!("[{}]", self.size.as_deref().unwrap_or_default())
    }

    fn emit_doc<W: Write>(&self, w: &mut SourceWriter<W>) -> Result<()> {
        if let Some(doc) = &self.doc {
            w.line(doc)?;
        }
        Ok(())
    }

    /// Emit the full definition for the given (possibly qualified) name.
    fn emit_value<W: Write>(&self, w: &mut SourceWriter<W>, prefixes: &str, name: &str) -> Result<()> {
        let head = format!("{}{} {}{}", prefixes, self.ty, name, self.brackets());
        if self.newline_align && !self.items.is_empty() {
            w.with_block(&format!("{head} = "), ";", |w| {
                for (index, item) in self.items.iter().enumerate() {
                    if index + 1 < self.items.len() {
                        w.line(&format!("{item},"))?;
                    } else {
                        w.line(item)?;
                    }
                }
                Ok(())
            })
        } else {
            w.line(&format!("{head} = {{{}}};", self.items.join(", ")))
        }
    }
}

impl<W: Write> Render<W> for Array {
    /// Render a complete definition, e.g. `int arr[] = {1, 2, 3};`.
    ///
    /// Used for automatic arrays; members other than `static const` must go
    /// through their declaration/definition pair.
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if self.is_member && !(self.is_static && self.is_const) {
            return Err(Error::FreeOnly {
                element: "array",
                name: self.name.clone(),
                operation: "render",
            });
        }
        self.emit_doc(w)?;
        self.emit_value(w, &self.prefixes(), &self.name)
    }
}

impl<W: Write> RenderSplit<W> for Array {
    /// In-class member declaration, e.g. `static int m_arr[];`.
    fn render_declaration(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if !self.is_member {
            return Err(Error::MemberOnly {
                element: "array",
                name: self.name.clone(),
                operation: "declaration",
            });
        }
        self.emit_doc(w)?;
        w.line(&format!(
            "{}{} {}{};",
            self.prefixes(),
            self.ty,
            self.name,
            self.brackets()
        ))
    }

    /// Out-of-class member definition with the fully-qualified name. Only
    /// static member arrays have one; the storage-class keyword is not
    /// repeated outside the class.
    fn render_definition(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if !self.is_member {
            return Err(Error::MemberOnly {
                element: "array",
                name: self.name.clone(),
                operation: "definition",
            });
        }
        if !self.is_static {
            return Err(Error::ModifierDependency {
                element: "array",
                name: self.name.clone(),
                modifier: "definition",
                requires: "static",
            });
        }
        let prefixes = if self.is_const { "const " } else { "" };
        self.emit_value(w, prefixes, &qualified(&self.qualifier, &self.name))
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
    fn test_inline_definition() {
        let mut w = writer();
        Array::new("arr", "int")
            .items(["1", "2", "3"])
            .render(&mut w)
            .unwrap();
        assert_eq!(w.into_string().unwrap(), "int arr[] = {1, 2, 3};\n");
    }

    #[test]
    fn test_sized_definition() {
        let mut w = writer();
        Array::new("doubles", "double")
            .size("5")
            .items(["1.0", "2.0"])
            .render(&mut w)
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "double doubles[5] = {1.0, 2.0};\n"
        );
    }

    #[test]
    fn test_empty_items_render_empty_braces() {
        let mut w = writer();
        Array::new("arr", "int").render(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "int arr[] = {};\n");
    }

    #[test]
    fn test_newline_aligned_definition() {
        let mut w = writer();
        Array::new("names", "const char*")
            .newline_align()
            .items(["\"Hello\"", "\"World\""])
            .render(&mut w)
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "const char* names[] = \n{\n\t\"Hello\",\n\t\"World\"\n};\n"
        );
    }

    #[test]
    fn test_member_declaration() {
        let mut array = Array::new("m_arr", "int").static_().const_();
        array.make_member(vec!["MyClass".to_string()]);
        let mut w = writer();
        array.render_declaration(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "static const int m_arr[];\n");
    }

    #[test]
    fn test_member_definition_is_qualified() {
        let mut array = Array::new("m_arr", "int").static_().const_().items(["1", "2"]);
        array.make_member(vec!["MyClass".to_string()]);
        let mut w = writer();
        array.render_definition(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "const int MyClass::m_arr[] = {1, 2};\n"
        );
    }

    #[test]
    fn test_nonstatic_member_definition_is_rejected() {
        let mut array = Array::new("m_arr", "int");
        array.make_member(vec!["MyClass".to_string()]);
        let mut w = writer();
        assert!(matches!(
            array.render_definition(&mut w),
            Err(Error::ModifierDependency { .. })
        ));
    }
}
