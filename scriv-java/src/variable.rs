//! Java variable renderer.

use std::io::Write;

use scriv_emit::{Error, Render, Result, SourceWriter};

/// A Java field or local variable.
///
/// ```text
/// static final int myVariable = 10;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Variable {
    name: String,
    ty: String,
    value: Option<String>,
    doc: Option<String>,
    is_static: bool,
    is_final: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Initialization value assigned in the declaration.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Javadoc text rendered as `/** text */` above the variable.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// `static` modifier.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// `final` modifier.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "variable" });
        }
        Ok(())
    }
}

impl<W: Write> Render<W> for Variable {
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if let Some(doc) = &self.doc {
            w.line(&format!("/** {doc} */"))?;
        }
        let mut out = String::new();
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_final {
            out.push_str("final ");
        }
        out.push_str(&format!("{} {}", self.ty, self.name));
        if let Some(value) = &self.value {
            out.push_str(&format!(" = {value}"));
        }
        out.push(';');
        w.line(&out)
    }
}
