//! C++ variable renderer.

use std::io::Write;

use scriv_emit::{Error, Render, RenderSplit, Result, SourceWriter};

use crate::element::qualified;

/// A C++ variable, automatic or class member.
///
/// Free variables render in one form via [`Render::render`]:
///
/// ```text
/// const char* var1 = 0;
/// ```
///
/// Class members (attached with [`Class::add_variable`](crate::Class::add_variable))
/// split into a declaration inside the class body and a definition outside
/// it, the latter carrying the fully-qualified name:
///
/// ```text
/// static const size_t m_var;
/// const size_t MyClass::m_var = 255;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Variable {
    name: String,
    ty: String,
    value: Option<String>,
    doc: Option<String>,
    is_static: bool,
    is_extern: bool,
    is_const: bool,
    is_constexpr: bool,
    is_member: bool,
    qualifier: Vec<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Initialization value: `a = value;` for automatic variables,
    /// `a(value)` for non-static class members.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Documentation line emitted above the variable, e.g. `/// Doxygen`.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// `static` prefix; cannot be combined with `extern`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// `extern` prefix; cannot be combined with `static`.
    pub fn extern_(mut self) -> Self {
        self.is_extern = true;
        self
    }

    /// `const` prefix; cannot be combined with `constexpr`.
    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// `constexpr` prefix; requires a value, cannot be combined with
    /// `const`.
    pub fn constexpr(mut self) -> Self {
        self.is_constexpr = true;
        self
    }

    pub(crate) fn make_member(&mut self, qualifier: Vec<String>) {
        self.is_member = true;
        self.qualifier = qualifier;
    }

    pub(crate) fn is_static(&self) -> bool {
        self.is_static
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "variable" });
        }
        if self.is_const && self.is_constexpr {
            return Err(Error::ModifierConflict {
                element: "variable",
                name: self.name.clone(),
                first: "const",
                second: "constexpr",
            });
        }
        if self.is_static && self.is_extern {
            return Err(Error::ModifierConflict {
                element: "variable",
                name: self.name.clone(),
                first: "static",
                second: "extern",
            });
        }
        if self.is_constexpr && self.value.is_none() {
            return Err(Error::MissingValue {
                element: "variable",
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    fn prefixes(&self) -> String {
        let mut out = String::new();
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_extern {
            out.push_str("extern ");
        }
        if self.is_const {
            out.push_str("const ");
        }
        if self.is_constexpr {
            out.push_str("constexpr ");
        }
        out
    }

    fn emit_doc<W: Write>(&self, w: &mut SourceWriter<W>) -> Result<()> {
        if let Some(doc) = &self.doc {
            w.line(doc)?;
        }
        Ok(())
    }
}

impl<W: Write> Render<W> for Variable {
    /// Render a complete one-line definition, e.g. `int a = 10;`.
    ///
    /// Only automatic variables and `static const`/`constexpr` members can
    /// be rendered this way; other members must use their
    /// declaration/definition pair.
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if self.is_member && !((self.is_static && self.is_const) || self.is_constexpr) {
            return Err(Error::FreeOnly {
                element: "variable",
                name: self.name.clone(),
                operation: "render",
            });
        }
        self.emit_doc(w)?;
        match &self.value {
            Some(value) => w.line(&format!(
                "{}{} {} = {};",
                self.prefixes(),
                self.ty,
                self.name,
                value
            )),
            None => w.line(&format!("{}{} {};", self.prefixes(), self.ty, self.name)),
        }
    }
}

impl<W: Write> RenderSplit<W> for Variable {
    /// In-class member declaration, e.g. `static const size_t m_var;`.
    /// `constexpr` members carry their value in the declaration.
    fn render_declaration(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if !self.is_member {
            return Err(Error::MemberOnly {
                element: "variable",
                name: self.name.clone(),
                operation: "declaration",
            });
        }
        self.emit_doc(w)?;
        if self.is_constexpr {
            w.line(&format!(
                "{}{} {} = {};",
                self.prefixes(),
                self.ty,
                self.name,
                self.value.as_deref().unwrap_or_default()
            ))
        } else {
            w.line(&format!("{}{} {};", self.prefixes(), self.ty, self.name))
        }
    }

    /// Out-of-class member definition.
    ///
    /// Static members define as `const size_t MyClass::m_var = 255;` (the
    /// storage-class keyword is not repeated outside the class). Non-static
    /// members render the constructor-initializer fragment `m_var(value)`.
    /// `constexpr` members are fully defined in class and emit nothing.
    fn render_definition(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if !self.is_member {
            return Err(Error::MemberOnly {
                element: "variable",
                name: self.name.clone(),
                operation: "definition",
            });
        }
        if self.is_constexpr {
            return Ok(());
        }
        if self.is_static {
            let qualifier = if self.is_const { "const " } else { "" };
            match &self.value {
                Some(value) => w.line(&format!(
                    "{}{} {} = {};",
                    qualifier,
                    self.ty,
                    qualified(&self.qualifier, &self.name),
                    value
                )),
                None => w.line(&format!(
                    "{}{} {};",
                    qualifier,
                    self.ty,
                    qualified(&self.qualifier, &self.name)
                )),
            }
        } else {
            w.line(&format!(
                "{}({})",
                self.name,
                self.value.as_deref().unwrap_or_default()
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

    fn member(variable: Variable, class_name: &str) -> Variable {
        let mut variable = variable;
        variable.make_member(vec![class_name.to_string()]);
        variable
    }

    #[test]
    fn test_automatic_variable() {
        let mut w = writer();
        Variable::new("var1", "char*")
            .const_()
            .value("0")
            .render(&mut w)
            .unwrap();
        assert_eq!(w.into_string().unwrap(), "const char* var1 = 0;\n");
    }

    #[test]
    fn test_const_and_constexpr_conflict() {
        let variable = Variable::new("COUNT", "int").const_().constexpr().value("0");
        let mut w = writer();
        let err = variable.render(&mut w).unwrap_err();
        assert!(matches!(err, Error::ModifierConflict { .. }));
        // the conflict is detected before any text reaches the sink
        assert_eq!(w.into_string().unwrap(), "");
    }

    #[test]
    fn test_static_and_extern_conflict() {
        let variable = Variable::new("var1", "char*").static_().extern_();
        let mut w = writer();
        assert!(matches!(
            variable.render(&mut w),
            Err(Error::ModifierConflict { .. })
        ));
    }

    #[test]
    fn test_constexpr_requires_value() {
        let variable = Variable::new("COUNT", "int").constexpr();
        let mut w = writer();
        assert!(matches!(
            variable.render(&mut w),
            Err(Error::MissingValue { .. })
        ));
    }

    #[test]
    fn test_constexpr_declaration_carries_value() {
        let variable = member(Variable::new("COUNT", "int").constexpr().value("0"), "A");
        let mut w = writer();
        variable.render_declaration(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "constexpr int COUNT = 0;\n");
    }

    #[test]
    fn test_member_declaration() {
        let variable = member(
            Variable::new("m_var", "size_t").static_().const_().value("255"),
            "MyClass",
        );
        let mut w = writer();
        variable.render_declaration(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "static const size_t m_var;\n");
    }

    #[test]
    fn test_static_member_definition_is_qualified() {
        let variable = member(
            Variable::new("m_var", "size_t").static_().const_().value("255"),
            "MyClass",
        );
        let mut w = writer();
        variable.render_definition(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "const size_t MyClass::m_var = 255;\n"
        );
    }

    #[test]
    fn test_nonstatic_member_definition_is_initializer() {
        let variable = member(Variable::new("m_var", "int").value("0"), "MyClass");
        let mut w = writer();
        variable.render_definition(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "m_var(0)\n");
    }

    #[test]
    fn test_member_rejects_inline_render() {
        let variable = member(Variable::new("m_var", "int"), "MyClass");
        let mut w = writer();
        assert!(matches!(
            variable.render(&mut w),
            Err(Error::FreeOnly { .. })
        ));
    }

    #[test]
    fn test_free_variable_rejects_declaration() {
        let variable = Variable::new("var1", "int");
        let mut w = writer();
        assert!(matches!(
            variable.render_declaration(&mut w),
            Err(Error::MemberOnly { .. })
        ));
    }

    #[test]
    fn test_documentation_line() {
        let mut w = writer();
        Variable::new("var1", "int")
            .doc("/// A counter.")
            .value("0")
            .render(&mut w)
            .unwrap();
        assert_eq!(w.into_string().unwrap(), "/// A counter.\nint var1 = 0;\n");
    }
}
