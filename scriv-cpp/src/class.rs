//! C++ class and struct renderer.

use std::io::Write;

use scriv_emit::{Error, Render, RenderSplit, Result, SourceWriter};

use crate::array::Array;
use crate::enums::Enum;
use crate::function::Function;
use crate::variable::Variable;
use crate::writer::CppWriterExt;

/// A C++ class or struct holding ordered collections of child elements:
/// nested classes, enums, methods, member variables and arrays.
///
/// Children are rendered in insertion order. Attaching a child stamps the
/// enclosing scope path onto it, so definitions of nested members carry
/// fully-qualified names (`MyClass::Nested::m_var`); nesting an
/// already-populated class re-stamps its whole subtree.
///
/// ```
/// use scriv_cpp::{Class, Function, RenderSplit, Variable};
/// use scriv_emit::{SourceWriter, Style};
///
/// let mut class = Class::new("MyClass");
/// class.add_variable(
///     Variable::new("m_var", "size_t").static_().const_().value("255"),
/// );
/// class.add_method(
///     Function::new("GetVar")
///         .ret_type("size_t")
///         .static_()
///         .body(|w| w.line("return m_var;")),
/// );
///
/// let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
/// class.render_definition(&mut w)?;
/// let source = w.into_string()?;
/// assert!(source.contains("const size_t MyClass::m_var = 255;"));
/// assert!(source.contains("size_t MyClass::GetVar()"));
/// # Ok::<(), scriv_emit::Error>(())
/// ```
pub struct Class<W: Write> {
    name: String,
    doc: Option<String>,
    is_struct: bool,
    base: Option<String>,
    qualifier: Vec<String>,
    classes: Vec<Class<W>>,
    enums: Vec<Enum>,
    variables: Vec<Variable>,
    arrays: Vec<Array>,
    methods: Vec<Function<W>>,
}

impl<W: Write> Class<W> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_struct: false,
            base: None,
            qualifier: Vec::new(),
            classes: Vec::new(),
            enums: Vec::new(),
            variables: Vec::new(),
            arrays: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Use the `struct` keyword; all members are implicitly public and no
    /// access labels are emitted.
    pub fn struct_(mut self) -> Self {
        self.is_struct = true;
        self
    }

    /// Publicly inherited base class.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Documentation line emitted above the class.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach a member variable.
    pub fn add_variable(&mut self, mut variable: Variable) {
        variable.make_member(self.path());
        self.variables.push(variable);
    }

    /// Attach a member array.
    pub fn add_array(&mut self, mut array: Array) {
        array.make_member(self.path());
        self.arrays.push(array);
    }

    /// Attach an enum to the class interface.
    pub fn add_enum(&mut self, enumeration: Enum) {
        self.enums.push(enumeration);
    }

    /// Attach a method.
    pub fn add_method(&mut self, mut method: Function<W>) {
        method.make_method(self.path());
        self.methods.push(method);
    }

    /// Attach a nested class; its subtree is re-qualified under this class.
    pub fn add_class(&mut self, mut class: Class<W>) {
        class.requalify(self.path());
        self.classes.push(class);
    }

    /// This class's scope path: its own qualifier plus its name.
    fn path(&self) -> Vec<String> {
        let mut path = self.qualifier.clone();
        path.push(self.name.clone());
        path
    }

    fn requalify(&mut self, qualifier: Vec<String>) {
        self.qualifier = qualifier;
        let path = self.path();
        for variable in &mut self.variables {
            variable.make_member(path.clone());
        }
        for array in &mut self.arrays {
            array.make_member(path.clone());
        }
        for method in &mut self.methods {
            method.make_method(path.clone());
        }
        for class in &mut self.classes {
            class.requalify(path.clone());
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "class" });
        }
        Ok(())
    }

    fn keyword(&self) -> &'static str {
        if self.is_struct { "struct" } else { "class" }
    }

    fn opening(&self) -> String {
        match &self.base {
            Some(base) => format!("{} {} : public {}", self.keyword(), self.name, base),
            None => format!("{} {}", self.keyword(), self.name),
        }
    }

    fn has_interface(&self) -> bool {
        !self.enums.is_empty() || !self.classes.is_empty() || !self.methods.is_empty()
    }

    fn has_data_members(&self) -> bool {
        !self.variables.is_empty() || !self.arrays.is_empty()
    }

    /// Enums, nested classes and method declarations, in insertion order.
    fn render_interface(&self, w: &mut SourceWriter<W>) -> Result<()> {
        for enumeration in &self.enums {
            enumeration.render(w)?;
            w.blank_line()?;
        }
        for class in &self.classes {
            class.render_declaration(w)?;
            w.blank_line()?;
        }
        for method in &self.methods {
            method.render_declaration(w)?;
            w.blank_line()?;
        }
        Ok(())
    }

    /// Member variable and array declarations.
    fn render_data_members(&self, w: &mut SourceWriter<W>) -> Result<()> {
        for variable in &self.variables {
            variable.render_declaration(w)?;
            w.blank_line()?;
        }
        for array in &self.arrays {
            array.render_declaration(w)?;
            w.blank_line()?;
        }
        Ok(())
    }
}

impl<W: Write> Render<W> for Class<W> {
    /// Declaration, two blank lines, then definition. Most callers render
    /// the two forms into separate header/source writers instead.
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.render_declaration(w)?;
        w.blank_lines(2)?;
        self.render_definition(w)
    }
}

impl<W: Write> RenderSplit<W> for Class<W> {
    /// The class body as it appears in a header. Access labels are emitted
    /// only for classes with the corresponding non-empty section; a class
    /// with no members is still a closed, empty block.
    fn render_declaration(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if let Some(doc) = &self.doc {
            w.line(doc)?;
        }
        w.block(&self.opening(), ";")?.enter(|w| {
            if self.has_interface() {
                if !self.is_struct {
                    w.label("public")?;
                }
                self.render_interface(w)?;
            }
            if self.has_data_members() {
                if !self.is_struct {
                    w.label("private")?;
                }
                self.render_data_members(w)?;
            }
            Ok(())
        })
    }

    /// Out-of-class definitions: static members first, then methods, then
    /// nested classes, recursively. Pure virtual methods are skipped.
    fn render_definition(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        for variable in self.variables.iter().filter(|v| v.is_static()) {
            variable.render_definition(w)?;
            w.blank_line()?;
        }
        for array in self.arrays.iter().filter(|a| a.is_static()) {
            array.render_definition(w)?;
            w.blank_line()?;
        }
        for method in self.methods.iter().filter(|m| !m.is_pure_virtual()) {
            method.render_definition(w)?;
            w.blank_line()?;
        }
        for class in &self.classes {
            class.render_definition(w)?;
        }
        Ok(())
    }
}
