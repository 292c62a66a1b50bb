//! Java class renderer.

use std::io::Write;

use scriv_emit::{Error, Render, Result, SourceWriter};

use crate::array::Array;
use crate::enums::Enum;
use crate::function::Function;
use crate::variable::Variable;

/// A Java class holding ordered collections of child elements: nested
/// classes, enums, fields, arrays and methods, rendered in insertion
/// order.
///
/// ```text
/// public class MyClass extends Base
/// {
///     static final int myVariable = 10;
///
///     public static void main(String[] args)
///     {
///         ...
///     }
/// }
/// ```
pub struct Class<W: Write> {
    name: String,
    doc: Option<String>,
    base: Option<String>,
    is_record: bool,
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
            base: None,
            is_record: false,
            classes: Vec::new(),
            enums: Vec::new(),
            variables: Vec::new(),
            arrays: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Class this one `extends`.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Use the `record` keyword instead of `class`.
    pub fn record(mut self) -> Self {
        self.is_record = true;
        self
    }

    /// Javadoc text rendered as a `/** .. */` comment block; newlines in
    /// the text become separate ` * ` lines.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach a field.
    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    /// Attach an array field.
    pub fn add_array(&mut self, array: Array) {
        self.arrays.push(array);
    }

    /// Attach an enum.
    pub fn add_enum(&mut self, enumeration: Enum) {
        self.enums.push(enumeration);
    }

    /// Attach a method.
    pub fn add_method(&mut self, method: Function<W>) {
        self.methods.push(method);
    }

    /// Attach a nested class.
    pub fn add_class(&mut self, class: Class<W>) {
        self.classes.push(class);
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "class" });
        }
        Ok(())
    }

    fn opening(&self) -> String {
        let keyword = if self.is_record { "record" } else { "class" };
        match &self.base {
            Some(base) => format!("public {keyword} {} extends {base}", self.name),
            None => format!("public {keyword} {}", self.name),
        }
    }

    fn emit_doc(&self, w: &mut SourceWriter<W>) -> Result<()> {
        if let Some(doc) = &self.doc {
            w.line("/**")?;
            for line in doc.lines() {
                w.line(&format!(" * {line}"))?;
            }
            w.line(" */")?;
        }
        Ok(())
    }
}

impl<W: Write> Render<W> for Class<W> {
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        self.emit_doc(w)?;
        w.with_block(&self.opening(), "", |w| {
            for class in &self.classes {
                class.render(w)?;
                w.blank_line()?;
            }
            for enumeration in &self.enums {
                enumeration.render(w)?;
                w.blank_line()?;
            }
            for variable in &self.variables {
                variable.render(w)?;
                w.blank_line()?;
            }
            for array in &self.arrays {
                array.render(w)?;
                w.blank_line()?;
            }
            for method in &self.methods {
                method.render(w)?;
                w.blank_line()?;
            }
            Ok(())
        })
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
    fn test_empty_class_is_a_closed_block() {
        let class = Class::<Vec<u8>>::new("Empty");
        let mut w = writer();
        class.render(&mut w).unwrap();
        assert_eq!(w.into_string().unwrap(), "public class Empty\n{\n}\n");
    }

    #[test]
    fn test_class_with_field_and_method() {
        let mut class = Class::<Vec<u8>>::new("MyClass");
        class.add_variable(
            Variable::new("myVariable", "int").static_().final_().value("10"),
        );
        class.add_method(
            Function::new("getVar")
                .ret_type("int")
                .static_()
                .body(|w| w.line("return myVariable;")),
        );
        let mut w = writer();
        class.render(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "public class MyClass\n{\n\tstatic final int myVariable = 10;\n\n\
             \tpublic static int getVar()\n\t{\n\t\treturn myVariable;\n\t}\n\n}\n"
        );
    }

    #[test]
    fn test_extends_clause() {
        let class = Class::<Vec<u8>>::new("Derived").base("Base");
        let mut w = writer();
        class.render(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "public class Derived extends Base\n{\n}\n"
        );
    }

    #[test]
    fn test_multiline_javadoc() {
        let class = Class::<Vec<u8>>::new("Documented").doc("First line.\nSecond line.");
        let mut w = writer();
        class.render(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "/**\n * First line.\n * Second line.\n */\npublic class Documented\n{\n}\n"
        );
    }

    #[test]
    fn test_nested_class() {
        let mut outer = Class::<Vec<u8>>::new("Outer");
        outer.add_class(Class::new("Inner"));
        let mut w = writer();
        outer.render(&mut w).unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            "public class Outer\n{\n\tpublic class Inner\n\t{\n\t}\n\n}\n"
        );
    }
}
