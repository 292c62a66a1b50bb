//! C++ function and method renderer.

use std::io::Write;

use scriv_emit::{Error, Render, RenderSplit, Result, SourceWriter};

use crate::element::qualified;

/// Callback generating a function body through the writer, one statement
/// per call, without the enclosing braces.
type Body<W> = Box<dyn Fn(&mut SourceWriter<W>) -> Result<()>>;

/// A C++ function or method.
///
/// Arguments are plain strings (`int a`, `const std::string& s`). The body
/// is a caller-supplied callback invoked with the writer, so arbitrary
/// nested statements can be emitted:
///
/// ```
/// use scriv_cpp::{Function, Render};
/// use scriv_emit::{SourceWriter, Style};
///
/// let factorial = Function::new("factorial")
///     .ret_type("int")
///     .arg("int n")
///     .constexpr()
///     .body(|w| w.line("return n < 1 ? 1 : (n * factorial(n - 1));"));
///
/// let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
/// factorial.render(&mut w)?;
/// # Ok::<(), scriv_emit::Error>(())
/// ```
///
/// Free functions reject the member-only modifiers; methods are created by
/// attaching a function with [`Class::add_method`](crate::Class::add_method).
pub struct Function<W: Write> {
    name: String,
    ret_type: Option<String>,
    args: Vec<String>,
    doc: Option<String>,
    is_static: bool,
    is_inline: bool,
    is_constexpr: bool,
    is_const: bool,
    is_virtual: bool,
    is_pure_virtual: bool,
    is_override: bool,
    is_final: bool,
    is_method: bool,
    qualifier: Vec<String>,
    body: Option<Body<W>>,
}

impl<W: Write> Function<W> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ret_type: None,
            args: Vec::new(),
            doc: None,
            is_static: false,
            is_inline: false,
            is_constexpr: false,
            is_const: false,
            is_virtual: false,
            is_pure_virtual: false,
            is_override: false,
            is_final: false,
            is_method: false,
            qualifier: Vec::new(),
            body: None,
        }
    }

    /// Return type; leave unset for constructors.
    pub fn ret_type(mut self, ty: impl Into<String>) -> Self {
        self.ret_type = Some(ty.into());
        self
    }

    /// Append one argument, e.g. `size_t sz = 10`.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Documentation line emitted above the function.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// `static` prefix (methods only).
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// `inline` prefix.
    pub fn inline_(mut self) -> Self {
        self.is_inline = true;
        self
    }

    /// `constexpr` prefix; requires a body.
    pub fn constexpr(mut self) -> Self {
        self.is_constexpr = true;
        self
    }

    /// ` const` suffix (methods only).
    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// `virtual` prefix (methods only).
    pub fn virtual_(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// ` = 0` suffix; requires `virtual` and forbids a body.
    pub fn pure_virtual(mut self) -> Self {
        self.is_pure_virtual = true;
        self
    }

    /// ` override` suffix; requires `virtual`.
    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// ` final` suffix; requires `virtual`.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Body-generation callback, invoked with the writer inside the braces.
    pub fn body(mut self, f: impl Fn(&mut SourceWriter<W>) -> Result<()> + 'static) -> Self {
        self.body = Some(Box::new(f));
        self
    }

    pub(crate) fn make_method(&mut self, qualifier: Vec<String>) {
        self.is_method = true;
        self.qualifier = qualifier;
    }

    pub(crate) fn is_pure_virtual(&self) -> bool {
        self.is_pure_virtual
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "function" });
        }
        if !self.is_method {
            for (flag, modifier) in [
                (self.is_static, "static"),
                (self.is_const, "const"),
                (self.is_virtual, "virtual"),
                (self.is_pure_virtual, "pure virtual"),
                (self.is_override, "override"),
                (self.is_final, "final"),
            ] {
                if flag {
                    return Err(Error::MemberOnly {
                        element: "function",
                        name: self.name.clone(),
                        operation: modifier,
                    });
                }
            }
        }
        for (first_flag, first, second_flag, second) in [
            (self.is_static, "static", self.is_virtual, "virtual"),
            (self.is_static, "static", self.is_const, "const"),
            (self.is_constexpr, "constexpr", self.is_virtual, "virtual"),
        ] {
            if first_flag && second_flag {
                return Err(Error::ModifierConflict {
                    element: "method",
                    name: self.name.clone(),
                    first,
                    second,
                });
            }
        }
        for (flag, modifier) in [
            (self.is_pure_virtual, "pure virtual"),
            (self.is_override, "override"),
            (self.is_final, "final"),
        ] {
            if flag && !self.is_virtual {
                return Err(Error::ModifierDependency {
                    element: "method",
                    name: self.name.clone(),
                    modifier,
                    requires: "virtual",
                });
            }
        }
        if self.is_constexpr && self.body.is_none() {
            return Err(Error::MissingBody {
                element: "function",
                name: self.name.clone(),
            });
        }
        if self.is_pure_virtual && self.body.is_some() {
            return Err(Error::BodyNotAllowed {
                element: "method",
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// `ret name(args)`, optionally with the fully-qualified name.
    fn head(&self, qualify: bool) -> String {
        let name = if qualify {
            qualified(&self.qualifier, &self.name)
        } else {
            self.name.clone()
        };
        let args = self.args.join(", ");
        match &self.ret_type {
            Some(ret) => format!("{ret} {name}({args})"),
            None => format!("{name}({args})"),
        }
    }

    fn emit_doc(&self, w: &mut SourceWriter<W>) -> Result<()> {
        if let Some(doc) = &self.doc {
            w.line(doc)?;
        }
        Ok(())
    }

    fn emit_body(&self, w: &mut SourceWriter<W>) -> Result<()> {
        match &self.body {
            Some(body) => body(w),
            None => Ok(()),
        }
    }
}

impl<W: Write> Render<W> for Function<W> {
    /// Render the full form as it appears in class bodies and at file
    /// scope: signature block plus body.
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if self.is_pure_virtual {
            return Err(Error::BodyNotAllowed {
                element: "method",
                name: self.name.clone(),
            });
        }
        self.emit_doc(w)?;
        let mut signature = String::new();
        if self.is_static {
            signature.push_str("static ");
        }
        if self.is_virtual {
            signature.push_str("virtual ");
        }
        if self.is_constexpr {
            signature.push_str("constexpr ");
        }
        if self.is_inline {
            signature.push_str("inline ");
        }
        signature.push_str(&self.head(false));
        if self.is_const {
            signature.push_str(" const");
        }
        if self.is_override {
            signature.push_str(" override");
        }
        if self.is_final {
            signature.push_str(" final");
        }
        w.with_block(&signature, "", |w| self.emit_body(w))
    }
}

impl<W: Write> RenderSplit<W> for Function<W> {
    /// Signature-only declaration terminated by `;`, e.g.
    /// `virtual int GetX() const override;`. `constexpr` functions render
    /// their full inline form instead.
    fn render_declaration(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if self.is_constexpr {
            return self.render(w);
        }
        self.emit_doc(w)?;
        let mut signature = String::new();
        if self.is_static {
            signature.push_str("static ");
        }
        if self.is_virtual {
            signature.push_str("virtual ");
        }
        if self.is_inline {
            signature.push_str("inline ");
        }
        signature.push_str(&self.head(false));
        if self.is_const {
            signature.push_str(" const");
        }
        if self.is_override {
            signature.push_str(" override");
        }
        if self.is_final {
            signature.push_str(" final");
        }
        if self.is_pure_virtual {
            signature.push_str(" = 0");
        }
        signature.push(';');
        w.line(&signature)
    }

    /// Out-of-class definition with the fully-qualified name:
    ///
    /// ```text
    /// /*virtual*/ int MyClass::GetX() const
    /// {
    ///     ...
    /// }
    /// ```
    ///
    /// `override`, `final` and ` = 0` never appear out of class; pure
    /// virtual methods have no definition at all.
    fn render_definition(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if self.is_pure_virtual {
            return Err(Error::BodyNotAllowed {
                element: "method",
                name: self.name.clone(),
            });
        }
        self.emit_doc(w)?;
        let mut signature = String::new();
        if self.is_virtual {
            signature.push_str("/*virtual*/ ");
        }
        if self.is_constexpr {
            signature.push_str("constexpr ");
        }
        if self.is_inline {
            signature.push_str("inline ");
        }
        signature.push_str(&self.head(true));
        if self.is_const {
            signature.push_str(" const");
        }
        w.with_block(&signature, "", |w| self.emit_body(w))
    }
}
