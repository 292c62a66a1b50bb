//! Java method renderer.

use std::io::Write;

use scriv_emit::{Error, Render, Result, SourceWriter};

/// Callback generating a method body through the writer, one statement per
/// call, without the enclosing braces.
type Body<W> = Box<dyn Fn(&mut SourceWriter<W>) -> Result<()>>;

/// A Java method.
///
/// Arguments are plain strings (`String[] args`, `int count`). Non-abstract
/// methods render as a signature block with a caller-supplied body;
/// abstract methods render the `;`-terminated signature and reject a body.
///
/// ```
/// use scriv_java::{Function, Render};
/// use scriv_emit::{SourceWriter, Style};
///
/// let main = Function::new("main")
///     .ret_type("void")
///     .static_()
///     .arg("String[] args")
///     .body(|w| w.line("System.out.println(\"Hello\");"));
///
/// let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
/// main.render(&mut w)?;
/// # Ok::<(), scriv_emit::Error>(())
/// ```
pub struct Function<W: Write> {
    name: String,
    ret_type: Option<String>,
    access: Option<String>,
    args: Vec<String>,
    doc: Option<String>,
    is_static: bool,
    is_final: bool,
    is_abstract: bool,
    is_synchronized: bool,
    is_native: bool,
    is_strictfp: bool,
    body: Option<Body<W>>,
}

impl<W: Write> Function<W> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ret_type: None,
            access: Some("public".to_string()),
            args: Vec::new(),
            doc: None,
            is_static: false,
            is_final: false,
            is_abstract: false,
            is_synchronized: false,
            is_native: false,
            is_strictfp: false,
            body: None,
        }
    }

    /// Return type; leave unset for constructors.
    pub fn ret_type(mut self, ty: impl Into<String>) -> Self {
        self.ret_type = Some(ty.into());
        self
    }

    /// Access specifier, `public` by default.
    pub fn access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    /// Package-private: no access specifier at all.
    pub fn package_private(mut self) -> Self {
        self.access = None;
        self
    }

    /// Append one argument, e.g. `String[] args`.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Javadoc text rendered as `/** text */` above the method.
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

    /// `abstract` modifier; the method renders as a bare signature.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// `synchronized` modifier.
    pub fn synchronized(mut self) -> Self {
        self.is_synchronized = true;
        self
    }

    /// `native` modifier.
    pub fn native(mut self) -> Self {
        self.is_native = true;
        self
    }

    /// `strictfp` modifier.
    pub fn strictfp(mut self) -> Self {
        self.is_strictfp = true;
        self
    }

    /// Body-generation callback, invoked with the writer inside the braces.
    pub fn body(mut self, f: impl Fn(&mut SourceWriter<W>) -> Result<()> + 'static) -> Self {
        self.body = Some(Box::new(f));
        self
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::MissingName { element: "method" });
        }
        if self.is_abstract {
            for (flag, second) in [
                (self.is_static, "static"),
                (self.is_final, "final"),
                (self.is_synchronized, "synchronized"),
                (self.is_native, "native"),
                (self.is_strictfp, "strictfp"),
            ] {
                if flag {
                    return Err(Error::ModifierConflict {
                        element: "method",
                        name: self.name.clone(),
                        first: "abstract",
                        second,
                    });
                }
            }
            if self.body.is_some() {
                return Err(Error::BodyNotAllowed {
                    element: "method",
                    name: self.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn signature(&self) -> String {
        let mut out = String::new();
        if let Some(access) = &self.access {
            out.push_str(access);
            out.push(' ');
        }
        if self.is_abstract {
            out.push_str("abstract ");
        }
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_final {
            out.push_str("final ");
        }
        if self.is_synchronized {
            out.push_str("synchronized ");
        }
        if self.is_native {
            out.push_str("native ");
        }
        if self.is_strictfp {
            out.push_str("strictfp ");
        }
        if let Some(ret) = &self.ret_type {
            out.push_str(ret);
            out.push(' ');
        }
        out.push_str(&format!("{}({})", self.name, self.args.join(", ")));
        out
    }
}

impl<W: Write> Render<W> for Function<W> {
    fn render(&self, w: &mut SourceWriter<W>) -> Result<()> {
        self.validate()?;
        if let Some(doc) = &self.doc {
            w.line(&format!("/** {doc} */"))?;
        }
        if self.is_abstract {
            return w.line(&format!("{};", self.signature()));
        }
        w.with_block(&self.signature(), "", |w| match &self.body {
            Some(body) => body(w),
            None => Ok(()),
        })
    }
}
