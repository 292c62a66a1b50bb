//! C++ code generation built on the scriv emission core.
//!
//! Every C++ element renders its current state through a
//! [`SourceWriter`](scriv_emit::SourceWriter) as a legal C++ construction.
//! Elements with two textual representations (class members, methods)
//! additionally implement [`RenderSplit`] to emit the declaration and the
//! definition separately, the definition carrying the fully-qualified name
//! of nested members.
//!
//! # Example
//!
//! ```
//! use scriv_cpp::{Class, RenderSplit, Variable};
//! use scriv_emit::{SourceWriter, Style};
//!
//! let mut class = Class::new("MyClass").struct_();
//! class.add_variable(
//!     Variable::new("m_var", "size_t").static_().const_().value("255"),
//! );
//!
//! let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
//! class.render_declaration(&mut w)?;
//! let header = w.into_string()?;
//! assert!(header.contains("static const size_t m_var;"));
//! # Ok::<(), scriv_emit::Error>(())
//! ```

mod array;
mod class;
mod element;
mod enums;
mod function;
mod variable;
mod writer;

pub use array::Array;
pub use class::Class;
pub use enums::Enum;
pub use function::Function;
pub use scriv_emit::{Error, Render, RenderSplit, Result};
pub use variable::Variable;
pub use writer::CppWriterExt;
