//! Java code generation built on the scriv emission core.
//!
//! Java elements render in a single textual form via [`Render`]; there is
//! no header/source split, so member declarations live inline in their
//! class body. Brace placement and tab indentation match the C++ renderer
//! (both target the same ANSI formatting style).
//!
//! # Example
//!
//! ```
//! use scriv_java::{Class, Function, Render, Variable};
//! use scriv_emit::{SourceWriter, Style};
//!
//! let mut class = Class::new("MyClass");
//! class.add_variable(
//!     Variable::new("myVariable", "int").static_().final_().value("10"),
//! );
//! class.add_method(
//!     Function::new("main")
//!         .ret_type("void")
//!         .static_()
//!         .arg("String[] args")
//!         .body(|w| w.line("System.out.println(myVariable);")),
//! );
//!
//! let mut w = SourceWriter::with_style(Vec::new(), Style::ansi_cpp());
//! class.render(&mut w)?;
//! let source = w.into_string()?;
//! assert!(source.contains("static final int myVariable = 10;"));
//! # Ok::<(), scriv_emit::Error>(())
//! ```

mod array;
mod class;
mod enums;
mod function;
mod variable;

pub use array::Array;
pub use class::Class;
pub use enums::Enum;
pub use function::Function;
pub use scriv_emit::{Error, Render, Result};
pub use variable::Variable;
