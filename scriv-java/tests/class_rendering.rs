//! End-to-end rendering tests for Java class generation.

use scriv_emit::{SourceWriter, Style};
use scriv_java::{Array, Class, Enum, Function, Render, Variable};

fn writer() -> SourceWriter<Vec<u8>> {
    SourceWriter::with_style(Vec::new(), Style::ansi_cpp())
}

#[test]
fn test_java_source_snapshot() {
    let mut class = Class::new("MyClass");
    class.add_enum(Enum::new("Color").values(["RED", "GREEN"]));
    class.add_variable(
        Variable::new("myVariable", "int").static_().final_().value("10"),
    );
    class.add_array(Array::new("sizes", "int").items(["1", "2", "3"]));
    class.add_method(
        Function::new("main")
            .ret_type("void")
            .static_()
            .arg("String[] args")
            .body(|w| w.line("System.out.println(myVariable);")),
    );

    let mut w = writer();
    class.render(&mut w).unwrap();
    insta::assert_snapshot!(w.into_string().unwrap(), @r"
    public class MyClass
    {
    	enum Color { RED, GREEN }

    	static final int myVariable = 10;

    	int[] sizes = { 1, 2, 3 };

    	public static void main(String[] args)
    	{
    		System.out.println(myVariable);
    	}

    }
    ");
}

#[test]
fn test_abstract_base_with_subclass() {
    let mut shape = Class::<Vec<u8>>::new("Shape").doc("Base class for shapes.");
    shape.add_method(Function::new("area").ret_type("double").abstract_());

    let mut w = writer();
    shape.render(&mut w).unwrap();
    let source = w.into_string().unwrap();

    assert!(source.contains("public abstract double area();"));
    assert!(source.starts_with("/**\n * Base class for shapes.\n */"));
}
