//! End-to-end rendering tests for C++ class generation.

use scriv_cpp::{Class, CppWriterExt, Enum, Function, Render, RenderSplit, Variable};
use scriv_emit::{SourceWriter, Style};

fn writer() -> SourceWriter<Vec<u8>> {
    SourceWriter::with_style(Vec::new(), Style::ansi_cpp())
}

/// A class resembling a typical generated header: enum, nested struct,
/// methods and data members.
fn sample_class() -> Class<Vec<u8>> {
    let mut nested = Class::new("Nested").struct_();
    nested.add_variable(
        Variable::new("m_gcAnswer", "size_t").static_().const_().value("42"),
    );

    let mut class = Class::new("MyClass");
    class.add_enum(Enum::new("Items").prefix("wd").items(["One", "Two", "Three"]));
    class.add_class(nested);
    class.add_method(
        Function::new("GetParam")
            .ret_type("int")
            .const_()
            .body(|w| w.line("return m_var1;")),
    );
    class.add_method(
        Function::new("VirtualMethod")
            .ret_type("int")
            .virtual_()
            .body(|w| w.line("return 0;")),
    );
    class.add_method(
        Function::new("PureVirtualMethod").ret_type("void").virtual_().pure_virtual(),
    );
    class.add_variable(Variable::new("m_var1", "int"));
    class.add_variable(Variable::new("m_var2", "int*"));
    class
}

#[test]
fn test_class_declaration_snapshot() {
    let mut w = writer();
    sample_class().render_declaration(&mut w).unwrap();
    insta::assert_snapshot!(w.into_string().unwrap(), @r"
    class MyClass
    {
    public:
    	enum Items
    	{
    		wdOne = 0,
    		wdTwo = 1,
    		wdThree = 2,
    		wdItemsCount = 3
    	};

    	struct Nested
    	{
    		static const size_t m_gcAnswer;

    	};

    	int GetParam() const;

    	virtual int VirtualMethod();

    	virtual void PureVirtualMethod() = 0;

    private:
    	int m_var1;

    	int* m_var2;

    };
    ");
}

#[test]
fn test_class_definition_snapshot() {
    let mut w = writer();
    sample_class().render_definition(&mut w).unwrap();
    insta::assert_snapshot!(w.into_string().unwrap(), @r"
    int MyClass::GetParam() const
    {
    	return m_var1;
    }

    /*virtual*/ int MyClass::VirtualMethod()
    {
    	return 0;
    }

    const size_t MyClass::Nested::m_gcAnswer = 42;
    ");
}

#[test]
fn test_declaration_and_definition_are_name_consistent() {
    let class = sample_class();

    let mut header = writer();
    class.render_declaration(&mut header).unwrap();
    let header = header.into_string().unwrap();

    let mut source = writer();
    class.render_definition(&mut source).unwrap();
    let source = source.into_string().unwrap();

    // the declaration uses the bare name, the definition the qualified one
    assert!(header.contains("static const size_t m_gcAnswer;"));
    assert!(source.contains("MyClass::Nested::m_gcAnswer"));
    assert!(header.contains("int GetParam() const;"));
    assert!(source.contains("int MyClass::GetParam() const"));
    // pure virtual methods only ever appear in the declaration
    assert!(header.contains("PureVirtualMethod() = 0;"));
    assert!(!source.contains("PureVirtualMethod"));
}

#[test]
fn test_free_function_file() {
    let mut w = writer();
    w.line("#include <cstddef>").unwrap();
    w.blank_line().unwrap();
    Function::new("factorial")
        .ret_type("int")
        .arg("int n")
        .constexpr()
        .doc("/// Calculates and returns the factorial of n.")
        .body(|w| w.line("return n < 1 ? 1 : (n * factorial(n - 1));"))
        .render(&mut w)
        .unwrap();
    insta::assert_snapshot!(w.into_string().unwrap(), @r"
    #include <cstddef>

    /// Calculates and returns the factorial of n.
    constexpr int factorial(int n)
    {
    	return n < 1 ? 1 : (n * factorial(n - 1));
    }
    ");
}

#[test]
fn test_low_level_writer_composition() {
    let mut w = writer();
    w.with_block("namespace detail", "", |w| {
        w.with_block("class Holder", ";", |w| {
            w.label("public")?;
            w.line("int Get() const;")
        })
    })
    .unwrap();
    insta::assert_snapshot!(w.into_string().unwrap(), @r"
    namespace detail
    {
    	class Holder
    	{
    	public:
    		int Get() const;
    	};
    }
    ");
}
