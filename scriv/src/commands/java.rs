use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scriv_emit::{SourceWriter, Style};
use scriv_java::{Array, Class, Enum, Function, Render, Variable};

#[derive(Args)]
pub struct JavaCommand {
    /// Output file
    #[arg(short, long, default_value = "MyClass.java")]
    pub output: PathBuf,
}

impl JavaCommand {
    pub fn run(&self) -> Result<()> {
        let mut w = SourceWriter::create(&self.output, Style::ansi_cpp())?;
        example_class().render(&mut w)?;
        w.finish()?;

        println!("Generated {}", self.output.display());
        Ok(())
    }
}

fn example_class() -> Class<BufWriter<File>> {
    let mut class = Class::new("MyClass").doc("Example class generated by scriv.");
    class.add_enum(Enum::new("Color").values(["RED", "GREEN", "BLUE"]));
    class.add_variable(
        Variable::new("myVariable", "int")
            .static_()
            .final_()
            .value("10"),
    );
    class.add_array(Array::new("sizes", "int").items(["1", "2", "3"]));
    class.add_method(
        Function::new("getVar")
            .ret_type("int")
            .static_()
            .body(|w| w.line("return myVariable;")),
    );
    class.add_method(
        Function::new("main")
            .ret_type("void")
            .static_()
            .arg("String[] args")
            .body(|w| w.line("System.out.println(getVar());")),
    );
    class
}
