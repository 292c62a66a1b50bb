use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scriv_cpp::{Class, Enum, Function, RenderSplit, Variable};
use scriv_emit::{SourceWriter, Style};

#[derive(Args)]
pub struct CppCommand {
    /// Output header file
    #[arg(long, default_value = "example.h")]
    pub header: PathBuf,

    /// Output source file
    #[arg(long, default_value = "example.cpp")]
    pub source: PathBuf,
}

impl CppCommand {
    pub fn run(&self) -> Result<()> {
        let class = example_class();

        let mut header = SourceWriter::create(&self.header, Style::ansi_cpp())?;
        header.line("#pragma once")?;
        header.blank_line()?;
        header.line("#include <cstddef>")?;
        header.blank_line()?;
        class.render_declaration(&mut header)?;
        header.finish()?;

        let header_name = self
            .header
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.header.display().to_string());
        let mut source = SourceWriter::create(&self.source, Style::ansi_cpp())?;
        source.line(&format!("#include \"{header_name}\""))?;
        source.blank_line()?;
        class.render_definition(&mut source)?;
        source.finish()?;

        println!(
            "Generated {} and {}",
            self.header.display(),
            self.source.display()
        );
        Ok(())
    }
}

fn example_class() -> Class<BufWriter<File>> {
    let mut class = Class::new("MyClass");
    class.add_enum(Enum::new("Items").items(["Chair", "Table", "Shelve"]));
    class.add_variable(
        Variable::new("m_var", "size_t")
            .static_()
            .const_()
            .value("255"),
    );
    class.add_method(
        Function::new("GetVar")
            .ret_type("size_t")
            .static_()
            .body(|w| w.line("return m_var;")),
    );
    class.add_method(
        Function::new("GetParam")
            .ret_type("int")
            .const_()
            .doc("/// Returns the stored parameter.")
            .body(|w| w.line("return m_param;")),
    );
    class.add_variable(Variable::new("m_param", "int").value("0"));
    class
}
