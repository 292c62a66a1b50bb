mod cpp;
mod html;
mod java;

use clap::{Parser, Subcommand};
use cpp::CppCommand;
use eyre::Result;
use html::HtmlCommand;
use java::JavaCommand;

#[derive(Parser)]
#[command(name = "scriv")]
#[command(version)]
#[command(about = "Generate sample C++, Java and HTML sources")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Cpp(cmd) => cmd.run(),
            Commands::Java(cmd) => cmd.run(),
            Commands::Html(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an example C++ header/source pair
    Cpp(CppCommand),

    /// Generate an example Java class
    Java(JavaCommand),

    /// Generate an example HTML page
    Html(HtmlCommand),
}
