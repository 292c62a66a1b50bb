use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scriv_emit::{SourceWriter, Style};
use scriv_html::{Attrs, Element, HtmlWriterExt};

#[derive(Args)]
pub struct HtmlCommand {
    /// Output file
    #[arg(short, long, default_value = "example.html")]
    pub output: PathBuf,
}

impl HtmlCommand {
    pub fn run(&self) -> Result<()> {
        let mut w = SourceWriter::create(&self.output, Style::html())?;
        w.doctype()?;
        w.tag("html", &Attrs::new().set("lang", "en"))?.enter(|w| {
            w.tag("head", &Attrs::new())?.enter(|w| {
                w.tag("title", &Attrs::new())?
                    .enter(|w| w.text("Generated page"))
            })?;
            w.tag("body", &Attrs::new())?.enter(|w| {
                Element::new("h1").render(w, Some("Hello"))?;
                Element::new("p")
                    .attr("id", "intro")
                    .render(w, Some("This page was generated by scriv."))?;
                Element::new("hr").self_closing().render(w, None)
            })
        })?;
        w.finish()?;

        println!("Generated {}", self.output.display());
        Ok(())
    }
}
