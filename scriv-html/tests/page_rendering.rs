//! End-to-end rendering tests for HTML page generation.

use scriv_emit::{SourceWriter, Style};
use scriv_html::{Attrs, Element, HtmlWriterExt};

fn writer() -> SourceWriter<Vec<u8>> {
    SourceWriter::with_style(Vec::new(), Style::html())
}

#[test]
fn test_full_page_snapshot() {
    let mut w = writer();
    w.doctype().unwrap();
    w.tag("html", &Attrs::new().set("lang", "en"))
        .unwrap()
        .enter(|w| {
            w.tag("head", &Attrs::new())?
                .enter(|w| w.tag("title", &Attrs::new())?.enter(|w| w.text("Example")))?;
            w.tag("body", &Attrs::new())?.enter(|w| {
                Element::new("p").attr("id", "intro").render(w, Some("Hello"))?;
                Element::new("hr").self_closing().render(w, None)
            })
        })
        .unwrap();

    insta::assert_snapshot!(w.into_string().unwrap(), @r#"
    <!DOCTYPE html>
    <html lang="en">
      <head>
        <title>
          Example
        </title>
      </head>
      <body>
        <p id="intro">
          Hello
        </p>
        <hr/>
      </body>
    </html>
    "#);
}

#[test]
fn test_empty_element_inside_page_is_closed_before_siblings() {
    let mut w = writer();
    w.tag("body", &Attrs::new())
        .unwrap()
        .enter(|w| {
            // an element left without content is finalized as soon as the
            // next sibling starts
            Element::new("div").attr("id", "first").render(w, None)?;
            Element::new("p").render(w, Some("after"))
        })
        .unwrap();
    assert_eq!(
        w.into_string().unwrap(),
        "<body>\n  <div id=\"first\">\n  </div>\n  <p>\n    after\n  </p>\n</body>\n"
    );
}
