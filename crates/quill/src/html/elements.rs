//! HTML element builders.
//!
//! Container builders take any content convertible into a [`Node`]: text,
//! another element, or an array of nodes mixing attributes and children.
//!
//! ```
//! use quill::html::{br, class, div, p};
//! use quill::Renderable;
//!
//! let node = div([class("card"), p("Hello"), br()]);
//! assert_eq!(node.render(), r#"<div class="card"><p>Hello</p><br/></div>"#);
//! ```

use quill_core::{Attribute, ClosingMode, Element, Node};

macro_rules! container_elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">`")]
            pub fn $name(content: impl Into<Node>) -> Node {
                Node::element($tag, [content.into()])
            }
        )*
    };
}

macro_rules! void_elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Self-closing `<", $tag, "/>`, taking its attributes.")]
            pub fn $name(attributes: impl Into<Node>) -> Node {
                Node::Element(
                    Element::new($tag, [attributes.into()])
                        .with_closing_mode(ClosingMode::SelfClosing),
                )
            }
        )*
    };
}

container_elements! {
    html => "html",
    head => "head",
    body => "body",
    title => "title",
    div => "div",
    p => "p",
    span => "span",
    a => "a",
    ul => "ul",
    ol => "ol",
    li => "li",
    table => "table",
    thead => "thead",
    tbody => "tbody",
    tfoot => "tfoot",
    tr => "tr",
    td => "td",
    th => "th",
    caption => "caption",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    article => "article",
    header => "header",
    footer => "footer",
    nav => "nav",
    button => "button",
    fieldset => "fieldset",
    label => "label",
    form => "form",
    b => "b",
    em => "em",
}

void_elements! {
    img => "img",
    input => "input",
    meta => "meta",
    link => "link",
}

/// `<br/>`
pub fn br() -> Node {
    Node::self_closed_element("br", [])
}

/// `<!DOCTYPE html>`
pub fn doctype() -> Node {
    Node::never_closed_element("!DOCTYPE", [Node::Attribute(Attribute::boolean("html"))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::attributes::{charset, class, src};
    use quill_core::Renderable;

    #[test]
    fn test_container_elements() {
        assert_eq!(p("Hello").render(), "<p>Hello</p>");
        assert_eq!(div(()).render(), "<div></div>");
        assert_eq!(
            ul([li("One"), li("Two")]).render(),
            "<ul><li>One</li><li>Two</li></ul>"
        );
        assert_eq!(h1([class("title"), Node::text("T")]).render(), r#"<h1 class="title">T</h1>"#);
    }

    #[test]
    fn test_void_elements() {
        assert_eq!(br().render(), "<br/>");
        assert_eq!(img(src("a.png")).render(), r#"<img src="a.png"/>"#);
        assert_eq!(meta(charset("UTF-8")).render(), r#"<meta charset="UTF-8"/>"#);
    }

    #[test]
    fn test_doctype() {
        assert_eq!(doctype().render(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_text_styles() {
        let node = div([b("Bold"), br(), em("Italic"), br()]);
        assert_eq!(node.render(), "<div><b>Bold</b><br/><em>Italic</em><br/></div>");
    }
}
