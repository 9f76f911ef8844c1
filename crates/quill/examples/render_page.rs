//! Example: Building a page with components
//!
//! This example assembles an HTML page in code, without a markup source,
//! and prints it with two-space indentation.

use quill::{
    IndentationKind, Node, Renderable,
    document::Html,
    html::{
        AnchorRelationship, HtmlModifiers, Image, Input, InputType, Link, List, ListStyle, Table,
        TableRow, charset, fieldset, form, h1, label, meta, p, title,
    },
};

fn main() {
    println!("Building page...\n");

    // Crawlers should not follow navigation links
    let navigation = List::new([
        Link::new("Home", "/"),
        Link::new("Releases", "https://example.com/releases"),
    ])
    .list_style(ListStyle::unordered().with_item_class("nav-item"))
    .link_relationship(AnchorRelationship::NoFollow);

    let releases = Table::new([
        TableRow::new(["0.1.0", "Initial release"]),
        TableRow::new(["0.2.0", "Tables & lists"]),
    ])
    .with_caption("Releases")
    .with_header(TableRow::new(["Version", "Notes"]));

    let signup = form([
        Node::attribute("action", "/signup"),
        Node::attribute("method", "post"),
        fieldset([
            label([
                Node::text("Email"),
                Input::new(InputType::Email)
                    .with_name("email")
                    .with_required(true)
                    .into(),
            ]),
            Input::submit("Sign up").into(),
        ]),
    ])
    .auto_complete(false);

    let page = Html::new([
        h1("Quill"),
        navigation,
        Image::with_description("logo.png", "Quill logo").into(),
        p("Typed documents, rendered."),
        releases.into(),
        signup,
    ])
    .with_head([meta(charset("UTF-8")), title("Quill")])
    .with_language("en");

    println!("{}", page.render_indented(IndentationKind::Spaces(2)));

    // The same tree, minified
    let minified = page.render();
    println!("\nMinified output is {} bytes", minified.len());
}
