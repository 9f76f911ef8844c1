//! Declarative markup sources.
//!
//! A [`SourceDocument`] describes a document as data (TOML), which the
//! [`DocumentBuilder`](crate::DocumentBuilder) turns into a node tree and
//! renders. Every node is a table tagged by `type`:
//!
//! ```toml
//! format = "html"
//! language = "en"
//!
//! [[head]]
//! type = "element"
//! name = "title"
//! children = [{ type = "text", value = "Welcome" }]
//!
//! [[nodes]]
//! type = "element"
//! name = "div"
//! attributes = { class = "card" }
//! children = [
//!     { type = "text", value = "Hello & welcome" },
//!     { type = "link", label = "Home", url = "/" },
//! ]
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use quill_core::{Attribute, ClosingMode, Element, IndentationKind, Node};

use crate::{
    document::{Document, Html, Rss, SiteMap, SiteMapIndex, Xml},
    html::{
        AnchorRelationship, AnchorTarget, HtmlModifiers, Image, Link, List, ListStyle, Table,
        TableRow,
    },
};

/// The kind of document a source produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// A full HTML page with doctype, `<head>` and `<body>`.
    #[default]
    Html,
    /// An XML declaration followed by the nodes.
    Xml,
    /// An RSS 2.0 feed; the nodes make up its `<channel>`.
    Rss,
    /// A site map; the nodes are its `<url>` entries.
    Sitemap,
    /// A site map index; the nodes are its `<sitemap>` entries.
    SitemapIndex,
    /// The nodes alone.
    Fragment,
}

/// A document described as data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    format: SourceFormat,

    /// `lang` of the `<html>` element.
    #[serde(default)]
    language: Option<String>,

    /// Overrides the configured indentation policy.
    #[serde(default)]
    indentation: Option<IndentationKind>,

    /// Content of `<head>`; only used by HTML documents.
    #[serde(default)]
    head: Vec<SourceNode>,

    #[serde(default)]
    nodes: Vec<SourceNode>,
}

impl SourceDocument {
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn indentation(&self) -> Option<IndentationKind> {
        self.indentation
    }

    pub fn head(&self) -> &[SourceNode] {
        &self.head
    }

    pub fn nodes(&self) -> &[SourceNode] {
        &self.nodes
    }

    /// Builds the document these sources describe.
    pub fn to_document(&self) -> Document {
        let nodes = self.nodes.iter().map(Node::from);

        match self.format {
            SourceFormat::Html => {
                let mut page = Html::new(Node::group(nodes));
                if !self.head.is_empty() {
                    page = page.with_head(Node::group(self.head.iter().map(Node::from)));
                }
                if let Some(language) = &self.language {
                    page = page.with_language(language.as_str());
                }
                page.into()
            }
            SourceFormat::Xml => Xml::new(nodes).into(),
            SourceFormat::Rss => Rss::new(nodes).into(),
            SourceFormat::Sitemap => SiteMap::new(nodes).into(),
            SourceFormat::SitemapIndex => SiteMapIndex::new(nodes).into(),
            SourceFormat::Fragment => Document::custom(nodes),
        }
    }
}

/// One node of a [`SourceDocument`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceNode {
    Element {
        name: String,
        #[serde(default)]
        closing: ClosingMode,
        /// Attributes in declaration order.
        #[serde(default)]
        attributes: IndexMap<String, String>,
        #[serde(default)]
        children: Vec<SourceNode>,
    },
    /// An attribute of the enclosing element. Without a value it renders as
    /// a bare name.
    Attribute {
        name: String,
        #[serde(default)]
        value: Option<String>,
        /// Append to an existing value instead of replacing it.
        #[serde(default)]
        append: bool,
    },
    /// Escaped text.
    Text { value: String },
    /// Text inserted verbatim.
    Raw { value: String },
    Group { children: Vec<SourceNode> },
    Link {
        url: String,
        label: String,
        #[serde(default)]
        target: Option<AnchorTarget>,
        #[serde(default)]
        relationship: Option<AnchorRelationship>,
    },
    List {
        items: Vec<SourceNode>,
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        item_class: Option<String>,
    },
    Image {
        url: String,
        #[serde(default)]
        description: String,
    },
    /// A table of text cells.
    Table {
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
}

impl From<&SourceNode> for Node {
    fn from(source: &SourceNode) -> Self {
        match source {
            SourceNode::Element {
                name,
                closing,
                attributes,
                children,
            } => {
                let attributes = attributes
                    .iter()
                    .map(|(name, value)| Node::attribute(name.as_str(), value.as_str()));
                let children = children.iter().map(Node::from);
                Node::Element(
                    Element::new(name.as_str(), attributes.chain(children))
                        .with_closing_mode(*closing),
                )
            }
            SourceNode::Attribute {
                name,
                value,
                append,
            } => {
                let attribute = match value {
                    Some(value) => Attribute::new(name.as_str(), value.as_str()),
                    None => Attribute::boolean(name.as_str()),
                };
                Node::Attribute(attribute.with_replace_existing(!append))
            }
            SourceNode::Text { value } => Node::text(value.as_str()),
            SourceNode::Raw { value } => Node::raw(value.as_str()),
            SourceNode::Group { children } => children.iter().map(Node::from).collect(),
            SourceNode::Link {
                url,
                label,
                target,
                relationship,
            } => {
                let mut link = Node::from(Link::new(label.as_str(), url.as_str()));
                if let Some(target) = target {
                    link = link.link_target(*target);
                }
                if let Some(relationship) = relationship {
                    link = link.link_relationship(*relationship);
                }
                link
            }
            SourceNode::List {
                items,
                ordered,
                item_class,
            } => {
                let mut style = if *ordered {
                    ListStyle::ordered()
                } else {
                    ListStyle::unordered()
                };
                if let Some(item_class) = item_class {
                    style = style.with_item_class(item_class.as_str());
                }
                List::new(items.iter().map(Node::from)).list_style(style)
            }
            SourceNode::Image { url, description } => {
                Image::with_description(url.as_str(), description.as_str()).into()
            }
            SourceNode::Table {
                caption,
                header,
                rows,
            } => {
                let rows = rows.iter().map(|cells| {
                    Node::from(TableRow::new(cells.iter().map(String::as_str)))
                });
                let mut table = Table::new(rows);
                if let Some(caption) = caption {
                    table = table.with_caption(caption.as_str());
                }
                if let Some(header) = header {
                    table = table.with_header(TableRow::new(header.iter().map(String::as_str)));
                }
                table.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::Renderable;

    fn parse(source: &str) -> SourceDocument {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn test_defaults_to_html() {
        let document = parse("");
        assert_eq!(document.format(), SourceFormat::Html);
        assert!(document.nodes().is_empty());
        assert_eq!(
            document.to_document().render(),
            "<!DOCTYPE html><html><body></body></html>"
        );
    }

    #[test]
    fn test_element_attributes_keep_declaration_order() {
        let document = parse(
            r#"
            format = "fragment"

            [[nodes]]
            type = "element"
            name = "div"
            attributes = { id = "main", class = "card", role = "note" }
            children = [{ type = "text", value = "a < b" }]
            "#,
        );
        assert_eq!(
            document.to_document().render(),
            r#"<div id="main" class="card" role="note">a &lt; b</div>"#
        );
    }

    #[test]
    fn test_attribute_nodes() {
        let document = parse(
            r#"
            format = "fragment"

            [[nodes]]
            type = "element"
            name = "input"
            closing = "self_closing"
            attributes = { class = "one" }
            children = [
                { type = "attribute", name = "class", value = "two", append = true },
                { type = "attribute", name = "required" },
            ]
            "#,
        );
        assert_eq!(
            document.to_document().render(),
            r#"<input class="one two" required/>"#
        );
    }

    #[test]
    fn test_components() {
        let document = parse(
            r#"
            format = "fragment"

            [[nodes]]
            type = "link"
            label = "Docs"
            url = "/docs"
            target = "blank"

            [[nodes]]
            type = "list"
            ordered = true
            item_class = "step"
            items = [{ type = "text", value = "One" }, { type = "raw", value = "<b>Two</b>" }]

            [[nodes]]
            type = "image"
            url = "logo.png"

            [[nodes]]
            type = "table"
            header = ["Name"]
            rows = [["Quill"]]
            "#,
        );
        assert_eq!(
            document.to_document().render(),
            concat!(
                r#"<a href="/docs" target="_blank">Docs</a>"#,
                r#"<ol><li class="step">One</li><li class="step"><b>Two</b></li></ol>"#,
                r#"<img src="logo.png"/>"#,
                "<table><thead><tr><th>Name</th></tr></thead>",
                "<tbody><tr><td>Quill</td></tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_xml_format() {
        let document = parse(
            r#"
            format = "xml"

            [[nodes]]
            type = "element"
            name = "note"
            children = [{ type = "text", value = "Hi" }]
            "#,
        );
        assert_eq!(
            document.to_document().render(),
            r#"<?xml version="1.0" encoding="UTF-8"?><note>Hi</note>"#
        );
    }

    #[test]
    fn test_rss_format() {
        let document = parse(
            r#"
            format = "rss"

            [[nodes]]
            type = "element"
            name = "title"
            children = [{ type = "text", value = "News" }]
            "#,
        );
        assert_eq!(document.format(), SourceFormat::Rss);
        let rendered = document.to_document().render();
        assert!(rendered.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0""#));
        assert!(rendered.ends_with("<channel><title>News</title></channel></rss>"));
    }

    #[test]
    fn test_sitemap_formats() {
        let document = parse(
            r#"
            format = "sitemap"

            [[nodes]]
            type = "element"
            name = "url"
            children = [{ type = "element", name = "loc", children = [{ type = "text", value = "https://example.com" }] }]
            "#,
        );
        let rendered = document.to_document().render();
        assert!(rendered.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(rendered.ends_with("<url><loc>https://example.com</loc></url></urlset>"));

        let index = parse(r#"format = "sitemapindex""#);
        assert_eq!(index.format(), SourceFormat::SitemapIndex);
        assert!(
            index
                .to_document()
                .render()
                .ends_with(r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></sitemapindex>"#)
        );
    }

    #[test]
    fn test_html_head_and_language() {
        let document = parse(
            r#"
            language = "en"
            indentation = { kind = "tabs", count = 1 }

            [[head]]
            type = "element"
            name = "title"
            children = [{ type = "text", value = "T" }]
            "#,
        );
        assert_eq!(document.language(), Some("en"));
        assert_eq!(document.indentation(), Some(IndentationKind::Tabs(1)));
        assert_eq!(
            document.to_document().render(),
            r#"<!DOCTYPE html><html lang="en"><head><title>T</title></head><body></body></html>"#
        );
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let result: Result<SourceDocument, _> =
            toml::from_str("[[nodes]]\ntype = \"video\"\nurl = \"a.mp4\"");
        assert!(result.is_err());
    }
}
