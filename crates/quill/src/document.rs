//! Complete documents.
//!
//! A [`Document`] is an ordered list of root nodes rendered with an initial
//! [`Environment`]. [`Html`] and [`Xml`] build the usual document shapes on
//! top of it, and [`Rss`], [`SiteMap`] and [`SiteMapIndex`] the XML formats
//! read by feed readers and search engines.
//!
//! # Example
//!
//! ```
//! use quill::document::Html;
//! use quill::html::{p, title};
//! use quill::Renderable;
//!
//! let page = Html::new(p("Hello")).with_head(title("Greeting")).with_language("en");
//! assert_eq!(
//!     page.render(),
//!     concat!(
//!         "<!DOCTYPE html>",
//!         r#"<html lang="en"><head><title>Greeting</title></head>"#,
//!         "<body><p>Hello</p></body></html>"
//!     )
//! );
//! ```

use log::debug;

use quill_core::{
    Attribute, ClosingMode, Element, Environment, EnvironmentKey, IndentationKind, Node,
    Renderable, renderer::Renderer,
};

use crate::html::{self, lang};

// =============================================================================
// Document
// =============================================================================

/// Root nodes plus the environment they are rendered in.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    environment: Environment,
}

impl Document {
    /// Creates a document from arbitrary root nodes.
    pub fn custom(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            environment: Environment::new(),
        }
    }

    /// Sets `key` for the whole document.
    pub fn with_environment_value<T: 'static>(mut self, key: &EnvironmentKey<T>, value: T) -> Self {
        self.environment = self.environment.with_override(key, value);
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

impl Renderable for Document {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        debug!(
            roots = self.nodes.len(),
            environment_values = self.environment.len();
            "Rendering document"
        );
        let mut renderer = Renderer::with_environment(indentation, self.environment.clone());
        for node in &self.nodes {
            renderer.render_node(node);
        }
        renderer.into_result()
    }
}

// =============================================================================
// HTML
// =============================================================================

/// An HTML page: `<!DOCTYPE html>` followed by `<html>` with an optional
/// `<head>` and a `<body>`.
#[derive(Debug, Clone)]
pub struct Html {
    language: Option<String>,
    head: Option<Node>,
    body: Node,
    environment: Environment,
}

impl Html {
    /// Creates a page whose `<body>` holds `body`.
    pub fn new(body: impl Into<Node>) -> Self {
        Self {
            language: None,
            head: None,
            body: body.into(),
            environment: Environment::new(),
        }
    }

    /// Sets the content of `<head>`.
    pub fn with_head(mut self, head: impl Into<Node>) -> Self {
        self.head = Some(head.into());
        self
    }

    /// Sets the `lang` attribute of `<html>`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets `key` for the whole page.
    pub fn with_environment_value<T: 'static>(mut self, key: &EnvironmentKey<T>, value: T) -> Self {
        self.environment = self.environment.with_override(key, value);
        self
    }
}

impl From<Html> for Document {
    fn from(page: Html) -> Self {
        let root = html::html([
            Node::unwrap_or_empty(page.language, lang),
            Node::unwrap_or_empty(page.head, html::head),
            html::body(page.body),
        ]);

        Self {
            nodes: vec![html::doctype(), root],
            environment: page.environment,
        }
    }
}

impl Renderable for Html {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        Document::from(self.clone()).render_with(indentation)
    }
}

// =============================================================================
// XML
// =============================================================================

/// An XML document: the `<?xml?>` declaration followed by the root content.
#[derive(Debug, Clone)]
pub struct Xml {
    root: Vec<Node>,
}

impl Xml {
    pub fn new(root: impl IntoIterator<Item = Node>) -> Self {
        Self {
            root: root.into_iter().collect(),
        }
    }

    fn declaration() -> Node {
        Node::Element(
            Element::with_attributes(
                "xml",
                [
                    Attribute::new("version", "1.0"),
                    Attribute::new("encoding", "UTF-8"),
                ],
            )
            .with_closing_mode(ClosingMode::NeverClosed)
            .with_padding_character('?'),
        )
    }
}

impl From<Xml> for Document {
    fn from(xml: Xml) -> Self {
        Document::custom([Xml::declaration(), Node::Element(Element::container(xml.root))])
    }
}

impl Renderable for Xml {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        Document::from(self.clone()).render_with(indentation)
    }
}

// =============================================================================
// Feeds and site maps
// =============================================================================

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// An RSS 2.0 feed. The nodes make up the `<channel>`: its metadata and
/// `<item>` elements.
#[derive(Debug, Clone)]
pub struct Rss {
    channel: Vec<Node>,
}

impl Rss {
    pub fn new(channel: impl IntoIterator<Item = Node>) -> Self {
        Self {
            channel: channel.into_iter().collect(),
        }
    }
}

impl From<Rss> for Document {
    fn from(feed: Rss) -> Self {
        let rss = Node::element(
            "rss",
            [
                Node::attribute("version", "2.0"),
                Node::attribute("xmlns:atom", "http://www.w3.org/2005/Atom"),
                Node::attribute("xmlns:content", "http://purl.org/rss/1.0/modules/content/"),
                Node::element("channel", feed.channel),
            ],
        );
        Document::custom([Xml::declaration(), rss])
    }
}

impl Renderable for Rss {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        Document::from(self.clone()).render_with(indentation)
    }
}

/// A site map: a `<urlset>` of `<url>` entries.
#[derive(Debug, Clone)]
pub struct SiteMap {
    urls: Vec<Node>,
}

impl SiteMap {
    pub fn new(urls: impl IntoIterator<Item = Node>) -> Self {
        Self {
            urls: urls.into_iter().collect(),
        }
    }
}

impl From<SiteMap> for Document {
    fn from(map: SiteMap) -> Self {
        let mut children = vec![
            Node::attribute("xmlns", SITEMAP_NAMESPACE),
            Node::attribute("xmlns:image", "http://www.google.com/schemas/sitemap-image/1.1"),
        ];
        children.extend(map.urls);
        Document::custom([Xml::declaration(), Node::element("urlset", children)])
    }
}

impl Renderable for SiteMap {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        Document::from(self.clone()).render_with(indentation)
    }
}

/// An index of site maps, for sites too large for a single one.
#[derive(Debug, Clone)]
pub struct SiteMapIndex {
    site_maps: Vec<Node>,
}

impl SiteMapIndex {
    pub fn new(site_maps: impl IntoIterator<Item = Node>) -> Self {
        Self {
            site_maps: site_maps.into_iter().collect(),
        }
    }
}

impl From<SiteMapIndex> for Document {
    fn from(index: SiteMapIndex) -> Self {
        let mut children = vec![Node::attribute("xmlns", SITEMAP_NAMESPACE)];
        children.extend(index.site_maps);
        Document::custom([Xml::declaration(), Node::element("sitemapindex", children)])
    }
}

impl Renderable for SiteMapIndex {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        Document::from(self.clone()).render_with(indentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{AnchorTarget, Link, charset, div, environment, meta};

    #[test]
    fn test_custom_document() {
        let document = Document::custom([Node::element_named("a"), Node::element_named("b")]);
        assert_eq!(document.render(), "<a></a><b></b>");
        assert_eq!(
            document.render_indented(IndentationKind::Spaces(4)),
            "<a></a>\n<b></b>"
        );
    }

    #[test]
    fn test_empty_html_page() {
        assert_eq!(
            Html::new(()).render(),
            "<!DOCTYPE html><html><body></body></html>"
        );
    }

    #[test]
    fn test_indented_html_page() {
        let page = Html::new(div("Hello")).with_head(meta(charset("UTF-8")));
        assert_eq!(
            page.render_indented(IndentationKind::Spaces(2)),
            concat!(
                "<!DOCTYPE html>\n",
                "<html>\n",
                "  <head>\n",
                "    <meta charset=\"UTF-8\"/>\n",
                "  </head>\n",
                "  <body>\n",
                "    <div>Hello</div>\n",
                "  </body>\n",
                "</html>"
            )
        );
    }

    #[test]
    fn test_page_environment_reaches_components() {
        let page = Html::new(Link::new("Home", "/"))
            .with_environment_value(&environment::link_target(), Some(AnchorTarget::Blank));
        assert_eq!(
            page.render(),
            r#"<!DOCTYPE html><html><body><a href="/" target="_blank">Home</a></body></html>"#
        );
    }

    #[test]
    fn test_xml_document() {
        let xml = Xml::new([Node::element("feed", [Node::element_with_text("title", "T")])]);
        assert_eq!(
            xml.render(),
            r#"<?xml version="1.0" encoding="UTF-8"?><feed><title>T</title></feed>"#
        );
        assert_eq!(
            xml.render_indented(IndentationKind::Spaces(4)),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<feed>\n    <title>T</title>\n</feed>"
        );
    }

    #[test]
    fn test_empty_rss_feed() {
        assert_eq!(
            Rss::new([]).render(),
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom" "#,
                r#"xmlns:content="http://purl.org/rss/1.0/modules/content/">"#,
                "<channel></channel></rss>"
            )
        );
    }

    #[test]
    fn test_rss_feed_items() {
        let feed = Rss::new([
            Node::element_with_text("title", "News"),
            Node::element(
                "item",
                [
                    Node::element_with_text("title", "Fish & Chips"),
                    Node::element_with_text("link", "https://example.com/fish"),
                ],
            ),
        ]);
        let rendered = feed.render();
        assert!(rendered.ends_with(concat!(
            "<channel><title>News</title>",
            "<item><title>Fish &amp; Chips</title>",
            "<link>https://example.com/fish</link></item>",
            "</channel></rss>"
        )));
    }

    #[test]
    fn test_site_map() {
        let map = SiteMap::new([Node::element(
            "url",
            [
                Node::element_with_text("loc", "https://example.com"),
                Node::element_with_text("changefreq", "daily"),
            ],
        )]);
        assert_eq!(
            map.render(),
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" "#,
                r#"xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">"#,
                "<url><loc>https://example.com</loc><changefreq>daily</changefreq></url>",
                "</urlset>"
            )
        );
    }

    #[test]
    fn test_site_map_index_indented() {
        let index = SiteMapIndex::new([Node::element(
            "sitemap",
            [Node::element_with_text("loc", "https://example.com/a.xml")],
        )]);
        assert_eq!(
            index.render_indented(IndentationKind::Spaces(2)),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
                "  <sitemap>\n",
                "    <loc>https://example.com/a.xml</loc>\n",
                "  </sitemap>\n",
                "</sitemapindex>"
            )
        );
    }

    #[test]
    fn test_empty_xml_document() {
        assert_eq!(
            Xml::new([]).render(),
            r#"<?xml version="1.0" encoding="UTF-8"?>"#
        );
    }
}
