//! Quill - typed HTML and XML documents built from components.
//!
//! Documents are trees of [`Node`]s assembled with the builders in [`html`]
//! and rendered through [`Renderable`]. Reusable pieces implement
//! [`Component`] and read contextual settings from the [`Environment`].
//! Sources described as data ([`source`]) are rendered by the
//! [`DocumentBuilder`].

pub mod config;
pub mod document;
pub mod html;
pub mod source;

mod error;

pub use quill_core::{
    Attribute, ClosingMode, Component, Element, ElementWrapper, Environment, EnvironmentKey,
    IndentationKind, Node, Renderable, render,
};
pub use quill_core::escape::escape;

pub use error::QuillError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use html::environment;
use source::{SourceDocument, SourceFormat};

/// Builder for parsing and rendering declarative markup sources.
///
/// # Examples
///
/// ```
/// use quill::{DocumentBuilder, config::AppConfig};
///
/// let source = r#"
///     format = "fragment"
///
///     [[nodes]]
///     type = "element"
///     name = "p"
///     children = [{ type = "text", value = "Fish & chips" }]
/// "#;
///
/// let builder = DocumentBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let output = builder.render(&document).expect("Failed to render");
/// assert_eq!(output, "<p>Fish &amp; chips</p>");
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
    indentation: Option<IndentationKind>,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and link settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            indentation: None,
        }
    }

    /// Forces an indentation policy, ignoring the source and configuration.
    pub fn with_indentation(mut self, indentation: IndentationKind) -> Self {
        self.indentation = Some(indentation);
        self
    }

    /// Parse a TOML markup source into a [`SourceDocument`].
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Source`] when the source is not valid TOML or
    /// does not describe a document. The error keeps the source text for
    /// diagnostics.
    pub fn parse(&self, source: &str) -> Result<SourceDocument, QuillError> {
        info!("Parsing markup source");

        let document: SourceDocument =
            toml::from_str(source).map_err(|err| QuillError::new_source_error(err, source))?;

        debug!(
            format:? = document.format(),
            nodes = document.nodes().len();
            "Markup source parsed successfully"
        );
        trace!(document:?; "Parsed source");

        Ok(document)
    }

    /// Render a parsed source to a string.
    ///
    /// Unless forced with [`with_indentation`](Self::with_indentation), the
    /// indentation declared by the source wins over the configured one.
    /// Link defaults from the configuration apply to HTML documents.
    ///
    /// # Errors
    ///
    /// Rendering itself cannot fail; the `Result` leaves room for output
    /// formats that can.
    pub fn render(&self, source: &SourceDocument) -> Result<String, QuillError> {
        let indentation = self
            .indentation
            .or(source.indentation())
            .or(self.config.render().indentation());
        info!(format:? = source.format(), indentation:?; "Rendering document");

        if source.format() != SourceFormat::Html && !source.head().is_empty() {
            warn!(format:? = source.format(); "Ignoring head nodes outside an HTML document");
        }

        let mut document = source.to_document();
        if source.format() == SourceFormat::Html {
            let links = self.config.links();
            if links.target().is_some() {
                document =
                    document.with_environment_value(&environment::link_target(), links.target());
            }
            if links.relationship().is_some() {
                document = document
                    .with_environment_value(&environment::link_relationship(), links.relationship());
            }
        }

        let output = document.render_with(indentation);

        info!(length = output.len(); "Document rendered successfully");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LinkConfig, RenderConfig};
    use crate::html::{AnchorRelationship, AnchorTarget};

    const LINK_PAGE: &str = r#"
        [[nodes]]
        type = "link"
        label = "Home"
        url = "/"
    "#;

    #[test]
    fn test_parse_error_keeps_source() {
        let builder = DocumentBuilder::default();
        let source = "[[nodes]]\ntype = \"element\"";
        let Err(QuillError::Source { src, .. }) = builder.parse(source) else {
            panic!("Expected a source error");
        };
        assert_eq!(src, source);
    }

    #[test]
    fn test_configured_link_defaults_apply_to_html() {
        let config = AppConfig::new(
            RenderConfig::default(),
            LinkConfig::new(Some(AnchorTarget::Blank), Some(AnchorRelationship::NoOpener)),
        );
        let builder = DocumentBuilder::new(config);
        let document = builder.parse(LINK_PAGE).unwrap();
        assert_eq!(
            builder.render(&document).unwrap(),
            r#"<!DOCTYPE html><html><body><a href="/" rel="noopener" target="_blank">Home</a></body></html>"#
        );
    }

    #[test]
    fn test_source_indentation_wins_over_config() {
        let config = AppConfig::new(
            RenderConfig::new(Some(IndentationKind::Spaces(4))),
            LinkConfig::default(),
        );
        let builder = DocumentBuilder::new(config);

        let source = r#"
            format = "fragment"
            indentation = { kind = "spaces", count = 1 }

            [[nodes]]
            type = "element"
            name = "a"
            children = [{ type = "element", name = "b" }]
        "#;
        let document = builder.parse(source).unwrap();
        assert_eq!(builder.render(&document).unwrap(), "<a>\n <b></b>\n</a>");

        let source = r#"
            format = "fragment"

            [[nodes]]
            type = "element"
            name = "a"
            children = [{ type = "element", name = "b" }]
        "#;
        let document = builder.parse(source).unwrap();
        assert_eq!(builder.render(&document).unwrap(), "<a>\n    <b></b>\n</a>");

        let builder = builder.with_indentation(IndentationKind::Tabs(1));
        assert_eq!(builder.render(&document).unwrap(), "<a>\n\t<b></b>\n</a>");
    }
}
