//! Configuration types for Quill document rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and link settings.
//! - [`RenderConfig`] - Controls output formatting such as indentation.
//! - [`LinkConfig`] - Document-wide defaults for links in HTML documents.
//!
//! # Example
//!
//! ```
//! # use quill::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [render]
//!     indentation = { kind = "tabs", count = 1 }
//!
//!     [links]
//!     target = "blank"
//! "#).unwrap();
//! assert!(config.render().indentation().is_some());
//! assert!(config.links().relationship().is_none());
//! ```

use serde::Deserialize;

use quill_core::IndentationKind;

use crate::html::{AnchorRelationship, AnchorTarget};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Link configuration section.
    #[serde(default)]
    links: LinkConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `render` - Output formatting settings.
    /// * `links` - Link defaults for HTML documents.
    pub fn new(render: RenderConfig, links: LinkConfig) -> Self {
        Self { render, links }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the link configuration.
    pub fn links(&self) -> &LinkConfig {
        &self.links
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Indentation policy; output is minified when unset.
    #[serde(default)]
    indentation: Option<IndentationKind>,
}

impl RenderConfig {
    pub fn new(indentation: Option<IndentationKind>) -> Self {
        Self { indentation }
    }

    /// Returns the configured indentation policy, if any.
    pub fn indentation(&self) -> Option<IndentationKind> {
        self.indentation
    }
}

/// Defaults applied to every link of an HTML document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkConfig {
    #[serde(default)]
    target: Option<AnchorTarget>,

    #[serde(default)]
    relationship: Option<AnchorRelationship>,
}

impl LinkConfig {
    pub fn new(target: Option<AnchorTarget>, relationship: Option<AnchorRelationship>) -> Self {
        Self {
            target,
            relationship,
        }
    }

    pub fn target(&self) -> Option<AnchorTarget> {
        self.target
    }

    pub fn relationship(&self) -> Option<AnchorRelationship> {
        self.relationship
    }
}
