//! Environment keys and values used by the HTML components.

use std::{fmt, rc::Rc, str::FromStr};

use serde::Deserialize;

use quill_core::{EnvironmentKey, Node};

use super::modifiers::HtmlModifiers;

// =============================================================================
// Keys
// =============================================================================

/// The `target` applied to every [`Link`](super::Link) in a subtree.
pub fn link_target() -> EnvironmentKey<Option<AnchorTarget>> {
    EnvironmentKey::new("quill.html.link-target", None)
}

/// The `rel` applied to every [`Link`](super::Link) in a subtree.
pub fn link_relationship() -> EnvironmentKey<Option<AnchorRelationship>> {
    EnvironmentKey::new("quill.html.link-relationship", None)
}

/// The style used by [`List`](super::List). Defaults to [`ListStyle::unordered`].
pub fn list_style() -> EnvironmentKey<ListStyle> {
    EnvironmentKey::new("quill.html.list-style", ListStyle::unordered())
}

/// Whether [`Input`](super::Input) fields enable autocomplete. `None` leaves
/// the attribute out.
pub fn is_auto_complete_enabled() -> EnvironmentKey<Option<bool>> {
    EnvironmentKey::new("quill.html.auto-complete", None)
}

// =============================================================================
// Anchor values
// =============================================================================

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorTarget {
    /// The current browsing context.
    #[serde(rename = "self", alias = "_self")]
    Current,
    #[serde(alias = "_blank")]
    Blank,
    #[serde(alias = "_parent")]
    Parent,
    #[serde(alias = "_top")]
    Top,
}

impl AnchorTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "self",
            Self::Blank => "_blank",
            Self::Parent => "_parent",
            Self::Top => "_top",
        }
    }
}

impl fmt::Display for AnchorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('_') {
            "self" => Ok(Self::Current),
            "blank" => Ok(Self::Blank),
            "parent" => Ok(Self::Parent),
            "top" => Ok(Self::Top),
            _ => Err(format!("Unknown link target: {s}")),
        }
    }
}

/// The relationship between a page and a linked resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorRelationship {
    NoFollow,
    NoOpener,
    NoReferrer,
    Opener,
    External,
    Ar,
}

impl AnchorRelationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoFollow => "nofollow",
            Self::NoOpener => "noopener",
            Self::NoReferrer => "noreferrer",
            Self::Opener => "opener",
            Self::External => "external",
            Self::Ar => "ar",
        }
    }
}

impl fmt::Display for AnchorRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorRelationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nofollow" => Ok(Self::NoFollow),
            "noopener" => Ok(Self::NoOpener),
            "noreferrer" => Ok(Self::NoReferrer),
            "opener" => Ok(Self::Opener),
            "external" => Ok(Self::External),
            "ar" => Ok(Self::Ar),
            _ => Err(format!("Unknown link relationship: {s}")),
        }
    }
}

// =============================================================================
// List style
// =============================================================================

/// How a [`List`](super::List) renders: the list element and a function
/// applied to every item.
///
/// The default item wrapper places each item in an `<li>`, leaving items
/// that already are `<li>` elements alone.
///
/// # Examples
///
/// ```
/// use quill::html::{List, ListStyle, HtmlModifiers};
/// use quill::Renderable;
///
/// let html = List::new(["One", "Two"])
///     .list_style(ListStyle::ordered().with_item_class("item"))
///     .render();
/// assert_eq!(html, r#"<ol><li class="item">One</li><li class="item">Two</li></ol>"#);
/// ```
#[derive(Clone)]
pub struct ListStyle {
    element_name: String,
    item_wrapper: Rc<dyn Fn(Node) -> Node>,
}

impl ListStyle {
    /// Creates a style with a custom list element and the default item wrapper.
    pub fn new(element_name: impl Into<String>) -> Self {
        Self {
            element_name: element_name.into(),
            item_wrapper: Rc::new(|item: Node| item.wrapped_in_element("li")),
        }
    }

    /// `<ul>` with `<li>` items.
    pub fn unordered() -> Self {
        Self::new("ul")
    }

    /// `<ol>` with `<li>` items.
    pub fn ordered() -> Self {
        Self::new("ol")
    }

    /// Adds `class_name` to every item.
    pub fn with_item_class(self, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        self.modifying_items(move |item| item.class(&class_name))
    }

    /// Applies `modifier` to every wrapped item.
    pub fn modifying_items(self, modifier: impl Fn(Node) -> Node + 'static) -> Self {
        let wrapper = Rc::clone(&self.item_wrapper);
        Self {
            element_name: self.element_name,
            item_wrapper: Rc::new(move |item: Node| modifier(wrapper(item))),
        }
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    /// Runs the item wrapper over `item`.
    pub fn wrap_item(&self, item: Node) -> Node {
        (self.item_wrapper)(item)
    }
}

impl Default for ListStyle {
    fn default() -> Self {
        Self::unordered()
    }
}

impl fmt::Debug for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStyle")
            .field("element_name", &self.element_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target_values() {
        assert_eq!(AnchorTarget::Blank.to_string(), "_blank");
        assert_eq!(AnchorTarget::Current.as_str(), "self");
        assert_eq!("_top".parse::<AnchorTarget>(), Ok(AnchorTarget::Top));
        assert_eq!("parent".parse::<AnchorTarget>(), Ok(AnchorTarget::Parent));
        assert!("window".parse::<AnchorTarget>().is_err());
    }

    #[test]
    fn test_anchor_relationship_values() {
        assert_eq!(AnchorRelationship::NoFollow.to_string(), "nofollow");
        assert_eq!(
            "noreferrer".parse::<AnchorRelationship>(),
            Ok(AnchorRelationship::NoReferrer)
        );
        assert!("friend".parse::<AnchorRelationship>().is_err());
    }

    #[test]
    fn test_anchor_values_deserialize() {
        #[derive(Debug, Deserialize)]
        struct Links {
            target: AnchorTarget,
            relationship: AnchorRelationship,
        }

        let links: Links = toml::from_str("target = \"blank\"\nrelationship = \"nofollow\"").unwrap();
        assert_eq!(links.target, AnchorTarget::Blank);
        assert_eq!(links.relationship, AnchorRelationship::NoFollow);
    }

    #[test]
    fn test_list_style_defaults() {
        assert_eq!(ListStyle::default().element_name(), "ul");
        assert_eq!(ListStyle::ordered().element_name(), "ol");
        assert_eq!(list_style().default_value().element_name(), "ul");
        assert_eq!(*link_target().default_value(), None);
    }
}
