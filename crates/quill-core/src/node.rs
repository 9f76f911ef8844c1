//! The node tree.
//!
//! A [`Node`] is an immutable value describing a piece of a document. Nodes
//! nest through [`Element`] children and [`Node::Group`]s and are turned into
//! text by the [renderer](crate::renderer).
//!
//! # Overview
//!
//! - [`Node::Element`]: a tag with children.
//! - [`Node::Attribute`]: an attribute for the enclosing element.
//! - [`Node::Text`]: text, escaped when rendered.
//! - [`Node::Raw`]: text emitted verbatim.
//! - [`Node::Group`]: an ordered sequence without markup of its own.
//! - [`Node::Empty`]: renders nothing.
//! - [`Node::Component`]: a component or a modified/wrapped subtree, reduced
//!   while rendering (see [`component`](crate::component)).
//!
//! # Examples
//!
//! ```
//! use quill_core::{Node, Renderable};
//!
//! let list = Node::element("ul", [
//!     Node::element_with_text("li", "One"),
//!     Node::element_with_text("li", "Two & Three"),
//! ]);
//! assert_eq!(list.render(), "<ul><li>One</li><li>Two &amp; Three</li></ul>");
//! ```

use crate::{
    attribute::Attribute,
    component::{Component, ComponentNode},
    element::{ClosingMode, Element},
};

// =============================================================================
// Type Definitions
// =============================================================================

/// A node in a markup document tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// An element, which may carry attributes and children.
    Element(Element),
    /// An attribute applied to the enclosing element.
    Attribute(Attribute),
    /// Free-form text, escaped when rendered.
    Text(String),
    /// Pre-processed text, rendered as-is.
    Raw(String),
    /// A sequence of nodes rendered one after another.
    Group(Vec<Node>),
    /// Nothing.
    #[default]
    Empty,
    /// A component, or a subtree carrying deferred modifiers.
    Component(ComponentNode),
}

// =============================================================================
// Constructors
// =============================================================================

impl Node {
    /// Creates an element node with the given children.
    ///
    /// # Arguments
    ///
    /// * `name` - Tag name. An empty name creates a transparent container.
    /// * `children` - Child nodes, including attribute nodes.
    pub fn element(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self::Element(Element::new(name, children))
    }

    /// Creates an element node without children.
    pub fn element_named(name: impl Into<String>) -> Self {
        Self::Element(Element::named(name))
    }

    /// Creates an element node containing escaped text.
    pub fn element_with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::element(name, [Self::text(text)])
    }

    /// Creates an element node whose children are the given attributes.
    pub fn element_with_attributes(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self::Element(Element::with_attributes(name, attributes))
    }

    /// Creates a self-closing element node, e.g. `<br/>`.
    pub fn self_closed_element(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self::Element(Element::self_closed(name, attributes))
    }

    /// Creates an element node that is never closed, e.g. `<!DOCTYPE html>`.
    pub fn never_closed_element(
        name: impl Into<String>,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        Self::Element(Element::new(name, children).with_closing_mode(ClosingMode::NeverClosed))
    }

    /// Creates an attribute node.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute(Attribute::new(name, value))
    }

    /// Creates an attribute node whose value may be absent.
    pub fn optional_attribute(name: impl Into<String>, value: Option<String>) -> Self {
        Self::Attribute(Attribute::optional(name, value))
    }

    /// Creates a bare-name attribute node such as `required`.
    pub fn boolean_attribute(name: impl Into<String>) -> Self {
        Self::Attribute(Attribute::boolean(name))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    pub fn group(members: impl IntoIterator<Item = Node>) -> Self {
        Self::Group(members.into_iter().collect())
    }

    /// Places a component in the tree.
    ///
    /// The component's body is produced while rendering, with the
    /// environment in effect at this position.
    pub fn component<C: Component + 'static>(component: C) -> Self {
        Self::Component(ComponentNode::custom(component))
    }

    // -------------------------------------------------------------------------
    // Control flow
    // -------------------------------------------------------------------------

    /// Returns `node` when `condition` holds, otherwise [`Node::Empty`].
    pub fn when(condition: bool, node: impl Into<Node>) -> Self {
        if condition { node.into() } else { Self::Empty }
    }

    /// Returns `node` when `condition` holds, otherwise `fallback`.
    pub fn when_else(condition: bool, node: impl Into<Node>, fallback: impl Into<Node>) -> Self {
        if condition {
            node.into()
        } else {
            fallback.into()
        }
    }

    /// Maps an optional value into a node, or [`Node::Empty`].
    pub fn unwrap_or_empty<T>(value: Option<T>, transform: impl FnOnce(T) -> Node) -> Self {
        value.map(transform).unwrap_or_default()
    }

    /// Creates a group with one node per item.
    pub fn for_each<I: IntoIterator>(items: I, transform: impl FnMut(I::Item) -> Node) -> Self {
        Self::Group(items.into_iter().map(transform).collect())
    }

    /// Returns `true` for [`Node::Empty`] and for groups of only empty nodes.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Group(members) => members.iter().all(Node::is_empty),
            _ => false,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Self::Attribute(attribute)
    }
}

impl From<Vec<Node>> for Node {
    fn from(members: Vec<Node>) -> Self {
        Self::Group(members)
    }
}

impl<const N: usize> From<[Node; N]> for Node {
    fn from(members: [Node; N]) -> Self {
        Self::Group(members.into())
    }
}

impl From<Option<Node>> for Node {
    fn from(node: Option<Node>) -> Self {
        node.unwrap_or_default()
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::Group(iter.into_iter().collect())
    }
}
