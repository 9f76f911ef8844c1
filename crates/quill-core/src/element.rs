//! Elements and closing modes.

use std::str::FromStr;

use serde::Deserialize;

use crate::{attribute::Attribute, node::Node};

/// How an element's tag is closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosingMode {
    /// `<name>...</name>`
    #[default]
    Standard,
    /// `<name>` with no closing tag, e.g. `<!DOCTYPE html>`.
    NeverClosed,
    /// `<name/>`, falling back to [`ClosingMode::Standard`] when the element
    /// ends up with child elements.
    SelfClosing,
}

impl FromStr for ClosingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "never_closed" | "never-closed" => Ok(Self::NeverClosed),
            "self_closing" | "self-closing" => Ok(Self::SelfClosing),
            _ => Err(format!("Unknown closing mode: {s}")),
        }
    }
}

/// A named markup element.
///
/// Children are arbitrary [`Node`]s; attribute nodes among them are collected
/// onto this element when it is rendered. An element with an empty name is a
/// transparent container that renders only its children.
///
/// # Examples
///
/// ```
/// use quill_core::{Attribute, Element, Node, Renderable};
///
/// let link = Element::new("a", [
///     Node::from(Attribute::new("href", "/")),
///     Node::text("Home"),
/// ]);
/// assert_eq!(link.render(), r#"<a href="/">Home</a>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    closing_mode: ClosingMode,
    children: Vec<Node>,
    padding_character: Option<char>,
}

impl Element {
    /// Creates a standard element with the given children.
    pub fn new(name: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: name.into(),
            closing_mode: ClosingMode::Standard,
            children: children.into_iter().collect(),
            padding_character: None,
        }
    }

    /// Creates an element without children.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, [])
    }

    /// Creates an element whose only children are attributes.
    pub fn with_attributes(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self::new(name, attributes.into_iter().map(Node::Attribute))
    }

    /// Creates a self-closing element carrying the given attributes.
    pub fn self_closed(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        Self::with_attributes(name, attributes).with_closing_mode(ClosingMode::SelfClosing)
    }

    /// Creates the transparent container: no tag, only its children.
    pub fn container(children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(String::new(), children)
    }

    pub fn with_closing_mode(mut self, closing_mode: ClosingMode) -> Self {
        self.closing_mode = closing_mode;
        self
    }

    /// Sets a character written right after `<` and right before `>`, as
    /// used by processing instructions like `<?xml ... ?>`.
    pub fn with_padding_character(mut self, padding_character: char) -> Self {
        self.padding_character = Some(padding_character);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn closing_mode(&self) -> ClosingMode {
        self.closing_mode
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn padding_character(&self) -> Option<char> {
        self.padding_character
    }

    /// Returns `true` when this element renders no tag of its own.
    pub fn is_container(&self) -> bool {
        self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_attributes_places_attributes_as_children() {
        let element = Element::with_attributes(
            "meta",
            [Attribute::new("charset", "UTF-8")],
        );
        assert_eq!(element.children().len(), 1);
        assert!(matches!(element.children()[0], Node::Attribute(_)));
        assert_eq!(element.closing_mode(), ClosingMode::Standard);
    }

    #[test]
    fn test_self_closed() {
        let element = Element::self_closed("br", []);
        assert_eq!(element.closing_mode(), ClosingMode::SelfClosing);
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_container() {
        assert!(Element::container([]).is_container());
        assert!(!Element::named("div").is_container());
    }

    #[test]
    fn test_push_child() {
        let mut element = Element::named("p");
        element.push_child("text");
        element.push_child(Element::named("br"));
        assert_eq!(element.children().len(), 2);
    }

    #[test]
    fn test_closing_mode_from_str() {
        assert_eq!("standard".parse::<ClosingMode>(), Ok(ClosingMode::Standard));
        assert_eq!(
            "self-closing".parse::<ClosingMode>(),
            Ok(ClosingMode::SelfClosing)
        );
        assert_eq!(
            "never_closed".parse::<ClosingMode>(),
            Ok(ClosingMode::NeverClosed)
        );
        assert!("open".parse::<ClosingMode>().is_err());
    }
}
