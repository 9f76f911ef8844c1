//! HTML attribute builders.
//!
//! Each builder returns an attribute [`Node`] to place among an element's
//! children. Boolean attributes render as a bare name (`required`) when
//! enabled and disappear when disabled.

use std::fmt;

use quill_core::{Attribute, Node};

use super::environment::{AnchorRelationship, AnchorTarget};

/// Values for the `type` attribute of `<input>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Password,
    Email,
    Number,
    Search,
    Url,
    Checkbox,
    Radio,
    Hidden,
    File,
    Submit,
    Reset,
    Button,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Search => "search",
            Self::Url => "url",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Hidden => "hidden",
            Self::File => "file",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn attribute(name: &str, value: impl Into<String>) -> Node {
    Node::Attribute(Attribute::new(name, value))
}

fn flag(name: &str, enabled: bool) -> Node {
    Node::when(enabled, Attribute::boolean(name))
}

pub fn class(value: impl Into<String>) -> Node {
    attribute("class", value)
}

pub fn id(value: impl Into<String>) -> Node {
    attribute("id", value)
}

pub fn href(url: impl Into<String>) -> Node {
    attribute("href", url)
}

pub fn src(url: impl Into<String>) -> Node {
    attribute("src", url)
}

/// Alternative text; an empty description is left out.
pub fn alt(description: impl Into<String>) -> Node {
    attribute("alt", description)
}

pub fn rel(relationship: AnchorRelationship) -> Node {
    attribute("rel", relationship.as_str())
}

pub fn target(target: AnchorTarget) -> Node {
    attribute("target", target.as_str())
}

pub fn lang(language: impl Into<String>) -> Node {
    attribute("lang", language)
}

pub fn charset(charset: impl Into<String>) -> Node {
    attribute("charset", charset)
}

pub fn name(name: impl Into<String>) -> Node {
    attribute("name", name)
}

pub fn content(content: impl Into<String>) -> Node {
    attribute("content", content)
}

pub fn value(value: impl Into<String>) -> Node {
    attribute("value", value)
}

/// The `type` attribute of `<input>`.
pub fn input_type(input_type: InputType) -> Node {
    attribute("type", input_type.as_str())
}

pub fn placeholder(text: impl Into<String>) -> Node {
    attribute("placeholder", text)
}

pub fn style(css: impl Into<String>) -> Node {
    attribute("style", css)
}

pub fn required(enabled: bool) -> Node {
    flag("required", enabled)
}

pub fn autofocus(enabled: bool) -> Node {
    flag("autofocus", enabled)
}

/// `autocomplete="on"` or `autocomplete="off"`.
pub fn autocomplete(enabled: bool) -> Node {
    attribute("autocomplete", if enabled { "on" } else { "off" })
}

/// A `data-*` attribute.
pub fn data(name: &str, value: impl Into<String>) -> Node {
    attribute(&format!("data-{name}"), value)
}

pub fn aria_label(label: impl Into<String>) -> Node {
    attribute("aria-label", label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::Renderable;

    #[test]
    fn test_attribute_builders_render() {
        assert_eq!(class("a").render(), r#"class="a""#);
        assert_eq!(href("/").render(), r#"href="/""#);
        assert_eq!(rel(AnchorRelationship::NoFollow).render(), r#"rel="nofollow""#);
        assert_eq!(target(AnchorTarget::Blank).render(), r#"target="_blank""#);
        assert_eq!(input_type(InputType::Password).render(), r#"type="password""#);
        assert_eq!(data("test", "value").render(), r#"data-test="value""#);
        assert_eq!(aria_label("Label").render(), r#"aria-label="Label""#);
        assert_eq!(autocomplete(false).render(), r#"autocomplete="off""#);
    }

    #[test]
    fn test_boolean_attributes() {
        assert_eq!(required(true).render(), "required");
        assert_eq!(required(false).render(), "");
        assert!(matches!(autofocus(false), Node::Empty));
    }

    #[test]
    fn test_empty_alt_is_omitted() {
        let img = Node::self_closed_element("img", []);
        let Node::Element(element) = img else {
            panic!("Expected an element");
        };
        let img = Node::Element(element.with_children([src("a.png"), alt("")]));
        assert_eq!(img.render(), r#"<img src="a.png"/>"#);
    }
}
