//! HTML modifiers for nodes and components.
//!
//! [`HtmlModifiers`] is implemented for everything convertible into a
//! [`Node`]. Each modifier is expressed through the two core primitives,
//! [`Node::add_attribute`] and [`Node::add_environment_override`], so it
//! applies to whatever element(s) the value eventually renders.

use quill_core::{Attribute, EnvironmentKey, Node};

use super::environment::{
    self, AnchorRelationship, AnchorTarget, ListStyle,
};

/// Convenience modifiers for HTML content.
///
/// # Examples
///
/// ```
/// use quill::html::{HtmlModifiers, p};
/// use quill::Renderable;
///
/// let html = p("Hello").class("one").class("two").id("greeting").render();
/// assert_eq!(html, r#"<p class="one two" id="greeting">Hello</p>"#);
/// ```
pub trait HtmlModifiers: Into<Node> + Sized {
    /// Adds a CSS class, keeping classes added earlier.
    fn class(self, class_name: impl Into<String>) -> Node {
        self.into()
            .add_attribute(Attribute::new("class", class_name).appending())
    }

    /// Sets the CSS class, dropping classes added earlier.
    fn replacing_class(self, class_name: impl Into<String>) -> Node {
        self.into().add_attribute(Attribute::new("class", class_name))
    }

    fn id(self, id: impl Into<String>) -> Node {
        self.into().add_attribute(Attribute::new("id", id))
    }

    /// Sets inline CSS.
    fn style(self, css: impl Into<String>) -> Node {
        self.into().add_attribute(Attribute::new("style", css))
    }

    /// Adds a `data-*` attribute.
    fn data(self, name: &str, value: impl Into<String>) -> Node {
        self.into()
            .add_attribute(Attribute::new(format!("data-{name}"), value))
    }

    fn accessibility_label(self, label: impl Into<String>) -> Node {
        self.into().add_attribute(Attribute::new("aria-label", label))
    }

    /// Sets the target of every link inside this content. `None` clears a
    /// target set further up.
    fn link_target(self, target: impl Into<Option<AnchorTarget>>) -> Node {
        self.into()
            .add_environment_override(&environment::link_target(), target.into())
    }

    /// Sets the relationship of every link inside this content. `None`
    /// clears a relationship set further up.
    fn link_relationship(self, relationship: impl Into<Option<AnchorRelationship>>) -> Node {
        self.into()
            .add_environment_override(&environment::link_relationship(), relationship.into())
    }

    /// Sets the style of every list inside this content.
    fn list_style(self, style: ListStyle) -> Node {
        self.into()
            .add_environment_override(&environment::list_style(), style)
    }

    /// Enables or disables autocomplete for every input inside this content.
    fn auto_complete(self, enabled: bool) -> Node {
        self.into()
            .add_environment_override(&environment::is_auto_complete_enabled(), Some(enabled))
    }

    /// Sets an arbitrary environment value for this content.
    fn environment_value<T: 'static>(self, key: &EnvironmentKey<T>, value: T) -> Node {
        self.into().add_environment_override(key, value)
    }
}

impl<T: Into<Node>> HtmlModifiers for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{div, p};
    use quill_core::{Component, Environment, Renderable};

    #[test]
    fn test_appending_classes() {
        let html = p("Hello").class("one").class("two").class("three").render();
        assert_eq!(html, r#"<p class="one two three">Hello</p>"#);
    }

    #[test]
    fn test_not_appending_empty_classes() {
        let html = p("Hello")
            .class("")
            .class("one")
            .class("")
            .class("two")
            .render();
        assert_eq!(html, r#"<p class="one two">Hello</p>"#);
    }

    #[test]
    fn test_replacing_class() {
        let html = p("Hello")
            .class("one")
            .class("two")
            .replacing_class("three")
            .render();
        assert_eq!(html, r#"<p class="three">Hello</p>"#);
    }

    #[test]
    fn test_adding_class_to_multiple_nodes() {
        let html = Node::group([div(()), div(())]).class("hello").render();
        assert_eq!(html, r#"<div class="hello"></div><div class="hello"></div>"#);
    }

    #[test]
    fn test_accessibility_data_and_style() {
        assert_eq!(
            p("Text").accessibility_label("Label").render(),
            r#"<p aria-label="Label">Text</p>"#
        );
        assert_eq!(
            p("Text").data("test", "value").render(),
            r#"<p data-test="value">Text</p>"#
        );
        assert_eq!(
            p("Text").style("color: #000;").render(),
            r#"<p style="color: #000;">Text</p>"#
        );
    }

    #[test]
    fn test_custom_environment_value() {
        const KEY: EnvironmentKey<Option<&'static str>> = EnvironmentKey::new("test.key", None);

        #[derive(Debug)]
        struct Probe;

        impl Component for Probe {
            fn body(&self, environment: &Environment) -> Node {
                p(environment.get(&KEY).unwrap_or("No value"))
            }
        }

        assert_eq!(
            Node::component(Probe)
                .environment_value(&KEY, Some("Value"))
                .render(),
            "<p>Value</p>"
        );
        assert_eq!(Node::component(Probe).render(), "<p>No value</p>");
    }
}
