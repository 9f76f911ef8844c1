//! Serialization of node trees.
//!
//! The [`Renderer`] walks a [`Node`] tree once, depth first, and assembles
//! the output string. Each open element gets its own renderer, which owns
//! the element's [`AttributeBuffer`] and body text. Alongside it the
//! renderer tracks a [`Scope`]: the current environment, the attributes
//! deferred by modifiers, and the active element wrapper. Scopes are
//! swapped in for a modified or wrapped subtree and restored afterwards, so
//! nothing set for one subtree is visible to its siblings.
//!
//! Wrappers nest. An element produced or accepted by the innermost wrapper
//! is checked against the enclosing wrapper next, so every wrapper's target
//! ends up around the content.
//!
//! # Indentation
//!
//! Without an indentation policy no whitespace is added. With one:
//!
//! - every element at depth `d` is prefixed by `d` indentation units;
//! - a newline precedes every child element, never plain text;
//! - a newline and the element's own indentation precede its closing tag
//!   only when it contains child elements;
//! - top-level elements are separated by newlines.
//!
//! ```
//! use quill_core::{IndentationKind, Node, Renderable};
//!
//! let node = Node::element("one", [
//!     Node::element_with_text("two", "text"),
//! ]);
//! assert_eq!(
//!     node.render_indented(IndentationKind::Spaces(2)),
//!     "<one>\n  <two>text</two>\n</one>"
//! );
//! ```

mod attributes;

pub use attributes::AttributeBuffer;

use std::mem;

use log::trace;

use crate::{
    attribute::Attribute,
    component::{ComponentKind, ComponentNode, ElementWrapper, Modified},
    element::{ClosingMode, Element},
    environment::Environment,
    escape::escape,
    indentation::{Indentation, IndentationKind},
    node::Node,
};

// =============================================================================
// Public API
// =============================================================================

/// Renders `node` with an optional indentation policy.
///
/// # Examples
///
/// ```
/// use quill_core::{Attribute, Node, render};
///
/// let node = Node::element("div", [
///     Node::from(Attribute::new("class", "a").appending()),
///     Node::from(Attribute::new("class", "b").appending()),
///     Node::text("hi"),
/// ]);
/// assert_eq!(render(&node, None), r#"<div class="a b">hi</div>"#);
/// ```
pub fn render(node: &Node, indentation: Option<IndentationKind>) -> String {
    let mut renderer = Renderer::new(indentation);
    renderer.render_node(node);
    renderer.into_result()
}

/// Values that can be serialized to markup.
pub trait Renderable {
    /// Renders with an optional indentation policy.
    fn render_with(&self, indentation: Option<IndentationKind>) -> String;

    /// Renders without any added whitespace.
    fn render(&self) -> String {
        self.render_with(None)
    }

    /// Renders with one indentation unit of `kind` per nesting level.
    fn render_indented(&self, kind: IndentationKind) -> String {
        self.render_with(Some(kind))
    }
}

impl Renderable for Node {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        render(self, indentation)
    }
}

impl Renderable for Element {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        let mut renderer = Renderer::new(indentation);
        renderer.render_element(self);
        renderer.into_result()
    }
}

impl Renderable for Attribute {
    fn render_with(&self, _indentation: Option<IndentationKind>) -> String {
        Attribute::render(self)
    }
}

impl Renderable for [Node] {
    fn render_with(&self, indentation: Option<IndentationKind>) -> String {
        let mut renderer = Renderer::new(indentation);
        for node in self {
            renderer.render_node(node);
        }
        renderer.into_result()
    }
}

// =============================================================================
// Renderer state
// =============================================================================

/// State inherited by a subtree.
#[derive(Debug, Clone, Default)]
struct Scope {
    environment: Environment,
    deferred_attributes: Vec<Attribute>,
    element_wrapper: Option<ElementWrapper>,
    /// Wrappers shadowed by `element_wrapper`, outermost first.
    enclosing_wrappers: Vec<ElementWrapper>,
}

impl Scope {
    /// A scope carrying only `environment`, as seen by an element's children.
    fn with_environment(environment: Environment) -> Self {
        Self {
            environment,
            deferred_attributes: Vec::new(),
            element_wrapper: None,
            enclosing_wrappers: Vec::new(),
        }
    }

    /// The scope for an element the active wrapper is done with: the
    /// nearest enclosing wrapper becomes active.
    fn unwrapped(&self, deferred_attributes: Vec<Attribute>) -> Self {
        let mut enclosing_wrappers = self.enclosing_wrappers.clone();
        let element_wrapper = enclosing_wrappers.pop();
        Self {
            environment: self.environment.clone(),
            deferred_attributes,
            element_wrapper,
            enclosing_wrappers,
        }
    }
}

/// Where rendered chunks are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// The body of an open element.
    Element,
    /// A sequence of siblings with no enclosing tag (top level or a
    /// transparent container).
    Fragment,
}

/// Tree walker producing markup text.
#[derive(Debug)]
pub struct Renderer {
    indentation: Option<Indentation>,
    scope: Scope,
    attributes: Option<AttributeBuffer>,
    layout: Layout,
    result: String,
    contains_element: bool,
}

impl Renderer {
    /// Creates a top-level renderer.
    pub fn new(indentation: Option<IndentationKind>) -> Self {
        Self {
            indentation: indentation.map(Indentation::new),
            scope: Scope::default(),
            attributes: None,
            layout: Layout::Fragment,
            result: String::new(),
            contains_element: false,
        }
    }

    /// Creates a renderer with `environment` as the initial environment.
    pub fn with_environment(indentation: Option<IndentationKind>, environment: Environment) -> Self {
        let mut renderer = Self::new(indentation);
        renderer.scope.environment = environment;
        renderer
    }

    fn nested(indentation: Option<Indentation>, environment: Environment, layout: Layout) -> Self {
        Self {
            indentation,
            scope: Scope::with_environment(environment),
            attributes: Some(AttributeBuffer::new()),
            layout,
            result: String::new(),
            contains_element: false,
        }
    }

    /// Consumes the renderer and returns the output.
    pub fn into_result(self) -> String {
        self.result
    }

    /// Renders `node` at the current position.
    pub fn render_node(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.render_element(element),
            Node::Attribute(attribute) => self.render_attribute(attribute),
            Node::Text(text) => self.render_raw(&escape(text)),
            Node::Raw(text) => self.render_raw(text),
            Node::Group(members) => {
                for member in members {
                    self.render_node(member);
                }
            }
            Node::Empty => {}
            Node::Component(component) => self.render_component(component),
        }
    }

    // -------------------------------------------------------------------------
    // Node kinds
    // -------------------------------------------------------------------------

    fn render_attribute(&mut self, attribute: &Attribute) {
        match self.attributes.as_mut() {
            Some(buffer) => buffer.add(attribute.clone()),
            None => self.result.push_str(&attribute.render()),
        }
    }

    fn render_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if let Some(wrapper) = self.scope.element_wrapper.clone() {
            trace!(element = wrapper.target(); "Wrapping text in synthesized element");
            let synthesized = wrapper.synthesize(Node::raw(text));
            self.render_synthesized(&wrapper, &synthesized);
            return;
        }

        self.push_chunk(text, true);
    }

    fn render_element(&mut self, element: &Element) {
        let mut deferred = self.scope.deferred_attributes.clone();

        if let Some(wrapper) = self.scope.element_wrapper.clone() {
            if element.name() != wrapper.target() {
                trace!(
                    element = element.name(),
                    wrapper = wrapper.target();
                    "Synthesizing wrapper element"
                );
                let inner = if deferred.is_empty() {
                    Node::Element(element.clone())
                } else {
                    Node::Component(ComponentNode::modified(Modified {
                        base: Node::Element(element.clone()),
                        attributes: deferred,
                        overrides: Vec::new(),
                    }))
                };
                let synthesized = wrapper.synthesize(inner);
                self.render_synthesized(&wrapper, &synthesized);
                return;
            }

            deferred.extend_from_slice(wrapper.pending_attributes());

            if !self.scope.enclosing_wrappers.is_empty() {
                let scope = self.scope.unwrapped(deferred);
                self.scoped(scope, |renderer| renderer.render_element(element));
                return;
            }
        }

        if element.is_container() {
            self.render_container(element);
            return;
        }

        let mut child = Self::nested(
            self.indentation.map(|indentation| indentation.indented()),
            self.scope.environment.clone(),
            Layout::Element,
        );
        for node in element.children() {
            child.render_node(node);
        }

        let mut attributes = child.attributes.take().unwrap_or_default();
        attributes.extend(deferred);

        let tag = self.close_element(element, &attributes, &child.result, child.contains_element);
        self.push_chunk(&tag, false);
    }

    /// Renders the children of a nameless element in place.
    fn render_container(&mut self, element: &Element) {
        let mut fragment = Self::nested(
            self.indentation,
            self.scope.environment.clone(),
            Layout::Fragment,
        );
        for node in element.children() {
            fragment.render_node(node);
        }

        let plain = !fragment.contains_element;
        self.push_chunk(&fragment.result, plain);
    }

    fn render_component(&mut self, component: &ComponentNode) {
        match &component.0 {
            ComponentKind::Custom(custom) => {
                trace!(component = custom.name(); "Reducing component");
                let body = custom.body(&self.scope.environment);
                self.render_node(&body);
            }
            ComponentKind::Modified(modified) => {
                let environment = modified
                    .overrides
                    .iter()
                    .fold(self.scope.environment.clone(), |environment, value| {
                        environment.with_override_value(value)
                    });
                let mut deferred_attributes = modified.attributes.clone();
                deferred_attributes.extend_from_slice(&self.scope.deferred_attributes);

                let scope = Scope {
                    environment,
                    deferred_attributes,
                    element_wrapper: self.scope.element_wrapper.clone(),
                    enclosing_wrappers: self.scope.enclosing_wrappers.clone(),
                };
                self.scoped(scope, |renderer| renderer.render_node(&modified.base));
            }
            ComponentKind::Wrapped(wrapped) => {
                let wrapper = wrapped
                    .wrapper
                    .with_pending(&self.scope.deferred_attributes);
                trace!(
                    wrapper = wrapper.target(),
                    pending = wrapper.pending_attributes().len();
                    "Entering element wrapper"
                );

                let mut enclosing_wrappers = self.scope.enclosing_wrappers.clone();
                enclosing_wrappers.extend(self.scope.element_wrapper.clone());

                let scope = Scope {
                    environment: self.scope.environment.clone(),
                    deferred_attributes: Vec::new(),
                    element_wrapper: Some(wrapper),
                    enclosing_wrappers,
                };
                self.scoped(scope, |renderer| renderer.render_node(&wrapped.content));
            }
        }
    }

    /// Renders a node built by `wrapper` with the wrapper's pending
    /// attributes, under the enclosing wrapper if there is one.
    fn render_synthesized(&mut self, wrapper: &ElementWrapper, synthesized: &Node) {
        let scope = self.scope.unwrapped(wrapper.pending_attributes().to_vec());
        self.scoped(scope, |renderer| renderer.render_node(synthesized));
    }

    // -------------------------------------------------------------------------
    // Output assembly
    // -------------------------------------------------------------------------

    /// Runs `render` with `scope` in effect, restoring the previous scope.
    fn scoped(&mut self, scope: Scope, render: impl FnOnce(&mut Self)) {
        let saved = mem::replace(&mut self.scope, scope);
        render(self);
        self.scope = saved;
    }

    /// Appends a rendered chunk. `plain` chunks contain no element markup.
    fn push_chunk(&mut self, text: &str, plain: bool) {
        if text.is_empty() {
            return;
        }

        if !plain && self.indentation.is_some() {
            let separate = match self.layout {
                Layout::Element => true,
                Layout::Fragment => !self.result.is_empty(),
            };
            if separate {
                self.result.push('\n');
            }
        }

        self.result.push_str(text);
        if !plain {
            self.contains_element = true;
        }
    }

    /// Produces the complete markup for `element`.
    fn close_element(
        &self,
        element: &Element,
        attributes: &AttributeBuffer,
        body: &str,
        contains_children: bool,
    ) -> String {
        let whitespace = self
            .indentation
            .map(|indentation| indentation.to_string())
            .unwrap_or_default();
        let padding = element
            .padding_character()
            .map(String::from)
            .unwrap_or_default();

        let mut markup = format!(
            "{whitespace}<{padding}{}{}",
            element.name(),
            attributes.render()
        );

        match element.closing_mode() {
            ClosingMode::SelfClosing if !contains_children => {
                markup.push('/');
                markup.push_str(&padding);
                markup.push('>');
            }
            ClosingMode::NeverClosed => {
                markup.push_str(&padding);
                markup.push('>');
                markup.push_str(body);
            }
            ClosingMode::Standard | ClosingMode::SelfClosing => {
                markup.push_str(&padding);
                markup.push('>');
                markup.push_str(body);
                if self.indentation.is_some() && contains_children {
                    markup.push('\n');
                    markup.push_str(&whitespace);
                }
                markup.push_str("</");
                markup.push_str(element.name());
                markup.push('>');
            }
        }

        markup
    }
}
