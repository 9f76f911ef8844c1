//! Components and deferred modifiers.
//!
//! A [`Component`] is a reusable unit that produces a [`Node`] from the
//! current [`Environment`]. Components are placed in the tree with
//! [`Node::component`] and reduced while rendering.
//!
//! Modifiers applied to a node before it is rendered are *deferred*: they
//! are stored on the node and flushed onto the concrete element(s) the node
//! eventually produces.
//!
//! - [`Node::add_attribute`] defers an attribute. Applied to a group, it fans
//!   out to every member.
//! - [`Node::add_environment_override`] sets an environment value for the
//!   subtree.
//! - [`Node::wrapped`] / [`Node::wrapped_in_element`] target a named element:
//!   output that is already such an element receives the pending attributes
//!   directly, anything else is wrapped in a synthesized element.
//!
//! ```
//! use quill_core::{Attribute, Environment, Node, Renderable, component::Component};
//!
//! #[derive(Debug)]
//! struct Greeting;
//!
//! impl Component for Greeting {
//!     fn body(&self, _environment: &Environment) -> Node {
//!         Node::element_with_text("p", "Hello")
//!     }
//! }
//!
//! let html = Node::component(Greeting)
//!     .add_attribute(Attribute::new("class", "greeting"))
//!     .render();
//! assert_eq!(html, r#"<p class="greeting">Hello</p>"#);
//! ```

use std::{fmt, rc::Rc};

use crate::{
    attribute::Attribute,
    environment::{Environment, EnvironmentKey, EnvironmentOverride},
    node::Node,
};

// =============================================================================
// Component trait
// =============================================================================

/// A user-defined unit that reduces to a [`Node`].
///
/// The environment in effect where the component is placed is passed to
/// [`Component::body`]; environment values are read directly from it.
pub trait Component: fmt::Debug {
    /// Produces the content of this component.
    fn body(&self, environment: &Environment) -> Node;

    /// A name used when logging the reduction of this component.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// =============================================================================
// Component node
// =============================================================================

/// The component variant of [`Node`].
///
/// This is a cheaply cloneable handle; the wrapped values are shared.
#[derive(Debug, Clone)]
pub struct ComponentNode(pub(crate) ComponentKind);

#[derive(Debug, Clone)]
pub(crate) enum ComponentKind {
    Custom(Rc<dyn Component>),
    Modified(Rc<Modified>),
    Wrapped(Rc<Wrapped>),
}

/// A subtree with deferred attributes and environment overrides.
#[derive(Debug, Clone)]
pub(crate) struct Modified {
    pub(crate) base: Node,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) overrides: Vec<EnvironmentOverride>,
}

/// A subtree whose output is targeted at a named element.
#[derive(Debug, Clone)]
pub(crate) struct Wrapped {
    pub(crate) content: Node,
    pub(crate) wrapper: ElementWrapper,
}

impl ComponentNode {
    pub(crate) fn custom<C: Component + 'static>(component: C) -> Self {
        Self(ComponentKind::Custom(Rc::new(component)))
    }

    pub(crate) fn modified(modified: Modified) -> Self {
        Self(ComponentKind::Modified(Rc::new(modified)))
    }

    fn wrapped(content: Node, wrapper: ElementWrapper) -> Self {
        Self(ComponentKind::Wrapped(Rc::new(Wrapped { content, wrapper })))
    }

    /// Returns the user component, if this handle places one.
    pub fn as_component(&self) -> Option<&dyn Component> {
        match &self.0 {
            ComponentKind::Custom(component) => Some(component.as_ref()),
            _ => None,
        }
    }

    /// Returns the attributes deferred on this handle.
    pub fn deferred_attributes(&self) -> &[Attribute] {
        match &self.0 {
            ComponentKind::Modified(modified) => &modified.attributes,
            _ => &[],
        }
    }
}

// =============================================================================
// Element wrapper
// =============================================================================

/// Describes the element a wrapped subtree should end up in.
///
/// `target` is the element name that satisfies the wrapper. When rendered
/// output is not such an element, `synthesize` builds one around it. The
/// pending attributes land on the matching or synthesized element.
#[derive(Clone)]
pub struct ElementWrapper {
    target: String,
    pending_attributes: Vec<Attribute>,
    synthesize: Rc<dyn Fn(Node) -> Node>,
}

impl ElementWrapper {
    /// Creates a wrapper that synthesizes `<target>inner</target>`.
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let name = target.clone();
        Self::with_body(target, move |inner| Node::element(name.clone(), [inner]))
    }

    /// Creates a wrapper with a custom synthesizer.
    ///
    /// The synthesized node should produce an element named `target`.
    pub fn with_body(target: impl Into<String>, synthesize: impl Fn(Node) -> Node + 'static) -> Self {
        Self {
            target: target.into(),
            pending_attributes: Vec::new(),
            synthesize: Rc::new(synthesize),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn pending_attributes(&self) -> &[Attribute] {
        &self.pending_attributes
    }

    /// Builds the target element around `inner`.
    pub fn synthesize(&self, inner: Node) -> Node {
        (self.synthesize)(inner)
    }

    /// Returns a copy with `attributes` appended to the pending attributes.
    pub(crate) fn with_pending(&self, attributes: &[Attribute]) -> Self {
        let mut wrapper = self.clone();
        wrapper.pending_attributes.extend_from_slice(attributes);
        wrapper
    }
}

impl fmt::Debug for ElementWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementWrapper")
            .field("target", &self.target)
            .field("pending_attributes", &self.pending_attributes)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Modifiers
// =============================================================================

impl Node {
    /// Defers `attribute` onto the element(s) this node produces.
    ///
    /// Groups apply the attribute to each member independently, repeated
    /// calls accumulate, and [`Node::Empty`] stays empty.
    pub fn add_attribute(self, attribute: Attribute) -> Node {
        match self {
            Node::Empty => Node::Empty,
            Node::Group(members) => Node::Group(
                members
                    .into_iter()
                    .map(|member| member.add_attribute(attribute.clone()))
                    .collect(),
            ),
            other => other.modify(|modified| modified.attributes.push(attribute)),
        }
    }

    /// Sets `key` to `value` for this node and all of its descendants.
    pub fn add_environment_override<T: 'static>(self, key: &EnvironmentKey<T>, value: T) -> Node {
        let override_value = EnvironmentOverride::new(key, value);
        match self {
            Node::Empty => Node::Empty,
            other => other.modify(|modified| modified.overrides.push(override_value)),
        }
    }

    /// Targets this node's output at elements named `name`.
    pub fn wrapped_in_element(self, name: impl Into<String>) -> Node {
        self.wrapped(ElementWrapper::new(name))
    }

    /// Targets this node's output at `wrapper`'s element.
    ///
    /// Groups wrap each member independently; [`Node::Empty`] is never
    /// wrapped.
    pub fn wrapped(self, wrapper: ElementWrapper) -> Node {
        match self {
            Node::Empty => Node::Empty,
            Node::Group(members) => Node::Group(
                members
                    .into_iter()
                    .map(|member| member.wrapped(wrapper.clone()))
                    .collect(),
            ),
            other => Node::Component(ComponentNode::wrapped(other, wrapper)),
        }
    }

    /// Applies `change` to this node's modifier record, creating one if needed.
    fn modify(self, change: impl FnOnce(&mut Modified)) -> Node {
        let mut modified = match self {
            Node::Component(ComponentNode(ComponentKind::Modified(modified))) => {
                Rc::unwrap_or_clone(modified)
            }
            base => Modified {
                base,
                attributes: Vec::new(),
                overrides: Vec::new(),
            },
        };
        change(&mut modified);
        Node::Component(ComponentNode::modified(modified))
    }
}
