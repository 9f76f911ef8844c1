//! Quill Core: node model and rendering engine
//!
//! This crate provides the foundational types for building and serializing
//! markup documents (HTML, XML and similar formats). It includes:
//!
//! - **Nodes**: the immutable document tree ([`Node`], [`Element`], [`Attribute`])
//! - **Components**: reusable units with deferred modifiers ([`component`] module)
//! - **Environment**: contextual values inherited down the tree ([`environment`] module)
//! - **Rendering**: attribute merging and indentation-aware output ([`renderer`] module)
//! - **Escaping**: entity-aware text escaping ([`escape`] module)

pub mod attribute;
pub mod component;
pub mod element;
pub mod environment;
pub mod escape;
pub mod indentation;
pub mod node;
pub mod renderer;

pub use attribute::Attribute;
pub use component::{Component, ElementWrapper};
pub use element::{ClosingMode, Element};
pub use environment::{Environment, EnvironmentKey};
pub use indentation::{Indentation, IndentationError, IndentationKind};
pub use node::Node;
pub use renderer::{Renderable, render};
