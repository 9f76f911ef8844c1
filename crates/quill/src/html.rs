//! HTML vocabulary built on the core node tree.
//!
//! - [`elements`] and [`attributes`] provide one builder per tag and
//!   attribute, all re-exported here.
//! - [`HtmlModifiers`] adds `.class()`, `.id()` and friends to anything
//!   convertible into a [`Node`](quill_core::Node).
//! - Components such as [`Link`], [`List`] and [`Table`] read their defaults
//!   from the [`environment`].
//!
//! ```
//! use quill::html::{HtmlModifiers, List, ListStyle, div, h1};
//! use quill::Renderable;
//!
//! let page = div([h1("Menu"), List::new(["Tea", "Cake"]).into()])
//!     .list_style(ListStyle::ordered())
//!     .class("menu");
//! assert_eq!(
//!     page.render(),
//!     r#"<div class="menu"><h1>Menu</h1><ol><li>Tea</li><li>Cake</li></ol></div>"#
//! );
//! ```

pub mod attributes;
mod components;
pub mod elements;
pub mod environment;
mod modifiers;

pub use attributes::*;
pub use components::{Image, Input, Link, List, Table, TableRow};
pub use elements::*;
pub use environment::{AnchorRelationship, AnchorTarget, ListStyle};
pub use modifiers::HtmlModifiers;
