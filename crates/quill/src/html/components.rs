//! Ready-made HTML components.
//!
//! These components read their defaults from the environment (see
//! [`environment`](super::environment)), so modifiers such as
//! [`HtmlModifiers::link_target`](super::HtmlModifiers::link_target) applied
//! to an ancestor change how they render.

use quill_core::{Component, ElementWrapper, Environment, IndentationKind, Node, Renderable};

use super::{
    attributes::{self, InputType},
    elements, environment,
};

/// Implements `From<$component> for Node` by placing the component, and
/// `Renderable` by rendering that node.
macro_rules! component_node {
    ($($component:ty),* $(,)?) => {
        $(
            impl From<$component> for Node {
                fn from(component: $component) -> Self {
                    Node::component(component)
                }
            }

            impl Renderable for $component {
                fn render_with(&self, indentation: Option<IndentationKind>) -> String {
                    Node::component(self.clone()).render_with(indentation)
                }
            }
        )*
    };
}

component_node!(Link, List, Table, TableRow, Image, Input);

// =============================================================================
// Link
// =============================================================================

/// An `<a>` element whose `rel` and `target` come from the environment.
///
/// # Examples
///
/// ```
/// use quill::html::{AnchorTarget, HtmlModifiers, Link};
/// use quill::Renderable;
///
/// let html = Link::new("Home", "/").link_target(AnchorTarget::Blank).render();
/// assert_eq!(html, r#"<a href="/" target="_blank">Home</a>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Link {
    url: String,
    label: Node,
}

impl Link {
    /// Creates a link with a text label.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_label(url, Node::text(label))
    }

    /// Creates a link with arbitrary content as its label.
    pub fn with_label(url: impl Into<String>, label: impl Into<Node>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Component for Link {
    fn body(&self, environment: &Environment) -> Node {
        let relationship = environment.get(&environment::link_relationship());
        let target = environment.get(&environment::link_target());

        Node::element(
            "a",
            [
                attributes::href(self.url.as_str()),
                Node::unwrap_or_empty(relationship, attributes::rel),
                Node::unwrap_or_empty(target, attributes::target),
                self.label.clone(),
            ],
        )
    }
}

// =============================================================================
// List
// =============================================================================

/// A list whose element and item wrapping follow the environment's
/// [`ListStyle`](super::ListStyle).
///
/// Items that are not `<li>` elements are wrapped in one; items that are
/// already `<li>` are used as they are.
#[derive(Debug, Clone)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a list with one item per element of `items`, built by `content`.
    pub fn for_each<I: IntoIterator>(items: I, content: impl FnMut(I::Item) -> Node) -> Self {
        Self {
            items: items.into_iter().map(content).collect(),
        }
    }
}

impl Component for List {
    fn body(&self, environment: &Environment) -> Node {
        let style = environment.get(&environment::list_style());
        Node::element(
            style.element_name(),
            self.items.iter().map(|item| style.wrap_item(item.clone())),
        )
    }
}

// =============================================================================
// Table
// =============================================================================

/// A `<table>` with optional caption, header and footer.
///
/// Every row that is not a `<tr>` is turned into a [`TableRow`]; as soon as a
/// caption, header or footer is present the rows are grouped in `<tbody>`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    caption: Option<Node>,
    header: Option<TableRow>,
    footer: Option<TableRow>,
    rows: Vec<Node>,
}

impl Table {
    pub fn new<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<Node>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the header row; its cells render as `<th>`.
    pub fn with_header(mut self, header: TableRow) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer(mut self, footer: TableRow) -> Self {
        self.footer = Some(footer);
        self
    }

    fn is_grouped(&self) -> bool {
        self.caption.is_some() || self.header.is_some() || self.footer.is_some()
    }
}

impl Component for Table {
    fn body(&self, _environment: &Environment) -> Node {
        let rows = Node::for_each(&self.rows, |row| {
            row.clone().wrapped(ElementWrapper::with_body("tr", |inner| {
                Node::component(TableRow::new([inner]))
            }))
        });
        let rows = if self.is_grouped() {
            Node::element("tbody", [rows])
        } else {
            rows
        };

        Node::element(
            "table",
            [
                Node::unwrap_or_empty(self.caption.clone(), |caption| {
                    Node::element("caption", [caption])
                }),
                Node::unwrap_or_empty(self.header.clone(), |header| {
                    Node::element("thead", [Node::component(header.as_header())])
                }),
                rows,
                Node::unwrap_or_empty(self.footer.clone(), |footer| {
                    Node::element("tfoot", [Node::component(footer)])
                }),
            ],
        )
    }
}

/// A `<tr>` wrapping each cell in `<td>` (or `<th>` for header rows).
///
/// Cells that already are `<td>`/`<th>` elements are kept as they are.
#[derive(Debug, Clone)]
pub struct TableRow {
    cells: Vec<Node>,
    is_header: bool,
}

impl TableRow {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            is_header: false,
        }
    }

    fn as_header(mut self) -> Self {
        self.is_header = true;
        self
    }
}

impl Component for TableRow {
    fn body(&self, _environment: &Environment) -> Node {
        let cell_name = if self.is_header { "th" } else { "td" };
        Node::element(
            "tr",
            self.cells
                .iter()
                .map(|cell| cell.clone().wrapped_in_element(cell_name)),
        )
    }
}

// =============================================================================
// Image
// =============================================================================

/// An `<img>` with an optional description.
#[derive(Debug, Clone)]
pub struct Image {
    url: String,
    description: String,
}

impl Image {
    /// Creates an image without alternative text.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_description(url, "")
    }

    pub fn with_description(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

impl Component for Image {
    fn body(&self, _environment: &Environment) -> Node {
        elements::img([
            attributes::src(self.url.as_str()),
            attributes::alt(self.description.as_str()),
        ])
    }
}

// =============================================================================
// Input
// =============================================================================

/// An `<input>` field. Autocomplete follows the environment.
#[derive(Debug, Clone)]
pub struct Input {
    input_type: InputType,
    name: Option<String>,
    value: Option<String>,
    is_required: bool,
    placeholder: Option<String>,
    is_auto_focused: bool,
}

impl Input {
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            name: None,
            value: None,
            is_required: false,
            placeholder: None,
            is_auto_focused: false,
        }
    }

    /// A required-or-not text field.
    pub fn text_field(name: impl Into<String>, is_required: bool) -> Self {
        Self::new(InputType::Text)
            .with_name(name)
            .with_required(is_required)
    }

    /// A submit button labelled `title`.
    pub fn submit(title: impl Into<String>) -> Self {
        Self::new(InputType::Submit).with_value(title)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn auto_focused(mut self) -> Self {
        self.is_auto_focused = true;
        self
    }
}

impl Component for Input {
    fn body(&self, environment: &Environment) -> Node {
        let auto_complete = environment.get(&environment::is_auto_complete_enabled());

        elements::input([
            attributes::input_type(self.input_type),
            Node::unwrap_or_empty(self.name.as_deref(), attributes::name),
            Node::unwrap_or_empty(self.value.as_deref(), attributes::value),
            attributes::required(self.is_required),
            Node::unwrap_or_empty(self.placeholder.as_deref(), attributes::placeholder),
            attributes::autofocus(self.is_auto_focused),
            Node::unwrap_or_empty(auto_complete, attributes::autocomplete),
        ])
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::html::{li, span};

    // ===================
    // Strategies
    // ===================

    /// An item's text and whether it is already an `<li>`.
    fn item_strategy() -> impl Strategy<Value = (String, bool)> {
        ("[a-z]{1,6}", any::<bool>())
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every item ends up in exactly one `<li>`, whatever its shape.
    fn check_list_items_wrapped_once(items: Vec<(String, bool)>) -> Result<(), TestCaseError> {
        let nodes = items.iter().map(|(text, is_item)| {
            if *is_item {
                li(text.as_str())
            } else {
                Node::text(text.as_str())
            }
        });
        let rendered = List::new(nodes).render();

        let expected: String = items
            .iter()
            .map(|(text, _)| format!("<li>{text}</li>"))
            .collect();
        prop_assert_eq!(rendered, format!("<ul>{expected}</ul>"));
        Ok(())
    }

    /// Cells that are not `<td>` get exactly one `<td>` around them.
    fn check_row_cells_wrapped_once(cells: Vec<String>) -> Result<(), TestCaseError> {
        let rendered = TableRow::new(cells.iter().map(|cell| span(cell.as_str()))).render();

        let expected: String = cells
            .iter()
            .map(|cell| format!("<td><span>{cell}</span></td>"))
            .collect();
        prop_assert_eq!(rendered, format!("<tr>{expected}</tr>"));
        Ok(())
    }

    proptest! {
        #[test]
        fn list_items_wrapped_once(items in prop::collection::vec(item_strategy(), 0..8)) {
            check_list_items_wrapped_once(items)?;
        }

        #[test]
        fn row_cells_wrapped_once(cells in prop::collection::vec("[a-z]{1,6}", 0..6)) {
            check_row_cells_wrapped_once(cells)?;
        }
    }
}
