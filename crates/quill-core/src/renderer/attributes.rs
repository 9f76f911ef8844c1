//! Per-element attribute collection.

use indexmap::IndexMap;

use crate::attribute::Attribute;

/// Collects the attributes targeting one element and merges duplicates.
///
/// Attributes keep the position of the first occurrence of their name. For
/// a repeated name:
///
/// - a replacing attribute overwrites the stored value;
/// - an appending attribute with a non-empty value is joined to the stored
///   value with a space, or adopted when the stored value is empty;
/// - an appending attribute with an empty value changes nothing.
///
/// Attributes with an empty name are dropped.
///
/// # Examples
///
/// ```
/// use quill_core::{Attribute, renderer::AttributeBuffer};
///
/// let mut buffer = AttributeBuffer::new();
/// buffer.add(Attribute::new("class", "a").appending());
/// buffer.add(Attribute::new("id", "main"));
/// buffer.add(Attribute::new("class", "b").appending());
/// assert_eq!(buffer.render(), r#" class="a b" id="main""#);
/// ```
#[derive(Debug, Default, Clone)]
pub struct AttributeBuffer {
    attributes: IndexMap<String, Attribute>,
}

impl AttributeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `attribute` into the buffer.
    pub fn add(&mut self, attribute: Attribute) {
        if attribute.is_empty() {
            return;
        }

        if let Some(existing) = self.attributes.get_mut(attribute.name()) {
            if attribute.replace_existing() {
                existing.set_value(attribute.value().map(str::to_string));
            } else if let Some(incoming) = attribute.non_empty_value() {
                let merged = match existing.non_empty_value() {
                    Some(stored) => format!("{stored} {incoming}"),
                    None => incoming.to_string(),
                };
                existing.set_value(Some(merged));
            }
            return;
        }

        self.attributes
            .insert(attribute.name().to_string(), attribute);
    }

    /// Returns the attribute stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Renders the attribute list as it appears inside an opening tag.
    ///
    /// Every emitted attribute is preceded by a single space; attributes that
    /// render to nothing are skipped.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for attribute in self.attributes.values() {
            let text = attribute.render();
            if !text.is_empty() {
                rendered.push(' ');
                rendered.push_str(&text);
            }
        }
        rendered
    }
}

impl Extend<Attribute> for AttributeBuffer {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.add(attribute);
        }
    }
}
