//! Attribute values and their merge policy.
//!
//! An [`Attribute`] is a name with an optional value plus two flags that
//! control how it behaves when several attributes with the same name land on
//! one element:
//!
//! - `replace_existing` (default `true`): overwrite an earlier value, or
//!   append to it (space separated) when `false`.
//! - `ignore_if_empty` (default `true`): omit the attribute when its value is
//!   empty, or emit the bare name (`required`) when `false`.
//!
//! An attribute with an empty name is the canonical no-op and is never
//! emitted.

use std::fmt;

/// A named attribute with merge flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    value: Option<String>,
    replace_existing: bool,
    ignore_if_empty: bool,
}

impl Attribute {
    /// Creates an attribute with a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_core::Attribute;
    ///
    /// let href = Attribute::new("href", "/index.html");
    /// assert_eq!(href.render(), r#"href="/index.html""#);
    /// ```
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::optional(name, Some(value.into()))
    }

    /// Creates an attribute whose value may be absent.
    pub fn optional(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            replace_existing: true,
            ignore_if_empty: true,
        }
    }

    /// Creates a value-less attribute that renders as its bare name.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_core::Attribute;
    ///
    /// assert_eq!(Attribute::boolean("required").render(), "required");
    /// ```
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::optional(name, None).with_ignore_if_empty(false)
    }

    /// The no-op attribute. It never renders and never affects a merge.
    pub fn empty() -> Self {
        Self::optional(String::new(), None)
    }

    /// Maps an optional value into an attribute, or [`Attribute::empty`].
    pub fn unwrap_or_empty<T>(value: Option<T>, transform: impl FnOnce(T) -> Attribute) -> Self {
        value.map(transform).unwrap_or_else(Self::empty)
    }

    /// Sets whether this attribute overwrites an earlier one with the same name.
    pub fn with_replace_existing(mut self, replace_existing: bool) -> Self {
        self.replace_existing = replace_existing;
        self
    }

    /// Shorthand for `with_replace_existing(false)`.
    pub fn appending(self) -> Self {
        self.with_replace_existing(false)
    }

    pub fn with_ignore_if_empty(mut self, ignore_if_empty: bool) -> Self {
        self.ignore_if_empty = ignore_if_empty;
        self
    }

    /// Appends `additional` to the current value using `separator`.
    ///
    /// Empty values on either side are skipped so no stray separator appears.
    pub fn append_value(mut self, additional: &str, separator: char) -> Self {
        if additional.is_empty() {
            return self;
        }

        self.value = Some(match self.non_empty_value() {
            Some(existing) => format!("{existing}{separator}{additional}"),
            None => additional.to_string(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the value unless it is absent or empty.
    pub fn non_empty_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }

    pub fn replace_existing(&self) -> bool {
        self.replace_existing
    }

    pub fn ignore_if_empty(&self) -> bool {
        self.ignore_if_empty
    }

    /// Returns `true` for the no-op attribute.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub(crate) fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Renders the standalone form of this attribute.
    ///
    /// Returns `name="value"`, the bare name for an empty boolean-style
    /// attribute, or an empty string when nothing should be emitted. Values
    /// are written as-is, without escaping.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        match self.non_empty_value() {
            Some(value) => format!("{}=\"{}\"", self.name, value),
            None if self.ignore_if_empty => String::new(),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
