//! Contextual values propagated down the node tree.
//!
//! An [`EnvironmentKey`] declares an identifier and a default value. While
//! rendering, the current [`Environment`] answers lookups for a key with the
//! nearest override applied by an ancestor, or the key's default.
//!
//! Environments are immutable: [`Environment::with_override`] returns a new
//! environment and leaves the receiver untouched, so overrides applied to one
//! subtree never leak into its siblings.
//!
//! ```
//! use quill_core::{Environment, EnvironmentKey};
//!
//! static GREETING: EnvironmentKey<&'static str> = EnvironmentKey::new("greeting", "hello");
//!
//! let root = Environment::new();
//! let child = root.with_override(&GREETING, "bonjour");
//! assert_eq!(root.get(&GREETING), "hello");
//! assert_eq!(child.get(&GREETING), "bonjour");
//! ```

use std::{any::Any, collections::HashMap, fmt, rc::Rc};

/// A typed key into the [`Environment`] with a static default.
#[derive(Debug, Clone)]
pub struct EnvironmentKey<T> {
    identifier: &'static str,
    default_value: T,
}

impl<T> EnvironmentKey<T> {
    /// Declares a key.
    ///
    /// Two keys with the same identifier address the same slot, so the
    /// identifier should be unique across the vocabulary using it.
    pub const fn new(identifier: &'static str, default_value: T) -> Self {
        Self {
            identifier,
            default_value,
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn default_value(&self) -> &T {
        &self.default_value
    }
}

/// An immutable, copy-on-write map of environment values.
#[derive(Clone, Default)]
pub struct Environment {
    values: Rc<HashMap<&'static str, Rc<dyn Any>>>,
}

impl Environment {
    /// Creates an environment in which every key yields its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `key`, or the key's default.
    ///
    /// A stored value of a different type than `T` is treated as absent.
    pub fn get<T: Clone + 'static>(&self, key: &EnvironmentKey<T>) -> T {
        self.values
            .get(key.identifier)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| key.default_value.clone())
    }

    /// Returns `true` when an ancestor has overridden `key`.
    pub fn contains<T>(&self, key: &EnvironmentKey<T>) -> bool {
        self.values.contains_key(key.identifier)
    }

    /// Returns a copy of this environment with `key` set to `value`.
    pub fn with_override<T: 'static>(&self, key: &EnvironmentKey<T>, value: T) -> Self {
        self.with_override_value(&EnvironmentOverride::new(key, value))
    }

    /// Returns a copy of this environment with a stored override applied.
    pub fn with_override_value(&self, override_value: &EnvironmentOverride) -> Self {
        let mut environment = self.clone();
        Rc::make_mut(&mut environment.values)
            .insert(override_value.identifier, Rc::clone(&override_value.value));
        environment
    }

    /// Returns the number of overridden keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Environment").field("keys", &keys).finish()
    }
}

/// A deferred environment assignment, applied by the renderer when the
/// modified subtree is reached.
#[derive(Clone)]
pub struct EnvironmentOverride {
    identifier: &'static str,
    value: Rc<dyn Any>,
}

impl EnvironmentOverride {
    pub fn new<T: 'static>(key: &EnvironmentKey<T>, value: T) -> Self {
        Self {
            identifier: key.identifier,
            value: Rc::new(value),
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }
}

impl fmt::Debug for EnvironmentOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentOverride")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
