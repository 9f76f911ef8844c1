//! Indentation policies for rendered documents.
//!
//! An [`IndentationKind`] describes one indentation unit (a number of tabs or
//! spaces). The renderer pairs it with a nesting level to form an
//! [`Indentation`], whose [`Display`](fmt::Display) output is the whitespace
//! prefix for an element at that level.
//!
//! # Persisted form
//!
//! A kind is stored as `{ kind = "spaces" | "tabs", count = N }`. Unknown kinds
//! fail to decode with [`IndentationError::UnknownKind`], and counts above
//! [`MAX_INDENTATION_COUNT`] with [`IndentationError::CountTooLarge`].
//!
//! ```
//! use quill_core::indentation::IndentationKind;
//!
//! let kind: IndentationKind = toml::from_str(r#"kind = "spaces"
//! count = 2"#).unwrap();
//! assert_eq!(kind, IndentationKind::Spaces(2));
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding a persisted indentation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndentationError {
    #[error("'{0}' is not an indentation kind, expected 'spaces' or 'tabs'")]
    UnknownKind(String),

    #[error("indentation count {0} is too large, the maximum is {max}", max = MAX_INDENTATION_COUNT)]
    CountTooLarge(usize),
}

/// Largest count accepted when decoding or parsing an indentation kind.
pub const MAX_INDENTATION_COUNT: usize = 32;

/// A single indentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIndentationKind", into = "RawIndentationKind")]
pub enum IndentationKind {
    /// `n` tab characters per level.
    Tabs(usize),
    /// `n` space characters per level.
    Spaces(usize),
}

impl IndentationKind {
    /// Returns the whitespace emitted for one level of this kind.
    pub fn unit(&self) -> String {
        match self {
            Self::Tabs(count) => "\t".repeat(*count),
            Self::Spaces(count) => " ".repeat(*count),
        }
    }

    /// Returns how many characters make up one unit.
    pub fn count(&self) -> usize {
        match self {
            Self::Tabs(count) | Self::Spaces(count) => *count,
        }
    }

    /// Rejects kinds whose count exceeds [`MAX_INDENTATION_COUNT`].
    fn checked(self) -> Result<Self, IndentationError> {
        let count = self.count();
        if count > MAX_INDENTATION_COUNT {
            return Err(IndentationError::CountTooLarge(count));
        }
        Ok(self)
    }
}

impl Default for IndentationKind {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Parses the command-line form of an indentation kind.
///
/// Accepted forms are `spaces`, `tabs`, `spaces:N` and `tabs:N`. A bare
/// `spaces` means four spaces, a bare `tabs` means one tab.
impl FromStr for IndentationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, count) = match s.split_once(':') {
            Some((kind, count)) => {
                let count = count
                    .trim()
                    .parse::<usize>()
                    .map_err(|err| format!("Invalid indentation count '{count}': {err}"))?;
                (kind.trim(), Some(count))
            }
            None => (s.trim(), None),
        };

        let kind = match kind {
            "spaces" => Self::Spaces(count.unwrap_or(4)),
            "tabs" => Self::Tabs(count.unwrap_or(1)),
            other => return Err(IndentationError::UnknownKind(other.to_string()).to_string()),
        };
        kind.checked().map_err(|err| err.to_string())
    }
}

/// Serialized shape of [`IndentationKind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawIndentationKind {
    kind: String,
    count: usize,
}

impl TryFrom<RawIndentationKind> for IndentationKind {
    type Error = IndentationError;

    fn try_from(raw: RawIndentationKind) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_str() {
            "spaces" => Self::Spaces(raw.count),
            "tabs" => Self::Tabs(raw.count),
            _ => return Err(IndentationError::UnknownKind(raw.kind)),
        };
        kind.checked()
    }
}

impl From<IndentationKind> for RawIndentationKind {
    fn from(kind: IndentationKind) -> Self {
        let (name, count) = match kind {
            IndentationKind::Tabs(count) => ("tabs", count),
            IndentationKind::Spaces(count) => ("spaces", count),
        };
        Self {
            kind: name.to_string(),
            count,
        }
    }
}

/// An indentation kind at a specific nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    kind: IndentationKind,
    level: usize,
}

impl Indentation {
    /// Creates an indentation at level zero.
    pub fn new(kind: IndentationKind) -> Self {
        Self { kind, level: 0 }
    }

    pub fn kind(&self) -> IndentationKind {
        self.kind
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the same indentation one level deeper.
    pub fn indented(&self) -> Self {
        Self {
            kind: self.kind,
            level: self.level + 1,
        }
    }
}

impl From<IndentationKind> for Indentation {
    fn from(kind: IndentationKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.kind.unit();
        for _ in 0..self.level {
            f.write_str(&unit)?;
        }
        Ok(())
    }
}
