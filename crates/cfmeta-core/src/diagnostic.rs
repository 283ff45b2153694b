//! Position-tagged, non-fatal diagnostics.
//!
//! A diagnostic is carried as a message plus an optional 1-based source
//! position and always travels over the wire as its formatted string,
//! `"<message> (<line>,<column>)"`.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

/// A 1-based line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    /// Build from the zero-based coordinates reported by the parse tree.
    #[must_use]
    pub const fn from_zero_based(line: usize, column: usize) -> Self {
        Self {
            line: line + 1,
            column: column + 1,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// One problem found while extracting metadata for a single function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Diagnostic {
    pub message: String,
    pub position: Option<SourcePosition>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>, position: Option<SourcePosition>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    #[must_use]
    pub fn at(message: impl Into<String>, position: SourcePosition) -> Self {
        Self::new(message, Some(position))
    }

    /// Diagnostic not tied to any source location.
    #[must_use]
    pub fn unlocated(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} {position}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<Diagnostic> for String {
    fn from(diagnostic: Diagnostic) -> Self {
        diagnostic.to_string()
    }
}

impl From<String> for Diagnostic {
    fn from(text: String) -> Self {
        match split_position_suffix(&text) {
            Some((message, position)) => Self::at(message, position),
            None => Self::unlocated(text),
        }
    }
}

/// Split a trailing ` (line,col)` suffix off a formatted diagnostic.
fn split_position_suffix(text: &str) -> Option<(&str, SourcePosition)> {
    let body = text.strip_suffix(')')?;
    let open = body.rfind(" (")?;
    let (line, column) = body[open + 2..].split_once(',')?;
    let position = SourcePosition {
        line: line.parse().ok()?,
        column: column.parse().ok()?,
    };
    Some((&text[..open], position))
}

impl JsonSchema for Diagnostic {
    fn schema_name() -> Cow<'static, str> {
        "Diagnostic".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Diagnostic message, optionally suffixed with a 1-based (line,column)"
        })
    }
}
