//! Declarations and normalized call arguments.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::kind::AccessorKind;

/// Rendered form of a call-expression argument whose value only exists at runtime.
pub const COMPUTED_SENTINEL: &str = "<computed>";

/// A statically known literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Null => serializer.serialize_unit(),
        }
    }
}

/// One call argument after the key, reduced to what static analysis can know.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedArg {
    /// String, number, boolean or `null` literal.
    Literal(Scalar),
    /// Array literal; non-literal elements keep their placeholder text.
    Array(Vec<Scalar>),
    /// Bare identifier, rendered `${name}`.
    Placeholder(String),
    /// Nested call expression.
    Computed,
    /// Any other node shape, tagged with its syntax kind and name (if any).
    Unsupported { kind: String, name: Option<String> },
}

impl NormalizedArg {
    /// Placeholder for an identifier whose value is only known at runtime.
    #[must_use]
    pub fn placeholder(identifier: &str) -> Self {
        Self::Placeholder(format!("${{{identifier}}}"))
    }

    /// Render as a single documentation cell.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Array(items) => {
                let joined = items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{joined}]")
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for NormalizedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(scalar) => scalar.fmt(f),
            Self::Array(_) => f.write_str(&self.render()),
            Self::Placeholder(text) => f.write_str(text),
            Self::Computed => f.write_str(COMPUTED_SENTINEL),
            Self::Unsupported { kind, name: Some(name) } => write!(f, "<{kind}:{name}>"),
            Self::Unsupported { kind, name: None } => write!(f, "<{kind}>"),
        }
    }
}

impl Serialize for NormalizedArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(scalar) => scalar.serialize(serializer),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            other => serializer.collect_str(other),
        }
    }
}

/// Where a declaration was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SourceLocation {
    pub file: String,
    /// 1-based line of the call expression.
    pub line: u32,
}

/// One discovered environment-variable accessor call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// Variable name; may contain `${name}` placeholders.
    #[serde(skip)]
    pub key: String,
    pub kind: AccessorKind,
    /// Arguments after the key, in source order.
    pub args: Vec<NormalizedArg>,
    pub comment: Option<String>,
    pub location: SourceLocation,
}

impl Declaration {
    /// The declared default (or options list): the first argument after the key.
    #[must_use]
    pub fn default_value(&self) -> Option<&NormalizedArg> {
        self.args.first()
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.kind.is_required()
    }
}
