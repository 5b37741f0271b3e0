//! Untyped storage values and the scan/value adapters for [`Path`].

use std::fmt;

use super::Path;
use crate::error::{Error, Result};

/// Shape of a value read from, or written to, an untyped storage column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("nil"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "{b:?}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Path {
    /// Read a path from an untyped storage value.
    ///
    /// `Null` gives the empty path, text is taken verbatim and bytes are
    /// decoded as UTF-8 (invalid sequences become U+FFFD).
    ///
    /// # Errors
    /// [`Error::UnsupportedSource`] for any other shape.
    pub fn scan(value: impl Into<Value>) -> Result<Self> {
        match value.into() {
            Value::Null => Ok(Self::default()),
            Value::Text(s) => Ok(Self::from(s)),
            Value::Bytes(b) => Ok(Self::from(String::from_utf8_lossy(&b).into_owned())),
            other => {
                crate::debug!("scan"; "rejected {}", other);
                Err(Error::UnsupportedSource(other))
            }
        }
    }

    /// Render the path as an untyped storage value; always text.
    pub fn value(&self) -> Value {
        Value::Text(self.as_str().to_string())
    }
}

impl TryFrom<Value> for Path {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::scan(value)
    }
}

impl From<Path> for Value {
    fn from(path: Path) -> Self {
        path.value()
    }
}
