//! Error types.

use crate::path::Value;
use thiserror::Error;

/// Errors reported by the fallible operations of this crate.
///
/// Dividing, splitting and joining never fail; only glob matching and
/// scanning an untyped storage value can.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A glob pattern was malformed.
    #[error("syntax error in pattern `{0}`")]
    BadPattern(String),

    /// A storage value of a shape that cannot hold a path.
    #[error("unsupported source type: Path::scan({0})")]
    UnsupportedSource(Value),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::BadPattern("[a".to_string());
        assert_eq!(format!("{err}"), "syntax error in pattern `[a`");

        let err = Error::UnsupportedSource(Value::Int(123));
        let display = format!("{err}");
        assert!(display.contains("Path::scan(123)"));
    }
}
