//! Error type returned by the range parser.

use thiserror::Error;

/// A token that does not describe a valid IP range.
///
/// Carries the token as the parser saw it (trimmed and lower-cased).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ip range ({token}) invalid syntax")]
pub struct SyntaxError {
    /// The offending token.
    pub token: String,
}

impl SyntaxError {
    pub fn new(token: impl Into<String>) -> Self {
        SyntaxError {
            token: token.into(),
        }
    }
}
