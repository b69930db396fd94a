use std::borrow::Cow;

use thiserror::Error;

/// Input that does not match the path grammar.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid path data at offset {offset}: {message}")]
pub struct GrammarError {
    /// Byte offset of the offending token.
    pub offset: usize,
    pub message: Cow<'static, str>,
}

impl GrammarError {
    pub fn new(offset: usize, message: impl Into<Cow<'static, str>>) -> Self {
        GrammarError { offset, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_error_display() {
        let err = GrammarError::new(7, "expected a number");
        assert_eq!(err.to_string(), "invalid path data at offset 7: expected a number");
        assert_eq!(Error::from(err).to_string(), "invalid path data at offset 7: expected a number");
    }
}
