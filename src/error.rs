//! Error types shared by the symbol model and the generic algorithms.

use thiserror::Error;

/// Errors raised while building typed sequences or running the alignment
/// algorithms on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Raw text contains something that is not a member of the alphabet.
    #[error("Invalid {alphabet} symbol '{text}' at position {position}")]
    InvalidSymbol {
        alphabet: &'static str,
        text: String,
        position: usize,
    },

    #[error("Cannot split an empty sequence")]
    EmptySequence,

    /// Alignment rows do not all have the same length.
    #[error("Row {row} has length {found}, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;

impl SeqError {
    pub(crate) fn invalid(alphabet: &'static str, text: impl Into<String>, position: usize) -> Self {
        SeqError::InvalidSymbol {
            alphabet,
            text: text.into(),
            position,
        }
    }
}
