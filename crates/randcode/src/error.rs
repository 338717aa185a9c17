//! Error types for randcode.
//!
//! All errors are strongly typed and propagated without panicking.
//! Generated values and raw random bytes are never included in error messages.

/// Errors covering alphabet validation, entropy access and password plans.
#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    #[error("Alphabet too large: {size} symbols (at most 256 are supported)")]
    AlphabetTooLarge { size: usize },

    #[error("Alphabet is empty")]
    EmptyAlphabet,

    #[error("Alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid block plan: {0}")]
    InvalidBlockPlan(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, RandomError>;
