//! Error handling for the datrie library
//!
//! One error enum covers the whole crate. The variants mirror the three
//! failure classes of trie construction: a symbol outside the configured
//! alphabet (word-scoped, recoverable), a violated structural invariant
//! (fatal), and I/O trouble while loading or persisting a dictionary.

use thiserror::Error;

/// Main error type for the datrie library
#[derive(Error, Debug)]
pub enum TrieError {
    /// A symbol in the input has no alphabet code
    #[error("unsupported symbol {symbol:?}")]
    UnsupportedSymbol {
        /// The offending character
        symbol: char,
    },

    /// The array pair reached a state the construction algorithm can never
    /// produce; indicates a bug in growth or relocation, not bad input
    #[error("construction invariant violated: {message}")]
    InvariantViolation {
        /// Description of the violated invariant
        message: String,
    },

    /// Configuration or parameter errors
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrieError {
    /// Create an unsupported symbol error
    pub fn unsupported_symbol(symbol: char) -> Self {
        Self::UnsupportedSymbol { symbol }
    }

    /// Create an invariant violation error
    pub fn invariant<S: Into<String>>(message: S) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// An unsupported symbol only fails the word that carried it; I/O errors
    /// abort the current batch but leave the structure intact. An invariant
    /// violation is never recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::UnsupportedSymbol { .. } => true,
            Self::Io(_) => true,
            Self::InvariantViolation { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedSymbol { .. } => "symbol",
            Self::InvariantViolation { .. } => "invariant",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TrieError>;
