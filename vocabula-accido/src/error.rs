//! Error types for the morphology kernel.

use thiserror::Error;

use crate::ending::EndingKey;

/// Errors raised while constructing or querying word entities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccidoError {
    /// Malformed principal parts or metadata at entity construction.
    #[error("{0}")]
    InvalidInput(String),

    /// A paradigm lookup missed. This signals a programmer error (the key
    /// was never generated for this word) and is never surfaced to clients
    /// as anything but a 500.
    #[error("no ending for '{components}' of '{word}'")]
    NoEnding {
        /// Headword of the entity that was queried.
        word: String,
        /// Rendered components of the missing key.
        components: String,
    },
}

impl AccidoError {
    pub(crate) fn invalid(msg: impl Into<String>) -> AccidoError {
        AccidoError::InvalidInput(msg.into())
    }

    pub(crate) fn no_ending(word: &str, key: &EndingKey) -> AccidoError {
        AccidoError::NoEnding {
            word: word.to_string(),
            components: key.components_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccidoError>;
