//! Error types for dictionary operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word cannot be used as a trie key. Keys must be non-empty
    /// sequences of lowercase ASCII letters.
    #[error("invalid key {word:?}: {reason}")]
    InvalidKey { word: String, reason: String },

    /// The backing dictionary file could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] std::io::Error),
}

impl DictionaryError {
    pub(crate) fn empty_key() -> DictionaryError {
        DictionaryError::InvalidKey {
            word: String::new(),
            reason: "empty word".to_string(),
        }
    }

    pub(crate) fn bad_letter(word: &str, c: char) -> DictionaryError {
        DictionaryError::InvalidKey {
            word: word.to_string(),
            reason: format!("character {:?} outside 'a'..='z'", c),
        }
    }
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
