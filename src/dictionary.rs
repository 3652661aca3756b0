//! The trie-backed dictionary and its supporting types.

mod entry;
mod node;
pub mod trie;

pub use entry::{Entries, Entry};

use delegate::delegate;

use crate::error::Result;
use crate::dictionary::trie::Trie;

/// Owning wrapper around the trie. The caller holds one of these and
/// threads it through every operation; there is no global instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary { trie: Trie::new() }
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str, meaning: &str) -> Result<Option<String>>;
            pub fn search(&self, word: &str) -> Result<Option<&str>>;
            pub fn remove(&mut self, word: &str) -> Result<Option<String>>;
            pub fn iter(&self) -> Entries<'_>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }
}
