//! A persistent word/meaning dictionary backed by a 26-way trie.
//!
//! The core lives in [`dictionary`]: insert, exact-match search,
//! delete with node pruning, and lexicographic enumeration. [`store`]
//! persists entries as `<word> <meaning>` lines and [`menu`] drives
//! the whole thing interactively.

pub mod alphabet;
pub mod dictionary;
pub mod error;
pub mod menu;
pub mod store;
