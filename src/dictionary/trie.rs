use std::mem;

use serde::{Deserialize, Serialize};

use crate::alphabet::index_of;
use crate::dictionary::entry::{Entries, Entry};
use crate::dictionary::node::TrieNode;
use crate::error::{DictionaryError, Result};

/// A 26-way prefix tree mapping lowercase words to their meanings.
///
/// The root represents the empty string and is never terminal. All
/// nodes are exclusively owned; removing a word prunes every node it
/// no longer shares with another word.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    count: usize,
}

/// Validates a key and converts it to child-slot indices. Anything
/// outside 'a'..='z', or an empty word, is an `InvalidKey`.
fn key_indices(word: &str) -> Result<Vec<usize>> {
    if word.is_empty() {
        return Err(DictionaryError::empty_key());
    }
    word.chars()
        .map(|c| index_of(c).ok_or_else(|| DictionaryError::bad_letter(word, c)))
        .collect()
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Stores `meaning` under `word`, creating path nodes as needed.
    /// Re-inserting an existing word replaces its meaning and returns
    /// the old one; no duplicate entry is ever created.
    pub fn insert(&mut self, word: &str, meaning: &str) -> Result<Option<String>> {
        let path = key_indices(word)?;
        let mut node = &mut self.root;
        for idx in path {
            node = node.child_or_create(idx);
        }
        let previous = if node.is_terminal {
            Some(mem::replace(&mut node.meaning, meaning.to_string()))
        } else {
            self.count += 1;
            node.meaning = meaning.to_string();
            None
        };
        node.is_terminal = true;
        Ok(previous)
    }

    /// Exact-match lookup. `Ok(None)` means the word is not stored,
    /// including when its path exists only as a prefix of longer words.
    pub fn search(&self, word: &str) -> Result<Option<&str>> {
        let path = key_indices(word)?;
        let mut node = &self.root;
        for idx in path {
            match node.child(idx) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        if node.is_terminal {
            Ok(Some(&node.meaning))
        } else {
            Ok(None)
        }
    }

    /// Removes `word` and returns its meaning. Removing a word that is
    /// not stored is a no-op yielding `Ok(None)`. Path nodes left both
    /// non-terminal and childless are pruned on the way back up; nodes
    /// still needed by other words are never touched.
    pub fn remove(&mut self, word: &str) -> Result<Option<String>> {
        let path = key_indices(word)?;
        let removed = remove_below(&mut self.root, &path);
        if removed.is_some() {
            self.count -= 1;
        }
        Ok(removed)
    }

    /// All stored entries in lexicographic word order.
    pub fn iter(&self) -> Entries<'_> {
        Entries::new(&self.root)
    }

    /// How many words the trie stores.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn remove_below(node: &mut TrieNode, path: &[usize]) -> Option<String> {
    let (&idx, rest) = match path.split_first() {
        // End of the path: clear this node. The clear is unconditional
        // even when the node was only a prefix (then it reports None).
        None => return node.clear_entry(),
        Some(split) => split,
    };
    let child = node.children[idx].as_deref_mut()?;
    let removed = remove_below(child, rest);
    if !child.is_terminal && !child.has_children() {
        node.children[idx] = None;
    }
    removed
}

impl<'a> IntoIterator for &'a Trie {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(trie: &Trie) -> Vec<String> {
        trie.iter().map(|e| e.word).collect()
    }

    #[test]
    fn finds_inserted_words() {
        let mut trie = Trie::new();
        trie.insert("hello", "a greeting").unwrap();
        trie.insert("help", "assistance").unwrap();
        assert_eq!(trie.search("hello").unwrap(), Some("a greeting"));
        assert_eq!(trie.search("help").unwrap(), Some("assistance"));
    }

    #[test]
    fn doesnt_find_words_not_inserted() {
        let mut trie = Trie::new();
        assert_eq!(trie.search("banana").unwrap(), None);
        trie.insert("hello", "a greeting").unwrap();
        // Prefixes of stored words are not words themselves.
        assert_eq!(trie.search("he").unwrap(), None);
        assert_eq!(trie.search("hell").unwrap(), None);
        // Neither are extensions.
        assert_eq!(trie.search("hellos").unwrap(), None);
    }

    #[test]
    fn reinsert_replaces_without_duplicating() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("cat", "a feline").unwrap(), None);
        assert_eq!(
            trie.insert("cat", "a small feline").unwrap(),
            Some("a feline".to_string())
        );
        assert_eq!(trie.search("cat").unwrap(), Some("a small feline"));
        assert_eq!(trie.len(), 1);
        assert_eq!(words(&trie), vec!["cat"]);
    }

    #[test]
    fn iterates_in_lexicographic_order() {
        let mut trie = Trie::new();
        for word in ["cat", "apple", "car", "zebra", "cart", "ant"] {
            trie.insert(word, "x").unwrap();
        }
        assert_eq!(
            words(&trie),
            vec!["ant", "apple", "car", "cart", "cat", "zebra"]
        );
    }

    #[test]
    fn shared_prefix_scenario() {
        let mut trie = Trie::new();
        trie.insert("cat", "a feline").unwrap();
        trie.insert("car", "a vehicle").unwrap();
        trie.insert("cart", "wheeled vehicle").unwrap();

        let entries: Vec<(String, &str)> = trie.iter().map(|e| (e.word, e.meaning)).collect();
        assert_eq!(
            entries,
            vec![
                ("car".to_string(), "a vehicle"),
                ("cart".to_string(), "wheeled vehicle"),
                ("cat".to_string(), "a feline"),
            ]
        );

        // "car" is also a prefix of "cart"; removing it must keep the
        // node alive for "cart".
        assert_eq!(trie.remove("car").unwrap(), Some("a vehicle".to_string()));
        assert_eq!(trie.search("car").unwrap(), None);
        assert_eq!(trie.search("cart").unwrap(), Some("wheeled vehicle"));
        assert_eq!(trie.search("cat").unwrap(), Some("a feline"));
    }

    #[test]
    fn removing_all_words_prunes_back_to_the_root() {
        let mut trie = Trie::new();
        for word in ["cat", "car", "cart", "dog"] {
            trie.insert(word, "x").unwrap();
        }
        for word in ["cat", "car", "cart", "dog"] {
            assert!(trie.remove(word).unwrap().is_some());
        }
        assert!(trie.is_empty());
        assert_eq!(trie.iter().count(), 0);
        // The whole tree is gone, not just unmarked.
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("cat", "a feline").unwrap();
        assert_eq!(trie.remove("cat").unwrap(), Some("a feline".to_string()));
        assert_eq!(trie.remove("cat").unwrap(), None);
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn removing_a_missing_word_is_a_noop() {
        let mut trie = Trie::new();
        trie.insert("cat", "a feline").unwrap();
        assert_eq!(trie.remove("banana").unwrap(), None);
        assert_eq!(trie.remove("ca").unwrap(), None);
        assert_eq!(trie.remove("cats").unwrap(), None);
        assert_eq!(trie.search("cat").unwrap(), Some("a feline"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn removing_a_pure_prefix_leaves_the_longer_word() {
        // "ca" has a node (as a prefix of "cat") but is not a word; the
        // removal clears its already-clear flags and must not disturb
        // "cat" or prune its path.
        let mut trie = Trie::new();
        trie.insert("cat", "a feline").unwrap();
        assert_eq!(trie.remove("ca").unwrap(), None);
        assert_eq!(trie.search("cat").unwrap(), Some("a feline"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn empty_meaning_is_a_valid_meaning() {
        let mut trie = Trie::new();
        trie.insert("cat", "").unwrap();
        assert_eq!(trie.search("cat").unwrap(), Some(""));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn rejects_invalid_keys() {
        let mut trie = Trie::new();
        for bad in ["", "Cat", "cat1", "ca t", "naïve"] {
            assert!(matches!(
                trie.insert(bad, "x"),
                Err(DictionaryError::InvalidKey { .. })
            ));
            assert!(matches!(
                trie.search(bad),
                Err(DictionaryError::InvalidKey { .. })
            ));
            assert!(matches!(
                trie.remove(bad),
                Err(DictionaryError::InvalidKey { .. })
            ));
        }
        // A failed insert must not leave partial path nodes behind.
        assert!(trie.is_empty());
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn empty_trie_iterates_nothing() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.iter().count(), 0);
    }

    #[test]
    fn serializes_to_json_and_back() {
        let mut trie = Trie::new();
        trie.insert("hello", "a greeting").unwrap();
        trie.insert("help", "assistance").unwrap();
        trie.insert("goodbye", "a farewell").unwrap();

        let serialized = serde_json::to_string(&trie).unwrap();
        let restored: Trie = serde_json::from_str(&serialized).unwrap();

        assert_eq!(trie, restored);
        assert_eq!(restored.search("help").unwrap(), Some("assistance"));
    }
}
