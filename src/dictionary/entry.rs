use crate::alphabet::letter_at;
use crate::dictionary::node::{ChildCursor, TrieNode};

/// A stored (word, meaning) pair, reconstructed from the root-to-node
/// path during enumeration. Entries are never held inside the trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub word: String,
    pub meaning: &'a str,
}

/// Depth-first pre-order walk over all terminal nodes. Children are
/// visited in ascending letter order, so entries come out in
/// lexicographic order of their words.
pub struct Entries<'a> {
    stack: Vec<ChildCursor<'a>>,
    path: String,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Entries<'a> {
        Entries {
            stack: vec![root.into_iter()],
            path: String::new(),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = self.stack.last_mut()?.next();
            match step {
                Some((idx, child)) => {
                    self.path.push(letter_at(idx));
                    self.stack.push(child.into_iter());
                    if child.is_terminal {
                        return Some(Entry {
                            word: self.path.clone(),
                            meaning: &child.meaning,
                        });
                    }
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }
}
