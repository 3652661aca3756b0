use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::alphabet::{letter_at, ALPHABET};

/// One position along a prefix path. A node is "a word" exactly when
/// `is_terminal` is set; `meaning` is empty otherwise.
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) meaning: String,
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn child_or_create(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Default::default)
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(|c| c.is_some())
    }

    /// Clears the terminal flag and meaning unconditionally and returns
    /// the meaning that was stored here, if this node actually was a word.
    pub(crate) fn clear_entry(&mut self) -> Option<String> {
        let was_terminal = self.is_terminal;
        self.is_terminal = false;
        let meaning = std::mem::take(&mut self.meaning);
        if was_terminal {
            Some(meaning)
        } else {
            None
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("meaning", &self.meaning)
            .field("is_terminal", &self.is_terminal)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.is_some())
                    .map(|(i, _)| letter_at(i))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Iterates the present children of one node in ascending letter order.
pub(crate) struct ChildCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for ChildCursor<'a> {
    type Item = (usize, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.node.children.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx].as_deref() {
                return Some((idx, child));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (usize, &'a TrieNode);
    type IntoIter = ChildCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ChildCursor { idx: 0, node: self }
    }
}
