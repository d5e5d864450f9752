//! `prefix_index` — character-keyed prefix tree over the dictionary.
//!
//! The solver descends this tree one grid cell at a time. As soon as the letters read so far
//! stop being a prefix of any dictionary word, the descent fails and the solver abandons that
//! direction, so work is bounded by the shared-prefix structure of the dictionary rather than
//! by (word count × grid size).
//!
//! Children are kept in a `HashMap<char, _>` since the alphabet is open: grids may hold any
//! character, and matching is exact character equality (no case folding).
//!
//! ```
//! use wordgrid::prefix_index::PrefixIndex;
//!
//! let index: PrefixIndex = ["CAT", "CATS", "DOG"].into_iter().collect();
//! let node = "CAT".chars().try_fold(index.root(), |n, ch| n.child(ch));
//! assert!(node.is_some_and(|n| n.is_word() && n.has_child('S')));
//! assert!(!index.has_prefix("CAR"));
//! ```

use std::collections::HashMap;

/// One node of the prefix tree; owns its children exclusively.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrefixNode {
    children: HashMap<char, PrefixNode>,
    is_word: bool,
}

impl PrefixNode {
    /// Descend one character, if any dictionary word continues this way.
    #[must_use]
    pub fn child(&self, ch: char) -> Option<&PrefixNode> {
        self.children.get(&ch)
    }

    #[must_use]
    pub fn has_child(&self, ch: char) -> bool {
        self.children.contains_key(&ch)
    }

    /// True when the path from the root to this node spells a full dictionary word.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    #[must_use]
    pub fn num_children(&self) -> usize {
        self.children.len()
    }
}

/// Prefix tree built once per search call from every dictionary word.
#[derive(Debug, Default, Clone)]
pub struct PrefixIndex {
    root: PrefixNode,
    num_words: usize,
}

impl PrefixIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, creating any missing nodes along its path.
    ///
    /// Returns `true` if the word was not already present; inserting the same word
    /// twice leaves the tree unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        let is_new = !node.is_word;
        node.is_word = true;
        if is_new {
            self.num_words += 1;
        }
        is_new
    }

    #[must_use]
    pub fn root(&self) -> &PrefixNode {
        &self.root
    }

    fn descend(&self, s: &str) -> Option<&PrefixNode> {
        s.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }

    /// Returns true if `word` was inserted as a complete word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).is_some_and(PrefixNode::is_word)
    }

    /// Returns true if any inserted word starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Number of distinct words inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut index = PrefixIndex::new();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }
}
