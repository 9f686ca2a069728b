//! Prefix tree for word membership and completion
//!
//! Words are stored uppercase, one node per letter. A node is terminal when a
//! stored word ends there. The tree only grows; there is no removal.

use rustc_hash::FxHashMap;

/// One node of the prefix tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    label: Option<char>,
    terminal: bool,
    children: FxHashMap<char, TrieNode>,
}

impl TrieNode {
    fn with_label(label: char) -> Self {
        Self {
            label: Some(label),
            ..Self::default()
        }
    }

    /// Letter on the edge into this node; `None` for the root
    #[must_use]
    pub const fn label(&self) -> Option<char> {
        self.label
    }

    /// Whether a stored word ends at this node
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Self> {
        self.children.get(&letter)
    }

    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.values()
    }
}

/// Prefix tree of uppercase words
///
/// # Examples
/// ```
/// use hangman_solver::index::Trie;
///
/// let trie: Trie = ["cat", "car", "card"].into_iter().collect();
/// assert!(trie.contains("CAR"));
/// assert!(!trie.contains("CA"));
///
/// let mut words = trie.suggest("ca");
/// words.sort();
/// assert_eq!(words, ["CAR", "CARD", "CAT"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Store a word, uppercased
    ///
    /// Inserting a word twice is harmless. The empty string is ignored so the
    /// root never becomes terminal.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for letter in word.chars().flat_map(char::to_uppercase) {
            node = node
                .children
                .entry(letter)
                .or_insert_with(|| TrieNode::with_label(letter));
        }

        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Node reached by following `prefix`, or `None` if the path breaks off
    #[must_use]
    pub fn lookup_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .flat_map(char::to_uppercase)
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// Whether `word` was inserted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup_node(word).is_some_and(TrieNode::is_terminal)
    }

    /// Every stored word starting with `prefix`, in no particular order
    ///
    /// Returns an empty list if no stored word has that prefix.
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_uppercase();
        let Some(start) = self.lookup_node(&prefix) else {
            return Vec::new();
        };

        let mut suggestions = Vec::new();
        let mut stack = vec![(prefix, start)];
        while let Some((word, node)) = stack.pop() {
            if node.terminal {
                suggestions.push(word.clone());
            }
            for (&letter, child) in &node.children {
                let mut next = word.clone();
                next.push(letter);
                stack.push((next, child));
            }
        }
        suggestions
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
