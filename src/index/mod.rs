//! Word indexes
//!
//! Standalone lookup structures over a dictionary.

mod trie;

pub use trie::{Trie, TrieNode};
