//! # libstringmatch
//!
//! Exact substring indexing and multi-pattern matching using
//! string-matching automata.
//!
//! Two independent automata share one design: incremental online
//! construction of an index-addressed state graph over the lowercase
//! `a`..=`z` alphabet, with auxiliary link edges that bound construction
//! cost and drive matching queries.
//!
//! - [`SuffixAutomaton`](suffix_automaton::SuffixAutomaton) builds the
//!   minimal automaton recognizing every substring of the indexed text,
//!   via online extension with state cloning, and answers containment
//!   queries in time linear in the query.
//! - [`AhoCorasick`](aho_corasick::AhoCorasick) indexes a pattern set in
//!   a trie with lazily memoized suffix links for simultaneous
//!   multi-pattern scanning, and compiles a folded DFA-style transition
//!   table for external scanning loops.
//!
//! ## Example
//!
//! ```rust
//! use libstringmatch::prelude::*;
//!
//! let index = SuffixAutomaton::from_text("abcbc")?;
//! assert!(index.contains("bcb"));
//! assert!(!index.contains("bca"));
//!
//! let mut patterns = AhoCorasick::from_patterns(["he", "she", "his", "hers"])?;
//! let ends: Vec<usize> = patterns.find_iter("ahishers").map(|m| m.end()).collect();
//! assert_eq!(ends, vec![4, 6, 6, 8]);
//! # Ok::<(), libstringmatch::error::AutomatonError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aho_corasick;
pub mod alphabet;
pub mod error;
pub mod suffix_automaton;

/// Index of a state within an automaton's arena.
///
/// States live in a growable vector owned by their automaton; ids are
/// assigned sequentially and are never reused or invalidated. The root
/// is always id `0`.
pub type StateId = usize;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::aho_corasick::{AhoCorasick, FindIter, Match, ScanStep, ScanTable};
    pub use crate::alphabet::{Symbol, ALPHABET_LEN};
    pub use crate::error::{AutomatonError, Result};
    pub use crate::suffix_automaton::SuffixAutomaton;
    pub use crate::StateId;
}
