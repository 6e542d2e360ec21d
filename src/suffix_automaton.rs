//! Suffix automaton for exact substring queries.
//!
//! A **suffix automaton** is the minimal deterministic automaton that
//! recognizes every suffix (and therefore every substring) of the
//! indexed text. It is built online, one character at a time, in O(1)
//! amortized per character, and holds at most `2n - 1` states for a
//! text of length `n ≥ 2`.
//!
//! # Overview
//!
//! Each state stands for an equivalence class of substrings that share
//! the same set of ending positions in the text. Two kinds of edges are
//! maintained:
//!
//! - **Transitions**: the automaton edges consumed by queries, one
//!   dense row of `a`..=`z` slots per state.
//! - **Suffix links**: a tree over states rooted at the initial state,
//!   used during construction to locate the states that must learn a
//!   new transition or be split by cloning.
//!
//! # Example
//!
//! ```rust
//! use libstringmatch::suffix_automaton::SuffixAutomaton;
//!
//! let index = SuffixAutomaton::from_text("abcbc")?;
//! assert!(index.contains("bcb"));
//! assert!(index.contains(""));
//! assert!(!index.contains("bca"));
//! # Ok::<(), libstringmatch::error::AutomatonError>(())
//! ```
//!
//! # Appending vs. inserting
//!
//! [`SuffixAutomaton::append`] extends the current text, so consecutive
//! appends behave exactly like one long append and substrings spanning
//! the boundary are indexed. [`SuffixAutomaton::insert`] starts a new
//! independent document instead: no substring spanning two documents is
//! recognized.
//!
//! ```rust
//! use libstringmatch::suffix_automaton::SuffixAutomaton;
//!
//! let mut appended = SuffixAutomaton::new();
//! appended.append("abc")?;
//! appended.append("def")?;
//! assert!(appended.contains("cd"));
//!
//! let mut inserted = SuffixAutomaton::new();
//! inserted.insert("abc")?;
//! inserted.insert("def")?;
//! assert!(!inserted.contains("cd"));
//! # Ok::<(), libstringmatch::error::AutomatonError>(())
//! ```

use crate::alphabet::{symbols_of, Symbol, ALPHABET_LEN};
use crate::error::Result;
use crate::StateId;

/// The root state of the arena.
const ROOT: StateId = 0;

/// A state in the suffix automaton.
#[derive(Debug)]
struct State {
    /// Dense transition row; `None` marks an absent edge.
    transitions: [Option<StateId>; ALPHABET_LEN],

    /// Suffix link: the state representing the longest proper suffix of
    /// this class that lies in a different equivalence class. `None`
    /// only at the root. Strictly decreases `length`.
    link: Option<StateId>,

    /// Length of the longest substring reaching this state.
    length: usize,
}

impl State {
    fn root() -> Self {
        Self {
            transitions: [None; ALPHABET_LEN],
            link: None,
            length: 0,
        }
    }

    fn new(length: usize) -> Self {
        // Tentative link to the root; the extension step narrows it.
        Self {
            transitions: [None; ALPHABET_LEN],
            link: Some(ROOT),
            length,
        }
    }
}

/// Minimal automaton over every substring of the indexed text.
///
/// States are held in an arena addressed by [`StateId`]; construction
/// only ever appends, so ids stay valid for the automaton's lifetime.
/// The type is deliberately not `Clone`: a copy would have to duplicate
/// the whole arena, and nothing in this crate needs one.
///
/// # Examples
///
/// ```rust
/// use libstringmatch::suffix_automaton::SuffixAutomaton;
///
/// let mut index = SuffixAutomaton::new();
/// index.append("mississippi")?;
///
/// assert!(index.contains("issi"));
/// assert!(index.contains("SIPPI")); // queries are case-folded
/// assert!(!index.contains("miss issippi"));
/// # Ok::<(), libstringmatch::error::AutomatonError>(())
/// ```
#[derive(Debug)]
pub struct SuffixAutomaton {
    /// Arena of states; `states[0]` is the root.
    states: Vec<State>,

    /// Extension point: the state reached by the whole current text.
    last: StateId,
}

impl SuffixAutomaton {
    /// Create an empty automaton holding only the root state.
    pub fn new() -> Self {
        Self {
            states: vec![State::root()],
            last: ROOT,
        }
    }

    /// Build an automaton over a single text.
    ///
    /// # Errors
    ///
    /// Fails if the text contains characters outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libstringmatch::suffix_automaton::SuffixAutomaton;
    ///
    /// let index = SuffixAutomaton::from_text("banana").unwrap();
    /// assert!(index.contains("anan"));
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        let mut automaton = Self::new();
        automaton.append(text)?;
        Ok(automaton)
    }

    /// Build an automaton over multiple independent texts.
    ///
    /// Each text is indexed with [`SuffixAutomaton::insert`], so no
    /// substring spanning two texts is recognized.
    ///
    /// # Errors
    ///
    /// Fails if any text contains characters outside the alphabet;
    /// texts before the offending one remain indexed.
    pub fn from_texts<I, S>(texts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self::new();
        for text in texts {
            automaton.insert(text.as_ref())?;
        }
        Ok(automaton)
    }

    /// Extend the current text with `text`.
    ///
    /// Every substring of the concatenation of all appends so far
    /// becomes a match for [`SuffixAutomaton::contains`], including
    /// substrings that span append boundaries.
    ///
    /// # Errors
    ///
    /// Fails on the first character outside the alphabet; the automaton
    /// is left untouched in that case.
    pub fn append(&mut self, text: &str) -> Result<()> {
        let symbols = symbols_of(text)?;
        for symbol in symbols {
            self.extend(symbol);
        }
        Ok(())
    }

    /// Index `text` as a new independent document.
    ///
    /// Resets the extension point to the root first, so the new text
    /// shares no substrings with previously indexed text beyond the
    /// ones they genuinely have in common.
    ///
    /// # Errors
    ///
    /// Fails on the first character outside the alphabet; the automaton
    /// is left untouched in that case.
    pub fn insert(&mut self, text: &str) -> Result<()> {
        let symbols = symbols_of(text)?;
        self.last = ROOT;
        for symbol in symbols {
            self.extend(symbol);
        }
        Ok(())
    }

    /// Check whether `query` occurs as a substring of the indexed text.
    ///
    /// Walks transitions from the root and fails the moment a required
    /// edge is absent. The empty string is trivially contained. A query
    /// character outside the alphabet cannot occur in any indexed text,
    /// so it simply yields `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libstringmatch::suffix_automaton::SuffixAutomaton;
    ///
    /// let index = SuffixAutomaton::from_text("abcbc").unwrap();
    /// assert!(index.contains("cb"));
    /// assert!(!index.contains("cc"));
    /// assert!(!index.contains("b c"));
    /// ```
    pub fn contains(&self, query: &str) -> bool {
        let mut state = ROOT;
        for c in query.chars() {
            let symbol = match Symbol::from_char(c) {
                Ok(symbol) => symbol,
                Err(_) => return false,
            };
            match self.states[state].transitions[symbol.index()] {
                Some(next) => state = next,
                None => return false,
            }
        }
        true
    }

    /// Number of states in the arena, the root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// True when no text has been indexed yet.
    pub fn is_empty(&self) -> bool {
        self.states.len() == 1
    }

    /// Reset to an empty automaton, dropping all indexed text.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Online extension step: grow the automaton by one symbol.
    ///
    /// Creates the state for the extended text, then walks the suffix
    /// link chain backward from the previous extension point. States
    /// missing a transition on `symbol` gain one pointing at the new
    /// state; the first state that already has one either becomes the
    /// new state's suffix link directly, or is split by cloning so the
    /// invariant `length(link(v)) < length(v)` survives.
    fn extend(&mut self, symbol: Symbol) {
        let c = symbol.index();
        let cur = self.states.len();
        self.states.push(State::new(self.states[self.last].length + 1));

        let mut p = Some(self.last);
        self.last = cur;

        while let Some(v) = p {
            let q = match self.states[v].transitions[c] {
                None => {
                    self.states[v].transitions[c] = Some(cur);
                    p = self.states[v].link;
                    continue;
                }
                Some(q) => q,
            };

            if self.states[q].length == self.states[v].length + 1 {
                self.states[cur].link = Some(q);
            } else {
                let clone = self.clone_state(q, self.states[v].length + 1);
                self.states[q].link = Some(clone);
                self.states[cur].link = Some(clone);

                // Redirect every transition on this symbol still aimed
                // at the split state.
                let mut w = Some(v);
                while let Some(x) = w {
                    if self.states[x].transitions[c] != Some(q) {
                        break;
                    }
                    self.states[x].transitions[c] = Some(clone);
                    w = self.states[x].link;
                }
            }
            return;
        }
        // The walk fell off the root; the tentative root link stands.
    }

    /// Clone `source` into a fresh state with the given length.
    ///
    /// The transition row is copied wholesale and the source's suffix
    /// link is inherited; the caller rewires links and transitions.
    fn clone_state(&mut self, source: StateId, length: usize) -> StateId {
        let id = self.states.len();
        let cloned = State {
            transitions: self.states[source].transitions,
            link: self.states[source].link,
            length,
        };
        self.states.push(cloned);
        id
    }
}

impl Default for SuffixAutomaton {
    fn default() -> Self {
        Self::new()
    }
}
