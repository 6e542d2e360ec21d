//! Aho-Corasick automaton for multi-pattern scanning.
//!
//! [`AhoCorasick`] indexes a set of patterns in a trie, then resolves
//! three families of derived edges lazily, memoizing each on first use:
//!
//! - **Suffix links** (the failure function): from a node to the node
//!   of the longest proper suffix of its path that is also a path in
//!   the trie.
//! - **Goto transitions**: the trie extended with suffix-link fallbacks
//!   into a complete transition function over the alphabet.
//! - **Final links**: from a node to the nearest node along its suffix
//!   chain (itself included) at which a pattern terminates.
//!
//! Scanning walks one goto transition per character and reports a match
//! whenever the current node's final link is not the root; the final
//! link chain enumerates every pattern ending at that position.
//!
//! # Example
//!
//! ```rust
//! use libstringmatch::aho_corasick::AhoCorasick;
//!
//! let mut patterns = AhoCorasick::from_patterns(["he", "she", "his", "hers"])?;
//! let spans: Vec<(usize, usize)> = patterns
//!     .find_iter("ahishers")
//!     .map(|m| (m.start(), m.end()))
//!     .collect();
//! assert_eq!(spans, vec![(1, 4), (3, 6), (4, 6), (4, 8)]);
//! # Ok::<(), libstringmatch::error::AutomatonError>(())
//! ```
//!
//! # Folded transition table
//!
//! [`AhoCorasick::build_scan_table`] compiles the goto closure into a
//! flat [`ScanTable`]: one dense row per state, each entry an explicit
//! [`ScanStep`] carrying the destination state and whether stepping
//! there enters a match region. External scanning loops can drive the
//! table directly and hand control back to the automaton only where an
//! entry's flag fires:
//!
//! ```rust
//! use libstringmatch::aho_corasick::AhoCorasick;
//! use libstringmatch::alphabet::Symbol;
//!
//! let mut patterns = AhoCorasick::from_patterns(["he", "she", "his", "hers"])?;
//! let table = patterns.build_scan_table();
//!
//! let mut state = table.root();
//! let mut match_ends = Vec::new();
//! for (position, c) in "ahishers".char_indices() {
//!     let step = table.step(state, Symbol::from_char(c)?);
//!     if step.enters_match {
//!         match_ends.push(position + 1);
//!     }
//!     state = step.next;
//! }
//! assert_eq!(match_ends, vec![4, 6, 8]);
//! # Ok::<(), libstringmatch::error::AutomatonError>(())
//! ```

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::alphabet::{symbols_of, Symbol, ALPHABET_LEN};
use crate::error::{AutomatonError, Result};
use crate::StateId;

/// The root state of the arena.
const ROOT: StateId = 0;

/// Short transient chains walked during lazy link resolution.
type Chain = SmallVec<[StateId; 8]>;

/// A node of the pattern trie.
#[derive(Debug)]
struct Node {
    /// Trie children created by [`AhoCorasick::push`]. Never stale.
    children: [Option<StateId>; ALPHABET_LEN],

    /// Memoized goto transitions; `None` marks a slot not yet resolved.
    next: [Option<StateId>; ALPHABET_LEN],

    /// Memoized suffix link; `None` until resolved. Fixed to the root
    /// for the root itself and for its direct children, whose longest
    /// proper suffix is empty by definition.
    link: Option<StateId>,

    /// Memoized final link; `None` until resolved.
    final_link: Option<StateId>,

    /// Parent node and incoming edge symbol, retained so the suffix
    /// link can be resolved on demand from the parent's link.
    parent: StateId,
    symbol: Symbol,

    /// Trie depth; equals the pattern length at terminal nodes.
    depth: usize,

    /// Number of patterns terminating exactly at this node.
    pattern_count: usize,
}

impl Node {
    fn root() -> Self {
        Self {
            children: [None; ALPHABET_LEN],
            next: [None; ALPHABET_LEN],
            link: Some(ROOT),
            final_link: Some(ROOT),
            parent: ROOT,
            symbol: Symbol::from_index(0),
            depth: 0,
            pattern_count: 0,
        }
    }

    fn new(parent: StateId, symbol: Symbol, depth: usize) -> Self {
        Self {
            children: [None; ALPHABET_LEN],
            next: [None; ALPHABET_LEN],
            link: if parent == ROOT { Some(ROOT) } else { None },
            final_link: None,
            parent,
            symbol,
            depth,
            pattern_count: 0,
        }
    }
}

/// Multi-pattern index with lazily resolved suffix links.
///
/// Nodes are held in an arena addressed by [`StateId`]; construction
/// only ever appends, so ids stay valid for the automaton's lifetime.
/// Link resolution memoizes into the nodes, which is why querying
/// operations take `&mut self`. The type is deliberately not `Clone`:
/// a copy would have to duplicate the whole arena, and nothing in this
/// crate needs one.
///
/// # Examples
///
/// ```rust
/// use libstringmatch::aho_corasick::AhoCorasick;
///
/// let mut patterns = AhoCorasick::new();
/// patterns.push("ana")?;
/// patterns.push("nan")?;
///
/// let count = patterns.find_iter("bananas").count();
/// assert_eq!(count, 3); // "ana" twice, "nan" once
/// # Ok::<(), libstringmatch::error::AutomatonError>(())
/// ```
#[derive(Debug)]
pub struct AhoCorasick {
    /// Arena of trie nodes; `nodes[0]` is the root.
    nodes: Vec<Node>,

    /// Total number of pushed patterns, duplicates included.
    patterns: usize,

    /// True once any lazy resolution has memoized a value, so `push`
    /// knows the caches must be discarded before the trie grows.
    caches_primed: bool,

    /// False whenever a pattern has been pushed since the last full
    /// final-link refresh.
    final_links_fresh: bool,
}

impl AhoCorasick {
    /// Create an empty pattern index.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            patterns: 0,
            caches_primed: false,
            final_links_fresh: false,
        }
    }

    /// Build an index over a set of patterns.
    ///
    /// # Errors
    ///
    /// Fails if any pattern is empty or contains characters outside the
    /// alphabet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libstringmatch::aho_corasick::AhoCorasick;
    ///
    /// let mut patterns = AhoCorasick::from_patterns(["cat", "dog"]).unwrap();
    /// assert_eq!(patterns.pattern_count(), 2);
    /// assert!(AhoCorasick::from_patterns(["ok", ""]).is_err());
    /// ```
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self::new();
        for pattern in patterns {
            automaton.push(pattern.as_ref())?;
        }
        Ok(automaton)
    }

    /// Insert one pattern into the trie.
    ///
    /// Creates nodes for missing edges and increments the terminal
    /// node's pattern count. Any memoized links are discarded first:
    /// they describe the trie as it existed when they were resolved,
    /// and a grown trie can invalidate them (a longer suffix of some
    /// path may have become a trie path).
    ///
    /// # Errors
    ///
    /// Fails on empty patterns and on characters outside the alphabet;
    /// the automaton is left untouched in either case.
    pub fn push(&mut self, pattern: &str) -> Result<()> {
        let symbols = symbols_of(pattern)?;
        if symbols.is_empty() {
            return Err(AutomatonError::EmptyPattern);
        }
        if self.caches_primed {
            self.discard_caches();
        }
        self.final_links_fresh = false;

        let mut cur = ROOT;
        for symbol in symbols {
            let c = symbol.index();
            cur = match self.nodes[cur].children[c] {
                Some(child) => child,
                None => {
                    let id = self.nodes.len();
                    let depth = self.nodes[cur].depth + 1;
                    self.nodes.push(Node::new(cur, symbol, depth));
                    self.nodes[cur].children[c] = Some(id);
                    id
                }
            };
        }
        self.nodes[cur].pattern_count += 1;
        self.patterns += 1;
        Ok(())
    }

    /// Total number of pushed patterns, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Number of trie nodes, the root included.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when no pattern has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Reset to an empty index, dropping all patterns.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterate over every occurrence of every pattern in `text`.
    ///
    /// Occurrences are reported as byte spans into `text`, grouped by
    /// end position in scan order; where several patterns end at the
    /// same position, the longest is yielded first. Characters outside
    /// the alphabet cannot occur inside any pattern, so they reset the
    /// scan to the root. Patterns pushed more than once are reported
    /// once per occurrence.
    ///
    /// The iterator borrows the automaton mutably because scanning
    /// resolves and memoizes links on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use libstringmatch::aho_corasick::AhoCorasick;
    ///
    /// let mut patterns = AhoCorasick::from_patterns(["ab"]).unwrap();
    /// assert_eq!(patterns.find_iter("ab-ab").count(), 2);
    /// assert_eq!(patterns.find_iter("a-b").count(), 0);
    /// ```
    pub fn find_iter<'a, 't>(&'a mut self, text: &'t str) -> FindIter<'a, 't> {
        FindIter {
            automaton: self,
            text: text.char_indices(),
            state: ROOT,
            pending: VecDeque::new(),
        }
    }

    /// Compile the folded transition table.
    ///
    /// Recomputes every final link from scratch, then resolves the full
    /// goto closure into one dense row per state. Each entry is an
    /// explicit [`ScanStep`] rather than an integer with an overloaded
    /// zero, so the destination state is never lost and "a match must
    /// be handled here" is its own field.
    pub fn build_scan_table(&mut self) -> ScanTable {
        if !self.final_links_fresh {
            self.refresh_final_links();
        }

        let state_count = self.nodes.len();
        let mut match_states = Vec::with_capacity(state_count);
        for node in &self.nodes {
            match_states.push(node.final_link != Some(ROOT));
        }

        let mut rows = Vec::with_capacity(state_count);
        for state in 0..state_count {
            let mut row = [ScanStep {
                next: ROOT,
                enters_match: false,
            }; ALPHABET_LEN];
            for symbol in Symbol::all() {
                let next = self.next_state(state, symbol);
                row[symbol.index()] = ScanStep {
                    next,
                    enters_match: match_states[next],
                };
            }
            rows.push(row);
        }

        ScanTable { rows, match_states }
    }

    /// Drop every memoized link, goto slot, and final link.
    ///
    /// Direct children of the root keep their link: the empty suffix is
    /// the root no matter how the trie grows.
    fn discard_caches(&mut self) {
        self.nodes[ROOT].next = [None; ALPHABET_LEN];
        for node in self.nodes.iter_mut().skip(1) {
            node.next = [None; ALPHABET_LEN];
            node.final_link = None;
            node.link = if node.parent == ROOT { Some(ROOT) } else { None };
        }
        self.caches_primed = false;
    }

    /// Resolve the suffix link of `state`, memoizing every link
    /// computed on the way.
    ///
    /// Resolution is iterative: a work stack holds states whose links
    /// are still unresolved, and every state pushed is strictly
    /// shallower in the trie than the one it was pushed for, so the
    /// stack never exceeds the trie depth and the loop terminates.
    fn suffix_link(&mut self, state: StateId) -> StateId {
        if let Some(link) = self.nodes[state].link {
            return link;
        }
        self.caches_primed = true;

        let mut work = Chain::new();
        work.push(state);
        while let Some(s) = work.last().copied() {
            if self.nodes[s].link.is_some() {
                work.pop();
                continue;
            }
            let parent = self.nodes[s].parent;
            let parent_link = match self.nodes[parent].link {
                Some(link) => link,
                None => {
                    work.push(parent);
                    continue;
                }
            };
            // The link is the goto of the parent's link on the incoming
            // symbol; that walk may itself hit an unresolved link, in
            // which case the blocking state is resolved first.
            match self.try_next_state(parent_link, self.nodes[s].symbol) {
                Ok(target) => {
                    self.nodes[s].link = Some(target);
                    work.pop();
                }
                Err(blocked) => work.push(blocked),
            }
        }
        self.nodes[state].link.unwrap()
    }

    /// Memoized goto transition: the state reached from `state` on
    /// `symbol` in the trie extended with suffix-link fallbacks.
    ///
    /// Walks the suffix chain until a trie edge (or the root, which
    /// falls back to itself) provides a destination, then memoizes that
    /// destination on every state visited. Returns `Err(blocked)` when
    /// the walk reaches a state whose suffix link is unresolved; the
    /// caller resolves it and retries.
    fn try_next_state(
        &mut self,
        state: StateId,
        symbol: Symbol,
    ) -> std::result::Result<StateId, StateId> {
        let c = symbol.index();
        let mut chain = Chain::new();
        let mut cur = state;
        let target = loop {
            if let Some(target) = self.nodes[cur].next[c] {
                break target;
            }
            if let Some(child) = self.nodes[cur].children[c] {
                break child;
            }
            if cur == ROOT {
                break ROOT;
            }
            match self.nodes[cur].link {
                Some(link) => {
                    chain.push(cur);
                    cur = link;
                }
                None => return Err(cur),
            }
        };

        self.caches_primed = true;
        self.nodes[cur].next[c] = Some(target);
        for visited in chain {
            self.nodes[visited].next[c] = Some(target);
        }
        Ok(target)
    }

    /// Fully resolved goto transition; resolves any suffix links the
    /// fallback walk runs into.
    fn next_state(&mut self, state: StateId, symbol: Symbol) -> StateId {
        loop {
            match self.try_next_state(state, symbol) {
                Ok(target) => return target,
                Err(blocked) => {
                    self.suffix_link(blocked);
                }
            }
        }
    }

    /// Memoized final link: the nearest state along the suffix chain,
    /// starting at `state` itself, where a pattern terminates; the root
    /// when there is none.
    fn final_link(&mut self, state: StateId) -> StateId {
        let mut chain = Chain::new();
        let mut cur = state;
        let target = loop {
            match self.nodes[cur].final_link {
                Some(final_link) => break final_link,
                None if self.nodes[cur].pattern_count > 0 => {
                    self.caches_primed = true;
                    self.nodes[cur].final_link = Some(cur);
                    break cur;
                }
                None => {
                    chain.push(cur);
                    cur = self.suffix_link(cur);
                }
            }
        };

        if !chain.is_empty() {
            self.caches_primed = true;
        }
        for visited in chain {
            self.nodes[visited].final_link = Some(target);
        }
        target
    }

    /// Recompute every final link from scratch.
    fn refresh_final_links(&mut self) {
        self.nodes[ROOT].final_link = Some(ROOT);
        for node in self.nodes.iter_mut().skip(1) {
            node.final_link = None;
        }
        for id in 1..self.nodes.len() {
            self.final_link(id);
        }
        self.final_links_fresh = true;
    }
}

impl Default for AhoCorasick {
    fn default() -> Self {
        Self::new()
    }
}

/// A single pattern occurrence reported by [`AhoCorasick::find_iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    start: usize,
    end: usize,
}

impl Match {
    /// Byte offset of the first matched character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last matched character.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Streaming iterator over pattern occurrences in a text.
///
/// Created by [`AhoCorasick::find_iter`]. Borrows the automaton
/// mutably for its lifetime: scanning resolves and memoizes links on
/// demand.
pub struct FindIter<'a, 't> {
    automaton: &'a mut AhoCorasick,
    text: std::str::CharIndices<'t>,
    state: StateId,
    pending: VecDeque<Match>,
}

impl Iterator for FindIter<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Some(found);
            }

            let (offset, c) = self.text.next()?;
            let symbol = match Symbol::from_char(c) {
                Ok(symbol) => symbol,
                Err(_) => {
                    // No pattern contains this character; the scan can
                    // only continue from scratch.
                    self.state = ROOT;
                    continue;
                }
            };
            self.state = self.automaton.next_state(self.state, symbol);

            // Every pattern ending here sits on the final-link chain,
            // deepest node (longest pattern) first.
            let end = offset + c.len_utf8();
            let mut terminal = self.automaton.final_link(self.state);
            while terminal != ROOT {
                let start = end - self.automaton.nodes[terminal].depth;
                self.pending.push_back(Match { start, end });
                let up = self.automaton.suffix_link(terminal);
                terminal = self.automaton.final_link(up);
            }
        }
    }
}

/// Folded transition table compiled from an [`AhoCorasick`] automaton.
///
/// One dense row per automaton state over the `a`..=`z` alphabet. The
/// table is a complete DFA: every entry names its destination state and
/// carries a flag telling the consumer whether a pattern ends at (or
/// suffix-links out of) the destination, so a plain table walk can skip
/// all non-matching text and hand control back to the automaton only
/// where a match must be handled.
///
/// State ids are the automaton's own ids; the scan starts at
/// [`ScanTable::root`]. The table is a snapshot: patterns pushed after
/// compiling are not reflected in it.
#[derive(Debug, Clone)]
pub struct ScanTable {
    rows: Vec<[ScanStep; ALPHABET_LEN]>,

    /// Per-state flag: a pattern ends at this state or along its
    /// suffix chain.
    match_states: Vec<bool>,
}

impl ScanTable {
    /// The scan starting state.
    pub fn root(&self) -> StateId {
        ROOT
    }

    /// Number of states, which is also the number of rows.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// The folded transition out of `state` on `symbol`.
    pub fn step(&self, state: StateId, symbol: Symbol) -> ScanStep {
        self.rows[state][symbol.index()]
    }

    /// True when a pattern ends at `state` or along its suffix chain.
    ///
    /// Equals the `enters_match` flag of every entry leading to
    /// `state`.
    pub fn is_match_state(&self, state: StateId) -> bool {
        self.match_states[state]
    }
}

/// One folded transition: destination state plus match-region flag.
///
/// Replaces a single-integer encoding in which `0` would mean both
/// "dead" and "check for a match here": the destination is always
/// present, and entering a match region is its own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    /// Destination state of the goto function.
    pub next: StateId,

    /// True when a pattern ends at `next` or along its suffix chain,
    /// i.e. the consumer must handle a match before stepping on.
    pub enters_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(automaton: &mut AhoCorasick, text: &str) -> Vec<(usize, usize)> {
        automaton
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    #[test]
    fn empty_index_matches_nothing() {
        let mut patterns = AhoCorasick::new();
        assert!(patterns.is_empty());
        assert_eq!(patterns.find_iter("anything").count(), 0);
    }

    #[test]
    fn classic_scenario() {
        let mut patterns =
            AhoCorasick::from_patterns(["he", "she", "his", "hers"]).unwrap();
        assert_eq!(
            spans(&mut patterns, "ahishers"),
            vec![(1, 4), (3, 6), (4, 6), (4, 8)]
        );
    }

    #[test]
    fn trie_shares_prefixes() {
        let mut patterns = AhoCorasick::new();
        patterns.push("he").unwrap();
        patterns.push("hers").unwrap();
        // root + h,e,r,s
        assert_eq!(patterns.state_count(), 5);
        assert_eq!(patterns.pattern_count(), 2);
    }

    #[test]
    fn duplicate_patterns_report_once_per_occurrence() {
        let mut patterns = AhoCorasick::new();
        patterns.push("ab").unwrap();
        patterns.push("ab").unwrap();
        assert_eq!(patterns.pattern_count(), 2);
        assert_eq!(spans(&mut patterns, "xabx"), vec![(1, 3)]);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let mut patterns = AhoCorasick::new();
        assert_eq!(patterns.push(""), Err(AutomatonError::EmptyPattern));
        assert!(patterns.is_empty());
    }

    #[test]
    fn rejected_pattern_leaves_index_untouched() {
        let mut patterns = AhoCorasick::from_patterns(["ab"]).unwrap();
        let states = patterns.state_count();
        assert_eq!(
            patterns.push("a_b"),
            Err(AutomatonError::InvalidSymbol('_'))
        );
        assert_eq!(patterns.state_count(), states);
        assert_eq!(patterns.pattern_count(), 1);
    }

    #[test]
    fn patterns_and_text_are_case_folded() {
        let mut patterns = AhoCorasick::from_patterns(["He"]).unwrap();
        assert_eq!(spans(&mut patterns, "tHE"), vec![(1, 3)]);
    }

    #[test]
    fn separators_reset_the_scan() {
        let mut patterns = AhoCorasick::from_patterns(["ab"]).unwrap();
        assert_eq!(patterns.find_iter("a b").count(), 0);
        assert_eq!(patterns.find_iter("a\u{e9}b").count(), 0);
        assert_eq!(spans(&mut patterns, "ab ab"), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn overlapping_matches_at_one_end_are_longest_first() {
        let mut patterns = AhoCorasick::from_patterns(["abab", "bab", "ab"]).unwrap();
        assert_eq!(
            spans(&mut patterns, "abab"),
            vec![(0, 2), (0, 4), (1, 4), (2, 4)]
        );
    }

    #[test]
    fn push_after_queries_discards_stale_links() {
        let mut patterns = AhoCorasick::new();
        patterns.push("ab").unwrap();
        // Force lazy resolution against the small trie.
        assert_eq!(spans(&mut patterns, "zab"), vec![(1, 3)]);

        // "b" now terminates a pattern; stale links from the first
        // resolution would hide the new match entirely.
        patterns.push("b").unwrap();
        assert_eq!(spans(&mut patterns, "zab"), vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn resolved_suffix_links_strictly_decrease_depth() {
        let mut patterns =
            AhoCorasick::from_patterns(["he", "she", "his", "hers", "sherlock"]).unwrap();
        patterns.find_iter("hishershe").count();
        for id in 1..patterns.nodes.len() {
            let link = patterns.suffix_link(id);
            assert!(
                patterns.nodes[link].depth < patterns.nodes[id].depth,
                "link of node {} does not shrink depth",
                id
            );
        }
    }

    #[test]
    fn scan_table_flags_are_consistent() {
        let mut patterns =
            AhoCorasick::from_patterns(["he", "she", "his", "hers"]).unwrap();
        let table = patterns.build_scan_table();

        assert_eq!(table.state_count(), patterns.state_count());
        assert!(!table.is_match_state(table.root()));
        for state in 0..table.state_count() {
            for symbol in Symbol::all() {
                let step = table.step(state, symbol);
                assert!(step.next < table.state_count());
                assert_eq!(step.enters_match, table.is_match_state(step.next));
            }
        }
    }

    #[test]
    fn scan_table_walk_agrees_with_find_iter() {
        let mut patterns =
            AhoCorasick::from_patterns(["he", "she", "his", "hers"]).unwrap();
        let table = patterns.build_scan_table();
        let text = "ahishershe";

        let mut state = table.root();
        let mut flagged_ends = Vec::new();
        for (position, c) in text.char_indices() {
            let step = table.step(state, Symbol::from_char(c).unwrap());
            if step.enters_match {
                flagged_ends.push(position + 1);
            }
            state = step.next;
        }

        let mut match_ends: Vec<usize> =
            patterns.find_iter(text).map(|m| m.end()).collect();
        match_ends.dedup();
        assert_eq!(flagged_ends, match_ends);
    }

    #[test]
    fn scan_table_on_empty_index() {
        let mut patterns = AhoCorasick::new();
        let table = patterns.build_scan_table();
        assert_eq!(table.state_count(), 1);
        for symbol in Symbol::all() {
            let step = table.step(table.root(), symbol);
            assert_eq!(step.next, table.root());
            assert!(!step.enters_match);
        }
    }

    #[test]
    fn rebuilding_after_push_reflects_new_patterns() {
        let mut patterns = AhoCorasick::from_patterns(["ab"]).unwrap();
        let before = patterns.build_scan_table();
        assert_eq!(before.state_count(), 3);

        patterns.push("b").unwrap();
        let after = patterns.build_scan_table();
        // The node for "b" is now a match region of its own.
        let b = Symbol::from_char('b').unwrap();
        assert!(after.step(after.root(), b).enters_match);
        assert!(!before.step(before.root(), b).enters_match);
    }
}
