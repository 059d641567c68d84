use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};

use crate::nfa::{Nfa, StateId, Symbol};
use crate::table::TransitionTable;

/// A matcher that decides membership of whole strings in an NFA's language
pub struct Matcher<'a> {
    nfa: &'a Nfa,
    table: Cow<'a, TransitionTable>,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA, indexing its transitions once
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            table: Cow::Owned(TransitionTable::new(nfa)),
        }
    }

    /// Create a matcher from a table already built for `nfa`.
    pub fn with_table(nfa: &'a Nfa, table: &'a TransitionTable) -> Self {
        Self {
            nfa,
            table: Cow::Borrowed(table),
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Check if the entire input is accepted.
    ///
    /// Searches breadth first over pairs of (state, characters consumed). A
    /// state can be reached at several depths of the input, so the pair, not
    /// the state alone, is what gets marked visited. The pair space is finite
    /// and so the search always terminates.
    pub fn is_match(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let accept = self.nfa.accept();

        let mut queue: VecDeque<(StateId, usize)> = VecDeque::new();
        let mut visited: HashSet<(StateId, usize)> = HashSet::new();
        let start = (self.nfa.start(), 0);
        visited.insert(start);
        queue.push_back(start);

        while let Some((state, consumed)) = queue.pop_front() {
            trace!("visiting state {} after {} character(s)", state, consumed);
            if state == accept && consumed == chars.len() {
                return true;
            }

            for next in self.table.destinations(state, Symbol::Epsilon) {
                if visited.insert((next, consumed)) {
                    queue.push_back((next, consumed));
                }
            }

            if let Some(&ch) = chars.get(consumed) {
                for next in self.table.destinations(state, Symbol::Char(ch)) {
                    if visited.insert((next, consumed + 1)) {
                        queue.push_back((next, consumed + 1));
                    }
                }
            }
        }

        debug!("rejected {:?} after visiting {} pair(s)", input, visited.len());
        false
    }
}
