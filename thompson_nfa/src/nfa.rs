use std::collections::BTreeSet;
use std::fmt;

/// A state ID in the NFA
pub type StateId = usize;

/// The label of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Taken without consuming input
    Epsilon,
    /// Taken by consuming exactly this character
    Char(char),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => f.write_str("ε"),
            Symbol::Char(ch) => write!(f, "{}", ch),
        }
    }
}

/// A single edge of the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Symbol,
}

impl Transition {
    pub fn new(from: StateId, to: StateId, symbol: Symbol) -> Self {
        Transition { from, to, symbol }
    }
}

/// The id shift applied to an automaton appended onto another.
///
/// Returned by [`Nfa::append`] so callers can locate states of the appended
/// automaton inside the merged one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remap {
    offset: StateId,
}

impl Remap {
    /// Where `id` of the appended automaton lives after the merge.
    pub fn state(&self, id: StateId) -> StateId {
        id + self.offset
    }

    pub fn transition(&self, t: Transition) -> Transition {
        Transition::new(self.state(t.from), self.state(t.to), t.symbol)
    }
}

/// A Thompson NFA.
///
/// States are the ids `0..=last_state()`; the transitions are the only record
/// of structure. Every fragment built by the compiler keeps its accepting
/// state as its highest id, which is what lets [`Nfa::append`] fuse the
/// accepting state of one automaton with the start of the next.
///
/// Only the compiler mutates an `Nfa`. Once returned it is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    transitions: Vec<Transition>,
    last: StateId,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    /// Two states, 0 and 1, with no transitions between them.
    pub(crate) fn pair() -> Self {
        Nfa {
            transitions: Vec::new(),
            last: 1,
            start: 0,
            accept: 1,
        }
    }

    /// Accepts exactly the one-character string `ch`.
    pub(crate) fn terminal(ch: char) -> Self {
        let mut nfa = Nfa::pair();
        nfa.add_transition(0, 1, Symbol::Char(ch));
        nfa
    }

    /// Two states joined by an epsilon edge. Appending onto a scaffold puts a
    /// fresh entry state in front of the appended automaton.
    pub(crate) fn scaffold() -> Self {
        let mut nfa = Nfa::pair();
        nfa.add_epsilon(0, 1);
        nfa
    }

    /// Allocate a new state after every existing one.
    pub(crate) fn add_state(&mut self) -> StateId {
        self.last += 1;
        self.last
    }

    pub(crate) fn add_transition(&mut self, from: StateId, to: StateId, symbol: Symbol) {
        debug_assert!(from <= self.last && to <= self.last);
        self.transitions.push(Transition::new(from, to, symbol));
    }

    pub(crate) fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.add_transition(from, to, Symbol::Epsilon);
    }

    pub(crate) fn set_accept(&mut self, state: StateId) {
        debug_assert!(state <= self.last);
        self.accept = state;
    }

    /// Append `other` after this automaton, consuming it.
    ///
    /// Every id of `other` is shifted by this automaton's last state id, so
    /// the start of `other` lands on the current last state and the two
    /// become one state. The merged automaton's last and accepting states
    /// are those of `other`, shifted.
    pub(crate) fn append(&mut self, other: Nfa) -> Remap {
        let remap = Remap { offset: self.last };
        self.transitions
            .extend(other.transitions.into_iter().map(|t| remap.transition(t)));
        self.last = remap.state(other.last);
        self.accept = remap.state(other.accept);
        trace!(
            "appended automaton at offset {}, last state now {}",
            remap.offset,
            self.last
        );
        remap
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// The highest state id in use.
    pub fn last_state(&self) -> StateId {
        self.last
    }

    pub fn state_count(&self) -> usize {
        self.last + 1
    }

    /// The transitions in the order they were added.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Every non-epsilon symbol that labels some transition.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions
            .iter()
            .filter_map(|t| match t.symbol {
                Symbol::Char(ch) => Some(ch),
                Symbol::Epsilon => None,
            })
            .collect()
    }

    /// Whether every referenced state lies within `0..=last_state()`.
    pub fn ids_in_range(&self) -> bool {
        self.start <= self.last
            && self.accept <= self.last
            && self
                .transitions
                .iter()
                .all(|t| t.from <= self.last && t.to <= self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal() {
        let nfa = Nfa::terminal('a');
        assert_eq!(nfa.start(), 0);
        assert_eq!(nfa.accept(), 1);
        assert_eq!(nfa.transitions(), &[Transition::new(0, 1, Symbol::Char('a'))]);
    }

    #[test]
    fn test_append_fuses_accept_with_start() {
        let mut left = Nfa::terminal('a');
        let right = Nfa::terminal('b');
        let remap = left.append(right);

        assert_eq!(remap.state(0), 1);
        assert_eq!(left.accept(), 2);
        assert_eq!(left.last_state(), 2);
        assert_eq!(
            left.transitions(),
            &[
                Transition::new(0, 1, Symbol::Char('a')),
                Transition::new(1, 2, Symbol::Char('b')),
            ]
        );
    }

    #[test]
    fn test_append_after_add_state() {
        let mut nfa = Nfa::scaffold();
        let fresh = nfa.add_state();
        assert_eq!(fresh, 2);
        // Accept is not moved by allocation.
        assert_eq!(nfa.accept(), 1);

        let remap = nfa.append(Nfa::terminal('x'));
        assert_eq!(remap.state(0), fresh);
        assert_eq!(nfa.accept(), 3);
        assert!(nfa.ids_in_range());
    }

    #[test]
    fn test_remap_transition() {
        let remap = Remap { offset: 4 };
        assert_eq!(
            remap.transition(Transition::new(0, 1, Symbol::Epsilon)),
            Transition::new(4, 5, Symbol::Epsilon)
        );
    }

    #[test]
    fn test_alphabet_skips_epsilon() {
        let mut nfa = Nfa::scaffold();
        nfa.append(Nfa::terminal('b'));
        nfa.append(Nfa::terminal('a'));
        assert_eq!(nfa.alphabet().into_iter().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn test_symbol_order_puts_epsilon_first() {
        assert!(Symbol::Epsilon < Symbol::Char('\0'));
        assert_eq!(Symbol::Epsilon.to_string(), "ε");
    }
}
