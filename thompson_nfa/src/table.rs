use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::nfa::{Nfa, StateId, Symbol};

/// Index from `(state, symbol)` to the set of destination states.
///
/// Derived from an [`Nfa`]'s transitions and never written back. A pair may
/// map to several destinations; that is the nondeterminism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    edges: HashMap<(StateId, Symbol), BTreeSet<StateId>>,
    alphabet: BTreeSet<Symbol>,
    state_count: usize,
}

impl TransitionTable {
    pub fn new(nfa: &Nfa) -> Self {
        let mut edges: HashMap<(StateId, Symbol), BTreeSet<StateId>> = HashMap::new();
        let mut alphabet = BTreeSet::new();

        for t in nfa.transitions() {
            edges.entry((t.from, t.symbol)).or_default().insert(t.to);
            alphabet.insert(t.symbol);
        }

        TransitionTable {
            edges,
            alphabet,
            state_count: nfa.state_count(),
        }
    }

    /// The states reachable from `state` over one `symbol` edge, in
    /// ascending order.
    pub fn destinations(
        &self,
        state: StateId,
        symbol: Symbol,
    ) -> impl Iterator<Item = StateId> + '_ {
        self.edges
            .get(&(state, symbol))
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    /// Every symbol that labels some transition, epsilon first.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }
}

/// One row per state, one column per symbol.
impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state |")?;
        for symbol in &self.alphabet {
            write!(f, " {:<8}|", symbol.to_string())?;
        }
        writeln!(f)?;

        write!(f, "------+")?;
        for _ in &self.alphabet {
            write!(f, "---------+")?;
        }
        writeln!(f)?;

        for state in 0..self.state_count {
            write!(f, "{:>5} |", state)?;
            for &symbol in &self.alphabet {
                let cell = self
                    .destinations(state, symbol)
                    .map(|to| to.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, " {:<8}|", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn test_nondeterministic_destinations() {
        let nfa = compile("a|b").unwrap();
        let table = TransitionTable::new(&nfa);
        assert_eq!(
            table.destinations(1, Symbol::Epsilon).collect::<Vec<_>>(),
            vec![2, 4]
        );
        assert_eq!(table.destinations(2, Symbol::Char('a')).collect::<Vec<_>>(), vec![3]);
        assert_eq!(table.destinations(2, Symbol::Char('b')).count(), 0);
        assert_eq!(table.destinations(99, Symbol::Epsilon).count(), 0);
    }

    #[test]
    fn test_alphabet() {
        let table = TransitionTable::new(&compile("b*a").unwrap());
        assert_eq!(
            table.alphabet().iter().copied().collect::<Vec<_>>(),
            vec![Symbol::Epsilon, Symbol::Char('a'), Symbol::Char('b')]
        );
    }

    #[test]
    fn test_display() {
        let table = TransitionTable::new(&compile("a").unwrap());
        let expected = "\
state | ε       | a       |
------+---------+---------+
    0 | 1       |         |
    1 |         | 2       |
    2 | 3       |         |
    3 |         |         |
";
        assert_eq!(table.to_string(), expected);
    }
}
