/*!
This crate compiles regular expressions into nondeterministic finite automata
with Thompson's construction and decides whether whole strings belong to the
language they denote.

The expression language is small on purpose:

* any character other than `|`, `*`, `(` and `)` is a terminal matching
  itself,
* juxtaposition is concatenation,
* `|` is alternation and binds loosest,
* `*` is Kleene closure and binds tightest,
* parentheses group, and whitespace is ignored.

Matching is always against the entire candidate string; there is no search
for a match inside a longer haystack.

# Example

```
use retonfa::Regex;

let re = Regex::new("(a|b)*(abcdef)").unwrap();
assert!(re.is_match("abcdef"));
assert!(re.is_match("ababbaabcdef"));
assert!(!re.is_match("abcdefg"));
```

Malformed expressions are reported instead of compiled:

```
use retonfa::{CompileError, Regex};

assert_eq!(
    Regex::new("a|").unwrap_err(),
    CompileError::Malformed { operands: 1, operators: 1 },
);
```

# Inspecting the automaton

[`Regex::table`] exposes the transition table, whose `Display` implementation
renders one row per state and one column per symbol:

```
use retonfa::Regex;

let re = Regex::new("a").unwrap();
print!("{}", re.table());
```

# Crate features

* **logging** - Emits compile and search diagnostics through the `log` crate.
*/

#![deny(missing_docs)]

use std::fmt;
use std::str::FromStr;

pub use thompson_nfa::{
    accepts, compile, CompileError, CompileResult, Matcher, Nfa, Postfix, StateId, Symbol,
    Transition, TransitionTable,
};

/// A compiled regular expression.
///
/// Holds the automaton together with its transition table so that repeated
/// calls to [`Regex::is_match`] do not re-index the transitions. A `Regex` is
/// immutable once built and can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    postfix: Postfix,
    nfa: Nfa,
    table: TransitionTable,
}

impl Regex {
    /// Compiles an infix regular expression.
    ///
    /// Returns an error if the expression's operators and operands do not
    /// balance or its parentheses are unmatched.
    pub fn new(pattern: &str) -> Result<Regex, CompileError> {
        let postfix = thompson_nfa::postfix(pattern)?;
        let nfa = thompson_nfa::Compiler::new().compile(&postfix)?;
        let table = TransitionTable::new(&nfa);
        Ok(Regex { pattern: pattern.to_string(), postfix, nfa, table })
    }

    /// Returns true if and only if the whole of `candidate` is in the
    /// language of this expression.
    ///
    /// Characters that appear in no transition simply lead to rejection.
    pub fn is_match(&self, candidate: &str) -> bool {
        Matcher::with_table(&self.nfa, &self.table).is_match(candidate)
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the expression in postfix notation, with `.` standing for
    /// concatenation.
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    /// Returns the compiled automaton.
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Returns the transition table of the compiled automaton.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }
}

impl fmt::Display for Regex {
    /// Shows the original pattern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Regex {
    type Err = CompileError;

    /// Attempts to compile a string into a regular expression.
    fn from_str(s: &str) -> Result<Regex, CompileError> {
        Regex::new(s)
    }
}
