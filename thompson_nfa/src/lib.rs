//! Thompson NFA Compiler
//!
//! This library compiles regular expressions written in infix notation into a
//! nondeterministic finite automaton using Thompson's construction, and decides
//! whether a candidate string belongs to the language of that automaton.
//!
//! The supported syntax is deliberately small: single-character terminals,
//! alternation (`|`), Kleene closure (`*`), grouping parentheses and implicit
//! concatenation. Whitespace in an expression is ignored.
//!
//! Compilation runs in three stages:
//! - [`normalize`] strips blanks and spells out every concatenation.
//! - [`Infix::to_postfix`] converts to postfix notation with a shunting-yard
//!   parser and checks the operand/operator balance.
//! - [`Compiler`] assembles the automaton from the postfix stream.
//!
//! ```
//! let nfa = thompson_nfa::compile("(a|b)*(abcdef)").unwrap();
//! assert!(thompson_nfa::accepts(&nfa, "ababbaabcdef"));
//! assert!(!thompson_nfa::accepts(&nfa, "abcdefg"));
//! ```

#[macro_use]
mod macros;

pub mod compiler;
pub mod matcher;
pub mod nfa;
pub mod normalize;
pub mod postfix;
pub mod table;

pub use compiler::Compiler;
pub use matcher::Matcher;
pub use nfa::{Nfa, Remap, StateId, Symbol, Transition};
pub use normalize::{normalize, Infix, Operator, Token};
pub use postfix::Postfix;
pub use table::TransitionTable;

/// The result of compiling an expression to a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The expression does not have exactly one more operand than binary
    /// operators, e.g. `a|` or an empty expression.
    Malformed { operands: usize, operators: usize },
    /// A closing parenthesis without an open group, or a group left open.
    UnmatchedParenthesis,
    /// The postfix stream did not reduce to a single automaton.
    Internal(String),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Malformed { operands, operators } => write!(
                f,
                "malformed expression: {} operand(s) for {} binary operator(s)",
                operands, operators
            ),
            CompileError::UnmatchedParenthesis => {
                write!(f, "malformed expression: unmatched parenthesis")
            }
            CompileError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for CompileError {}

/// Convert an infix expression to postfix notation without building anything.
pub fn postfix(pattern: &str) -> CompileResult<Postfix> {
    normalize(pattern).to_postfix()
}

/// Compile an infix expression into an NFA.
pub fn compile(pattern: &str) -> CompileResult<Nfa> {
    let postfix = postfix(pattern)?;
    Compiler::new().compile(&postfix)
}

/// Decide whether the whole of `candidate` is in the language of `nfa`.
///
/// This rebuilds the transition table on every call. Use a [`Matcher`] to
/// test many candidates against one automaton.
pub fn accepts(nfa: &Nfa, candidate: &str) -> bool {
    Matcher::new(nfa).is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_and_accept() {
        let nfa = compile("ab|c").unwrap();
        assert!(accepts(&nfa, "ab"));
        assert!(accepts(&nfa, "c"));
        assert!(!accepts(&nfa, "abc"));
    }

    #[test]
    fn test_malformed_never_builds() {
        assert_eq!(
            compile("a|"),
            Err(CompileError::Malformed { operands: 1, operators: 1 })
        );
        assert_eq!(compile("(a"), Err(CompileError::UnmatchedParenthesis));
    }

    #[test]
    fn test_error_display() {
        let err = CompileError::Malformed { operands: 0, operators: 0 };
        assert_eq!(
            err.to_string(),
            "malformed expression: 0 operand(s) for 0 binary operator(s)"
        );
        assert_eq!(
            CompileError::Internal("stack".into()).to_string(),
            "internal error: stack"
        );
    }
}
