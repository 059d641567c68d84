use crate::{
    nfa::Nfa,
    normalize::{Operator, Token},
    postfix::Postfix,
    CompileError, CompileResult,
};

/// Compiler that assembles a Thompson NFA from postfix notation
pub struct Compiler {
    stack: Vec<Nfa>,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Compile postfix notation into an NFA.
    ///
    /// The single fragment left after the whole stream is consumed is given
    /// a fresh start state and a fresh accepting state, each joined to it by
    /// an epsilon edge.
    pub fn compile(mut self, postfix: &Postfix) -> CompileResult<Nfa> {
        for &token in postfix.tokens() {
            let fragment = match token {
                Token::Terminal(ch) => Nfa::terminal(ch),
                Token::Operator(Operator::Concat) => {
                    let (left, right) = self.pop_pair(Operator::Concat)?;
                    self.compile_concat(left, right)
                }
                Token::Operator(Operator::Or) => {
                    let (left, right) = self.pop_pair(Operator::Or)?;
                    self.compile_alternation(left, right)
                }
                Token::Operator(Operator::Closure) => {
                    let inner = self.pop(Operator::Closure)?;
                    self.compile_closure(inner)
                }
                Token::Open | Token::Close => {
                    return Err(CompileError::Internal(format!(
                        "parenthesis in postfix notation {}",
                        postfix
                    )))
                }
            };
            self.stack.push(fragment);
        }

        if self.stack.len() != 1 {
            return Err(CompileError::Internal(format!(
                "postfix notation {} reduced to {} automata",
                postfix,
                self.stack.len()
            )));
        }
        let body = self.stack.pop().ok_or_else(|| {
            CompileError::Internal("empty fragment stack".to_string())
        })?;

        let mut nfa = Nfa::scaffold();
        nfa.append(body);
        let end = nfa.add_state();
        nfa.add_epsilon(nfa.accept(), end);
        nfa.set_accept(end);

        debug!(
            "compiled {} into {} states and {} transitions",
            postfix,
            nfa.state_count(),
            nfa.transitions().len()
        );
        Ok(nfa)
    }

    fn pop(&mut self, op: Operator) -> CompileResult<Nfa> {
        self.stack.pop().ok_or_else(|| {
            CompileError::Internal(format!("missing operand for '{}'", op.as_char()))
        })
    }

    /// Pop the right operand, then the left one.
    fn pop_pair(&mut self, op: Operator) -> CompileResult<(Nfa, Nfa)> {
        let right = self.pop(op)?;
        let left = self.pop(op)?;
        Ok((left, right))
    }

    /// The accepting state of `left` becomes the start of `right`.
    fn compile_concat(&mut self, mut left: Nfa, right: Nfa) -> Nfa {
        trace!("concat: {} + {} states", left.state_count(), right.state_count());
        left.append(right);
        left
    }

    /// A shared start branches into both operands, whose ends converge on a
    /// shared accepting state.
    fn compile_alternation(&mut self, left: Nfa, right: Nfa) -> Nfa {
        trace!("alternation: {} | {} states", left.state_count(), right.state_count());
        let mut nfa = Nfa::scaffold();
        let left_accept = left.accept();
        let branch = nfa.append(left).state(left_accept);

        let right_start = nfa.add_state();
        nfa.add_epsilon(nfa.start(), right_start);
        nfa.append(right);

        let join = nfa.add_state();
        nfa.add_epsilon(branch, join);
        nfa.add_epsilon(nfa.accept(), join);
        nfa.set_accept(join);
        nfa
    }

    /// Zero or more repetitions of `inner`, built only from epsilon edges.
    ///
    /// Both the skip and the exit go to a fresh state with no outgoing edges.
    /// The accepting state of `inner` may still lead back into its own body,
    /// so skipping must never land on it.
    fn compile_closure(&mut self, mut inner: Nfa) -> Nfa {
        trace!("closure: {} states", inner.state_count());
        let (start, accept) = (inner.start(), inner.accept());
        let exit = inner.add_state();
        inner.add_epsilon(accept, start);
        inner.add_epsilon(accept, exit);
        inner.add_epsilon(start, exit);
        inner.set_accept(exit);

        let mut nfa = Nfa::scaffold();
        nfa.append(inner);
        nfa
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
