use std::fmt;

use crate::{
    normalize::{Infix, Operator, Token},
    CompileError, CompileResult,
};

/// An expression in postfix (reverse Polish) notation.
///
/// Only terminals and operators appear; grouping has been resolved by the
/// conversion. Values are produced by [`Infix::to_postfix`], which has already
/// checked that the operands and binary operators balance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix {
    pub(crate) tokens: Vec<Token>,
}

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// An entry of the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open,
    Operator(Operator),
}

// Priorities are plain functions of the operator so that no conversion can
// observe another's tables. Higher binds tighter. A pending operator is popped
// when its in-stack priority is strictly greater than the incoming priority;
// giving each operator an in-stack priority one above its incoming priority
// makes a repeated operator pop its predecessor (left associativity).

/// In-stack priority.
fn isp(item: Pending) -> u8 {
    match item {
        Pending::Open => 0,
        Pending::Operator(Operator::Or) => 2,
        Pending::Operator(Operator::Concat) => 4,
        Pending::Operator(Operator::Closure) => 6,
    }
}

/// Incoming priority. An opening parenthesis never pops anything.
fn icp(item: Pending) -> u8 {
    match item {
        Pending::Open => u8::MAX,
        Pending::Operator(Operator::Or) => 1,
        Pending::Operator(Operator::Concat) => 3,
        Pending::Operator(Operator::Closure) => 5,
    }
}

/// Accumulates the output and keeps the operand/operator balance.
struct Output {
    tokens: Vec<Token>,
    operands: usize,
    operators: usize,
}

impl Output {
    fn terminal(&mut self, ch: char) {
        self.tokens.push(Token::Terminal(ch));
        self.operands += 1;
    }

    /// Emit a popped stack entry. Closure is unary and is left out of the
    /// balance.
    fn operator(&mut self, item: Pending) -> CompileResult<()> {
        match item {
            Pending::Open => return Err(CompileError::UnmatchedParenthesis),
            Pending::Operator(Operator::Closure) => {}
            Pending::Operator(_) => self.operators += 1,
        }
        if let Pending::Operator(op) = item {
            self.tokens.push(Token::Operator(op));
        }
        Ok(())
    }
}

impl Infix {
    /// Convert to postfix notation with a shunting-yard parser.
    ///
    /// Fails with [`CompileError::Malformed`] unless there is exactly one more
    /// operand than binary operators, and with
    /// [`CompileError::UnmatchedParenthesis`] if the grouping is unbalanced.
    pub fn to_postfix(&self) -> CompileResult<Postfix> {
        let mut out = Output {
            tokens: Vec::with_capacity(self.tokens().len()),
            operands: 0,
            operators: 0,
        };
        let mut stack: Vec<Pending> = Vec::new();

        for &token in self.tokens() {
            let incoming = match token {
                Token::Terminal(ch) => {
                    out.terminal(ch);
                    continue;
                }
                Token::Close => {
                    loop {
                        match stack.pop() {
                            Some(Pending::Open) => break,
                            Some(item) => out.operator(item)?,
                            None => return Err(CompileError::UnmatchedParenthesis),
                        }
                    }
                    continue;
                }
                Token::Open => Pending::Open,
                Token::Operator(op) => Pending::Operator(op),
            };

            while let Some(&top) = stack.last() {
                if isp(top) <= icp(incoming) {
                    break;
                }
                stack.pop();
                out.operator(top)?;
            }
            stack.push(incoming);
        }

        while let Some(item) = stack.pop() {
            out.operator(item)?;
        }

        if out.operands != out.operators + 1 {
            return Err(CompileError::Malformed {
                operands: out.operands,
                operators: out.operators,
            });
        }

        let postfix = Postfix { tokens: out.tokens };
        debug!("converted {} to postfix {}", self, postfix);
        Ok(postfix)
    }
}
