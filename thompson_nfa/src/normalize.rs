use std::fmt;

/// A binary or unary operator of the expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Explicit concatenation, inserted by [`normalize`]
    Concat,
    /// Alternation, `|`
    Or,
    /// Kleene closure, `*`
    Closure,
}

impl Operator {
    /// The character used when rendering the operator.
    pub fn as_char(self) -> char {
        match self {
            Operator::Concat => '.',
            Operator::Or => '|',
            Operator::Closure => '*',
        }
    }
}

/// One symbol of an infix or postfix expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Terminal(char),
    Operator(Operator),
    Open,
    Close,
}

impl Token {
    fn from_char(ch: char) -> Token {
        match ch {
            '|' => Token::Operator(Operator::Or),
            '*' => Token::Operator(Operator::Closure),
            '(' => Token::Open,
            ')' => Token::Close,
            ch => Token::Terminal(ch),
        }
    }

    /// Whether a concatenation may follow this token.
    fn ends_operand(self) -> bool {
        matches!(
            self,
            Token::Terminal(_) | Token::Close | Token::Operator(Operator::Closure)
        )
    }

    /// Whether this token may begin the right operand of a concatenation.
    fn starts_operand(self) -> bool {
        matches!(self, Token::Terminal(_) | Token::Open)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Terminal(ch) => write!(f, "{}", ch),
            Token::Operator(op) => write!(f, "{}", op.as_char()),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
        }
    }
}

/// An infix expression with blanks removed and every concatenation explicit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Infix {
    tokens: Vec<Token>,
}

impl Infix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Strip whitespace from `raw` and insert an explicit concatenation operator
/// between every pair of adjacent symbols that are implicitly sequenced.
///
/// A concatenation goes before a terminal or `(` whenever the previous symbol
/// is a terminal, `)` or `*`. Empty input gives an empty expression, which
/// the postfix converter rejects.
pub fn normalize(raw: &str) -> Infix {
    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len() * 2);

    for token in raw.chars().filter(|ch| !ch.is_whitespace()).map(Token::from_char) {
        if let Some(prev) = tokens.last() {
            if token.starts_operand() && prev.ends_operand() {
                tokens.push(Token::Operator(Operator::Concat));
            }
        }
        tokens.push(token);
    }

    let infix = Infix { tokens };
    debug!("normalized {:?} to {}", raw, infix);
    infix
}
