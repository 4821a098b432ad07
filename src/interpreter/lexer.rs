use std::fmt;

use logos::Logos;

/// Represents a lexical token in a line of input.
///
/// Parentheses are always tokens of their own, even when they touch an atom,
/// so `(+ 1 2)` and `( + 1 2 )` produce the same stream. Whitespace of any
/// kind is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any run of characters that are neither whitespace nor parentheses,
    /// such as `42`, `2.5e3` or `+`.
    #[regex(r"[^\s()]+", |lex| lex.slice().to_string())]
    Atom(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Atom(text) => f.write_str(text),
        }
    }
}

/// Splits a line of source text into tokens.
///
/// Tokenizing never fails: any slice the lexer cannot classify is kept as an
/// atom, and the parser or evaluator decides whether it makes sense.
///
/// # Example
/// ```
/// use sexpr_calc::interpreter::lexer::tokenize;
///
/// let tokens: Vec<String> = tokenize("(+ 1 2)").iter().map(ToString::to_string).collect();
/// assert_eq!(tokens, ["(", "+", "1", "2", ")"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        tokens.push(token.unwrap_or_else(|()| Token::Atom(lexer.slice().to_string())));
    }

    log::debug!("tokenized {source:?} into {} tokens", tokens.len());
    tokens
}
