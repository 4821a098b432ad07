use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::list::parse_list,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one line of source text into an expression tree.
///
/// The whole line must form exactly one expression. A `)` left over after the
/// expression is reported as a stray closing parenthesis; any other leftover
/// token makes the line an invalid expression, so `- 8 3` is rejected rather
/// than silently read as the atom `-`.
///
/// # Parameters
/// - `source`: A single line of input.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfExpression` for empty input or a missing `)`.
/// - `UnexpectedClosingParen` for a `)` without a matching `(`.
/// - `InvalidExpression` for short lists or trailing tokens.
///
/// # Example
/// ```
/// use sexpr_calc::{ast::Expr, error::ParseError, interpreter::parser::core::parse_expression};
///
/// let expr = parse_expression("(+ 10 10 10)").unwrap();
/// assert_eq!(expr.to_string(), "(+ 10 10 10)");
///
/// assert_eq!(parse_expression("(+ 1)"), Err(ParseError::InvalidExpression));
/// assert_eq!(parse_expression(")"), Err(ParseError::UnexpectedClosingParen));
/// ```
pub fn parse_expression(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source);
    let mut iter = tokens.iter().peekable();

    let expr = read_from_tokens(&mut iter)?;

    match iter.peek() {
        None => {
            log::debug!("parsed {expr}");
            Ok(expr)
        },
        Some(Token::RParen) => Err(ParseError::UnexpectedClosingParen),
        Some(tok) => {
            log::debug!("trailing token {tok} after {expr}");
            Err(ParseError::InvalidExpression)
        },
    }
}

/// Reads a single expression from the front of a token stream.
///
/// Grammar: `expr := atom | "(" expr+ ")"`
///
/// An opening parenthesis starts a list, which is handed to [`parse_list`];
/// any atom token becomes an [`Expr::Atom`] as is. The parser performs no
/// operator validation; the first element of a list is only interpreted as
/// an operator during evaluation.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node. Exactly the tokens of that expression are
/// consumed.
///
/// # Errors
/// - `UnexpectedEndOfExpression` if the stream is empty.
/// - `UnexpectedClosingParen` if the stream starts with `)`.
/// - Any error raised while parsing a nested list.
pub fn read_from_tokens<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::LParen) => parse_list(tokens),
        Some(Token::RParen) => Err(ParseError::UnexpectedClosingParen),
        Some(Token::Atom(text)) => Ok(Expr::Atom(text.clone())),
        None => Err(ParseError::UnexpectedEndOfExpression),
    }
}
