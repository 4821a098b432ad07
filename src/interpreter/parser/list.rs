use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, read_from_tokens},
    },
};

/// Smallest number of elements a list may have: an operator and two
/// operands.
pub const MIN_LIST_LEN: usize = 3;

/// Parses the remainder of a list whose `(` has already been consumed.
///
/// Elements are read with [`read_from_tokens`] until the matching `)`,
/// which is consumed as well. The length check applies to every
/// parenthesized form, not only to operator applications.
///
/// # Errors
/// - `UnexpectedEndOfExpression` if the stream ends before the `)`.
/// - `InvalidExpression` if the list has fewer than [`MIN_LIST_LEN`]
///   elements.
pub(in crate::interpreter::parser) fn parse_list<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut elements = Vec::new();

    loop {
        match tokens.peek() {
            Some(Token::RParen) => {
                tokens.next();
                break;
            },
            Some(_) => elements.push(read_from_tokens(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfExpression),
        }
    }

    if elements.len() < MIN_LIST_LEN {
        return Err(ParseError::InvalidExpression);
    }

    Ok(Expr::List(elements))
}
