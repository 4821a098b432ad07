/// The evaluator module walks expression trees and computes results.
///
/// The evaluator dispatches on the head of every list, evaluates the
/// remaining elements as operands and applies the arithmetic operator.
///
/// # Responsibilities
/// - Resolves the operator symbol of each list.
/// - Converts atoms in operand position into numbers.
/// - Reports runtime errors such as unknown operators or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads a line of raw text and produces a flat stream of tokens:
/// opening parentheses, closing parentheses and atoms. Whitespace only
/// separates tokens and never produces one.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the token stream produced by the lexer with one token
/// of lookahead and constructs nested [`crate::ast::Expr`] nodes by
/// recursive descent.
///
/// # Responsibilities
/// - Converts tokens into atoms and lists.
/// - Rejects unbalanced parentheses and lists that are too short.
pub mod parser;
