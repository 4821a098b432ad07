//! # sexpr-calc
//!
//! sexpr-calc is an interpreter for parenthesized prefix arithmetic
//! expressions written in Rust. A line such as
//! `(+ 10 (* 5 2) (- 8 3) (/ 20 4))` is tokenized, parsed into a nested
//! expression tree and evaluated to a single number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate, parser::core::parse_expression},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, a tree of atoms and lists, and the
/// `Operator` set that may appear at the head of a list. The tree is built by
/// the parser and traversed by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse-time and evaluation-time failures are kept in two separate enums,
/// and a wrapping `Error` lets callers tell them apart after a whole line has
/// been processed. The `Display` output of every error is the message shown
/// to the user.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Splits a line into tokens.
/// - Builds an expression tree with recursive descent.
/// - Evaluates the tree to a number.
pub mod interpreter;
/// The interactive read loop.
///
/// Reads one expression per line, prints its result or error message, and
/// stops on `exit`, `quit` or the end of the input.
pub mod repl;
/// General helpers for numeric literals.
pub mod util;

/// Parses and evaluates a single line of input.
///
/// Nothing is kept between calls; each line gets a fresh expression tree.
///
/// # Errors
/// Returns [`Error::Syntax`] if the line cannot be parsed and [`Error::Eval`]
/// if the parsed tree cannot be evaluated. The error displays as the message
/// meant for the user.
///
/// # Examples
/// ```
/// use sexpr_calc::{error::Error, evaluate_line};
///
/// assert_eq!(evaluate_line("(+ 10 (* 5 2) (- 8 3) (/ 20 4))").unwrap(), 30.0);
///
/// let err = evaluate_line("(+ 1 2").unwrap_err();
/// assert!(matches!(err, Error::Syntax(_)));
/// assert_eq!(err.to_string(), "SYNTAX ERROR - Unexpected end of expression");
///
/// let err = evaluate_line("(% 1 2)").unwrap_err();
/// assert!(matches!(err, Error::Eval(_)));
/// assert_eq!(err.to_string(), "SYNTAX ERROR - Unknown operator %");
/// ```
pub fn evaluate_line(source: &str) -> Result<f64, Error> {
    let expr = parse_expression(source)?;
    let value = evaluate(&expr)?;

    log::debug!("{expr} evaluated to {value}");
    Ok(value)
}
