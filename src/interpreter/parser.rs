/// Core parsing routines.
///
/// Contains the line-level entry point and the recursive descent over a
/// single expression.
pub mod core;

/// List parsing.
///
/// Collects the elements of a parenthesized form and enforces the minimum
/// length of an operator application.
pub mod list;
