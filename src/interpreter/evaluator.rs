/// Core evaluation logic.
///
/// Walks the expression tree, resolves operators and evaluates operands.
pub mod core;

/// Arithmetic evaluation.
///
/// Applies an operator to a sequence of already evaluated operands.
pub mod arithmetic;
