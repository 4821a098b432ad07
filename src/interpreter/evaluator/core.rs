use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::evaluator::arithmetic::apply_operator,
    util::num::parse_real,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a number.
///
/// An atom is read as a numeric literal. A list is an operator application:
/// its first element must be one of the atoms `+`, `-`, `*` or `/`, and every
/// remaining element is evaluated recursively to obtain the operands.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// - `UnknownOperator` if the head of a list is not an operator atom.
/// - `MissingOperator` if a list is empty.
/// - `InvalidNumber` if an operand atom is not a number.
/// - `DivisionByZero` if a `/` divisor evaluates to zero.
///
/// # Example
/// ```
/// use sexpr_calc::{
///     interpreter::{evaluator::core::evaluate, parser::core::parse_expression},
/// };
///
/// let expr = parse_expression("(- 10 2 3)").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), 5.0);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Atom(text) => parse_real(text),
        Expr::List(elements) => eval_application(elements),
    }
}

/// Evaluates the elements of a list as an operator application.
///
/// The operator is resolved before any operand is evaluated, so an unknown
/// operator is reported even when the operands are malformed too.
fn eval_application(elements: &[Expr]) -> EvalResult<f64> {
    let Some((head, operands)) = elements.split_first() else {
        return Err(RuntimeError::MissingOperator);
    };

    let op = resolve_operator(head)?;

    let values = operands.iter().map(evaluate).collect::<EvalResult<Vec<f64>>>()?;

    apply_operator(op, &values)
}

/// Resolves the head of a list into an [`Operator`].
fn resolve_operator(head: &Expr) -> EvalResult<Operator> {
    head.as_atom()
        .and_then(|symbol| symbol.parse().ok())
        .ok_or_else(|| RuntimeError::UnknownOperator { op: head.to_string() })
}
