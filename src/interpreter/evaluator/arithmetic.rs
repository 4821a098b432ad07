use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies an operator to its evaluated operands.
///
/// - `+` sums all operands.
/// - `*` multiplies all operands.
/// - `-` subtracts the sum of the remaining operands from the first one.
/// - `/` divides the first operand by the product of the remaining ones.
///
/// Without operands `+` and `-` yield `0` and `*` and `/` yield `1`. With a
/// single operand `-` and `/` return it unchanged.
///
/// # Errors
/// Returns `DivisionByZero` if the product of the divisors of `/` is zero.
///
/// # Example
/// ```
/// use sexpr_calc::{ast::Operator, interpreter::evaluator::arithmetic::apply_operator};
///
/// assert_eq!(apply_operator(Operator::Sub, &[10.0, 2.0, 3.0]).unwrap(), 5.0);
/// assert_eq!(apply_operator(Operator::Div, &[100.0, 5.0, 2.0]).unwrap(), 10.0);
/// assert!(apply_operator(Operator::Div, &[1.0, 0.0]).is_err());
/// ```
pub fn apply_operator(op: Operator, operands: &[f64]) -> EvalResult<f64> {
    log::trace!("applying {op} to {operands:?}");

    match op {
        Operator::Add => Ok(operands.iter().sum()),
        Operator::Mul => Ok(operands.iter().product()),
        Operator::Sub => match operands.split_first() {
            Some((first, rest)) => Ok(first - rest.iter().sum::<f64>()),
            None => Ok(0.0),
        },
        Operator::Div => match operands.split_first() {
            Some((first, rest)) => {
                let divisor = rest.iter().product::<f64>();
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(first / divisor)
            },
            None => Ok(1.0),
        },
    }
}
