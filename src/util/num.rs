use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Parses the text of an atom as a numeric literal.
///
/// Integers, decimals and exponent notation are accepted, as well as the
/// special values `inf` and `NaN`. All numbers are `f64`; there is no
/// separate integer type.
///
/// ## Errors
/// Returns `RuntimeError::InvalidNumber` carrying the atom text if it is not
/// a number.
///
/// ## Example
/// ```
/// use sexpr_calc::{error::RuntimeError, util::num::parse_real};
///
/// assert_eq!(parse_real("42").unwrap(), 42.0);
/// assert_eq!(parse_real("-2.5e1").unwrap(), -25.0);
/// assert_eq!(parse_real("x").unwrap_err(),
///            RuntimeError::InvalidNumber { token: "x".to_string() });
/// ```
pub fn parse_real(token: &str) -> EvalResult<f64> {
    token.parse().map_err(|_| RuntimeError::InvalidNumber { token: token.to_string() })
}
