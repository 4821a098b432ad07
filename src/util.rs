/// Numeric literal helpers.
///
/// This module turns atom text into the floating-point numbers the evaluator
/// works with, and reports atoms that are not numbers.
pub mod num;
