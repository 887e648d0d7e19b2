pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod number;
pub mod operator;
pub mod token;

use crate::interpreter::error::CalculatorError;
use crate::interpreter::number::Number;
use log::debug;

/// Evaluates one line of text holding an expression in reverse polish notation.
///
/// # Arguments
///
/// * `expression`: Whitespace-separated tokens, e.g. `3 4 +`.
///
/// returns: The value of the expression, or the reason it could not be evaluated.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluate;
/// use rpn_calculator::interpreter::number::Number;
/// # fn main() -> anyhow::Result<()> {
///
/// let value = evaluate("5 1 2 + 4 ** + 3 -")?;
/// assert_eq!(value, Number::Integer(83));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<Number, CalculatorError> {
    let tokens = lexer::tokenize(expression)?;
    debug!("evaluating {}", token::tokens_to_string(&tokens));
    let result = evaluator::calculate(&tokens);
    debug!("result {:?}", result);
    result
}
