use crate::interpreter::error::CalculatorError;
use crate::interpreter::number::{to_number, Number};
use crate::interpreter::token::Token;
use log::trace;

/// Prefix of a number with an unary minus, e.g. `~3` for -3.
const MINUS_SIGIL: char = '~';
/// Prefix of a number with an unary plus, e.g. `$3` for 3.
const PLUS_SIGIL: char = '$';

/// Splits a line into tokens.
///
/// Tokens are separated by whitespace. Sign-prefixed numbers are converted right away,
/// so a sigil followed by anything but a number fails here. Everything else is passed on
/// as-is, to be classified during evaluation.
///
/// # Arguments
///
/// * `expression`: A text expression in reverse polish notation.
///
/// returns: The tokens of the expression, in order.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::number::Number;
/// use rpn_calculator::interpreter::token::Token;
/// # fn main() -> anyhow::Result<()> {
///
/// let tokens = tokenize("5 ~3 +")?;
/// assert_eq!(tokens[1], Token::Number(Number::Integer(-3)));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, CalculatorError> {
    let tokens = expression
        .split_whitespace()
        .map(tokenize_field)
        .collect::<Result<Vec<Token>, CalculatorError>>()?;
    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn tokenize_field(field: &str) -> Result<Token, CalculatorError> {
    if let Some(body) = field.strip_prefix(MINUS_SIGIL) {
        return Ok(Token::Number(-sigil_body(field, body)?));
    }
    if let Some(body) = field.strip_prefix(PLUS_SIGIL) {
        return Ok(Token::Number(sigil_body(field, body)?));
    }
    Ok(field.parse::<Token>().unwrap_or_else(|never| match never {}))
}

/// Reports a bad sigil body with the whole field, which is what the user typed.
fn sigil_body(field: &str, body: &str) -> Result<Number, CalculatorError> {
    to_number(body).map_err(|_| CalculatorError::MalformedNumber(field.to_string()))
}
