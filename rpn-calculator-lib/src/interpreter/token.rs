use crate::interpreter::number::Number;
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str;
use string_builder::Builder;

/// A discrete part of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    OpenParenthesis,
    CloseParenthesis,
    /// A number the lexer has already resolved, e.g. from a sign-prefixed literal.
    Number(Number),
    /// Raw text that is classified during evaluation: a numeric literal, an operator, or neither.
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
            Token::Number(value) => write!(f, "{}", value),
            Token::Word(text) => write!(f, "{}", text),
        }
    }
}

impl str::FromStr for Token {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => Ok(Token::Word(input.to_string())),
        }
    }
}

/// Prints the given tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::number::Number;
/// use rpn_calculator::interpreter::token::{tokens_to_string, Token};
///
/// let tokens = vec![
///     Token::OpenParenthesis,
///     Token::Number(Number::Integer(-3)),
///     Token::CloseParenthesis,
///     Token::Word("4".to_string()),
///     Token::Word("+".to_string()),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "( -3 ) 4 +");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().unwrap_or_default()
}
