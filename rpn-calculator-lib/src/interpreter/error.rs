use thiserror::Error;

/// Everything that can go wrong while tokenizing or evaluating one expression.
///
/// Each variant carries the text shown to the user. None of them are fatal to the caller:
/// they end the current expression only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid number: {0}")]
    MalformedNumber(String),
    #[error("Unknown token: {0}")]
    UnknownToken(String),
    #[error("Not enough operands for {0}")]
    InsufficientOperands(String),
    #[error("Closed parenthesis without open")]
    UnmatchedCloseParen,
    #[error("Parenthesis content must reduce to single value, found {0} values")]
    ParenContentNotSingleValue(usize),
    #[error("Unbalanced parentheses, {0} left open")]
    UnbalancedParentheses(usize),
    #[error("Invalid RPN expression, {0} values left on the stack")]
    InvalidExpression(usize),
    #[error("{0}")]
    DivisionByZero(String),
    #[error("{0}")]
    TypeMismatch(String),
}

/// The kind of a [`CalculatorError`], without its details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedNumber,
    UnknownToken,
    InsufficientOperands,
    UnmatchedCloseParen,
    ParenContentNotSingleValue,
    UnbalancedParentheses,
    InvalidExpression,
    DivisionByZero,
    TypeMismatch,
}

impl CalculatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::MalformedNumber(_) => ErrorKind::MalformedNumber,
            CalculatorError::UnknownToken(_) => ErrorKind::UnknownToken,
            CalculatorError::InsufficientOperands(_) => ErrorKind::InsufficientOperands,
            CalculatorError::UnmatchedCloseParen => ErrorKind::UnmatchedCloseParen,
            CalculatorError::ParenContentNotSingleValue(_) => {
                ErrorKind::ParenContentNotSingleValue
            }
            CalculatorError::UnbalancedParentheses(_) => ErrorKind::UnbalancedParentheses,
            CalculatorError::InvalidExpression(_) => ErrorKind::InvalidExpression,
            CalculatorError::DivisionByZero(_) => ErrorKind::DivisionByZero,
            CalculatorError::TypeMismatch(_) => ErrorKind::TypeMismatch,
        }
    }
}
