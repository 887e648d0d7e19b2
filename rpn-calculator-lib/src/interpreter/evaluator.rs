use crate::interpreter::error::CalculatorError;
use crate::interpreter::number::{is_number, to_number, Number};
use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use log::trace;
use std::mem;

/// The operands of one level of parenthesis nesting.
pub type Frame = Vec<Number>;

/// A stack of frames, one per open parenthesis plus the outermost one.
///
/// The current (innermost) frame is kept apart from the frames enclosing it,
/// so there is always a frame to push onto.
#[derive(Debug, Default)]
struct EvaluationStack {
    current: Frame,
    enclosing: Vec<Frame>,
}

impl EvaluationStack {
    fn depth(&self) -> usize {
        self.enclosing.len() + 1
    }

    fn push(&mut self, value: Number) {
        trace!("push {} at depth {}", value, self.depth());
        self.current.push(value);
    }

    fn open_frame(&mut self) {
        self.enclosing.push(mem::take(&mut self.current));
        trace!("open frame, depth {}", self.depth());
    }

    /// Folds the current frame into its parent. The frame must hold exactly one value.
    fn close_frame(&mut self) -> Result<(), CalculatorError> {
        let parent = self
            .enclosing
            .pop()
            .ok_or(CalculatorError::UnmatchedCloseParen)?;
        let inner = mem::replace(&mut self.current, parent);
        trace!("close frame {:?}, depth {}", inner, self.depth());
        match inner.as_slice() {
            [value] => {
                self.current.push(*value);
                Ok(())
            }
            values => Err(CalculatorError::ParenContentNotSingleValue(values.len())),
        }
    }

    fn apply(&mut self, operator: Operator) -> Result<(), CalculatorError> {
        // The right operand is on top.
        let (Some(b), Some(a)) = (self.current.pop(), self.current.pop()) else {
            return Err(CalculatorError::InsufficientOperands(
                operator.to_string(),
            ));
        };
        let result = operator.apply(a, b)?;
        trace!("{} {} {} = {}", a, b, operator, result);
        self.current.push(result);
        Ok(())
    }

    /// The single value left once every token is consumed.
    fn into_result(self) -> Result<Number, CalculatorError> {
        if !self.enclosing.is_empty() {
            return Err(CalculatorError::UnbalancedParentheses(
                self.enclosing.len(),
            ));
        }
        match self.current.as_slice() {
            [value] => Ok(*value),
            values => Err(CalculatorError::InvalidExpression(values.len())),
        }
    }
}

/// Evaluates the given tokens as a reverse polish notation expression.
///
/// Parentheses only delimit scopes: each group must reduce to a single value on its own,
/// which then becomes an operand of the enclosing group.
///
/// # Arguments
///
/// * `tokens`: The tokens of the expression, as returned by the lexer.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluator::calculate;
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::number::Number;
/// # fn main() -> anyhow::Result<()> {
///
/// let tokens = tokenize("2 ( 3 4 * ) +")?;
/// assert_eq!(calculate(&tokens)?, Number::Integer(14));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(tokens: &[Token]) -> Result<Number, CalculatorError> {
    let mut stack = EvaluationStack::default();

    for token in tokens {
        match token {
            Token::OpenParenthesis => stack.open_frame(),
            Token::CloseParenthesis => stack.close_frame()?,
            Token::Number(value) => stack.push(*value),
            Token::Word(text) => {
                if is_number(text)? {
                    stack.push(to_number(text)?);
                } else {
                    stack.apply(text.parse::<Operator>()?)?;
                }
            }
        }
    }

    stack.into_result()
}
