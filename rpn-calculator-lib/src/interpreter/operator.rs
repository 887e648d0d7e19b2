use crate::interpreter::error::CalculatorError;
use crate::interpreter::number::Number;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Exponents larger than this in magnitude saturate to positive infinity instead of being computed.
pub const MAX_EXPONENT: i64 = 1_000_000;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Exponentiate,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::FloorDivide => "//",
            Operator::Modulo => "%",
            Operator::Exponentiate => "**",
        }
    }

    /// Applies the operator to its operands.
    ///
    /// # Arguments
    ///
    /// * `a`: The left operand, i.e. the one pushed first.
    /// * `b`: The right operand, i.e. the one pushed last.
    ///
    /// returns: The normalized result, or the arithmetic error the operands caused.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn_calculator::interpreter::number::Number;
    /// use rpn_calculator::interpreter::operator::Operator;
    /// # fn main() -> anyhow::Result<()> {
    ///
    /// let difference = Operator::Subtract.apply(Number::Integer(5), Number::Integer(2))?;
    /// assert_eq!(difference, Number::Integer(3));
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn apply(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        match self {
            Operator::Add => Ok(integer_or_float(a, b, i64::checked_add, |x, y| x + y)),
            Operator::Subtract => Ok(integer_or_float(a, b, i64::checked_sub, |x, y| x - y)),
            Operator::Multiply => Ok(integer_or_float(a, b, i64::checked_mul, |x, y| x * y)),
            Operator::Divide => divide(a, b),
            Operator::FloorDivide => floor_divide(a, b),
            Operator::Modulo => modulo(a, b),
            Operator::Exponentiate => exponentiate(a, b),
        }
    }
}

/// Computes in integers when both operands are integers and the result fits,
/// otherwise in floats.
fn integer_or_float(
    a: Number,
    b: Number,
    integer: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
        if let Some(result) = integer(x, y) {
            return Number::Integer(result);
        }
    }
    Number::normalize(float(a.as_f64(), b.as_f64()))
}

fn divide(a: Number, b: Number) -> Result<Number, CalculatorError> {
    if b.as_f64() == 0.0 {
        return Err(CalculatorError::DivisionByZero(
            "Float division by zero".to_string(),
        ));
    }
    Ok(Number::normalize(a.as_f64() / b.as_f64()))
}

fn integer_operands(
    operator: Operator,
    a: Number,
    b: Number,
) -> Result<(i64, i64), CalculatorError> {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => Ok((x, y)),
        _ => Err(CalculatorError::TypeMismatch(format!(
            "{} works only with integers",
            operator
        ))),
    }
}

fn floor_divide(a: Number, b: Number) -> Result<Number, CalculatorError> {
    let (x, y) = integer_operands(Operator::FloorDivide, a, b)?;
    if y == 0 {
        return Err(CalculatorError::DivisionByZero(
            "Integer division by zero".to_string(),
        ));
    }
    match x.checked_div(y) {
        Some(quotient) if x % y != 0 && (x < 0) != (y < 0) => Ok(Number::Integer(quotient - 1)),
        Some(quotient) => Ok(Number::Integer(quotient)),
        // i64::MIN // -1
        None => Ok(Number::normalize((x as f64 / y as f64).floor())),
    }
}

fn modulo(a: Number, b: Number) -> Result<Number, CalculatorError> {
    let (x, y) = integer_operands(Operator::Modulo, a, b)?;
    if y == 0 {
        return Err(CalculatorError::DivisionByZero(
            "Integer modulo by zero".to_string(),
        ));
    }
    // The remainder takes the sign of the divisor.
    let remainder = x.checked_rem(y).unwrap_or(0);
    if remainder != 0 && (remainder < 0) != (y < 0) {
        Ok(Number::Integer(remainder + y))
    } else {
        Ok(Number::Integer(remainder))
    }
}

fn exponentiate(a: Number, b: Number) -> Result<Number, CalculatorError> {
    if b.as_f64().abs() > MAX_EXPONENT as f64 {
        return Ok(Number::Float(f64::INFINITY));
    }
    if a.as_f64() == 0.0 && b.as_f64() < 0.0 {
        return Err(CalculatorError::DivisionByZero(
            "0 cannot be raised to a negative power".to_string(),
        ));
    }
    if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
        if let Some(power) = u32::try_from(y).ok().and_then(|y| x.checked_pow(y)) {
            return Ok(Number::Integer(power));
        }
    }
    Ok(Number::normalize(a.as_f64().powf(b.as_f64())))
}

impl str::FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(input: &str) -> Result<Operator, Self::Err> {
        match input {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "//" => Ok(Operator::FloorDivide),
            "%" => Ok(Operator::Modulo),
            "**" => Ok(Operator::Exponentiate),
            input => Err(CalculatorError::UnknownToken(input.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::ErrorKind;
    use parameterized_macro::parameterized;

    #[parameterized(
    operator = {
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Divide,
    Operator::FloorDivide,
    Operator::FloorDivide,
    Operator::Modulo,
    Operator::Modulo,
    Operator::Exponentiate,
    Operator::Exponentiate,
    Operator::Exponentiate,
    },
    a = {
    Number::Integer(3),
    Number::Integer(10),
    Number::Float(3.5),
    Number::Integer(11),
    Number::Integer(4),
    Number::Integer(11),
    Number::Integer(-7),
    Number::Integer(-7),
    Number::Integer(7),
    Number::Integer(11),
    Number::Integer(0),
    Number::Integer(2),
    },
    b = {
    Number::Integer(4),
    Number::Integer(2),
    Number::Integer(2),
    Number::Integer(2),
    Number::Integer(2),
    Number::Integer(2),
    Number::Integer(2),
    Number::Integer(3),
    Number::Integer(-3),
    Number::Integer(2),
    Number::Integer(0),
    Number::Integer(-2),
    },
    expected = {
    Number::Integer(7),
    Number::Integer(8),
    Number::Integer(7),
    Number::Float(5.5),
    Number::Integer(2),
    Number::Integer(5),
    Number::Integer(-4),
    Number::Integer(2),
    Number::Integer(-2),
    Number::Integer(121),
    Number::Integer(1),
    Number::Float(0.25),
    }
    )]
    fn operator_applied_to_operands_returns_expected(
        operator: Operator,
        a: Number,
        b: Number,
        expected: Number,
    ) {
        let actual = operator.apply(a, b).unwrap();

        pretty_assertions::assert_eq!(actual, expected);
        pretty_assertions::assert_eq!(actual.is_integer(), expected.is_integer());
    }

    #[parameterized(operator = {Operator::Divide, Operator::FloorDivide, Operator::Modulo})]
    fn dividing_by_zero_fails(operator: Operator) {
        let error = operator
            .apply(Number::Integer(3), Number::Integer(0))
            .unwrap_err();
        pretty_assertions::assert_eq!(error.kind(), ErrorKind::DivisionByZero)
    }

    #[parameterized(operator = {Operator::FloorDivide, Operator::Modulo})]
    fn integer_operator_rejects_float_operand(operator: Operator) {
        let error = operator
            .apply(Number::Float(3.5), Number::Integer(2))
            .unwrap_err();
        pretty_assertions::assert_eq!(error.kind(), ErrorKind::TypeMismatch)
    }

    #[test]
    fn type_is_checked_before_zero_divisor() {
        let error = Operator::FloorDivide
            .apply(Number::Float(3.5), Number::Integer(0))
            .unwrap_err();
        pretty_assertions::assert_eq!(error.kind(), ErrorKind::TypeMismatch)
    }

    #[test]
    fn integer_overflow_promotes_to_float() {
        let sum = Operator::Add
            .apply(Number::Integer(i64::MAX), Number::Integer(1))
            .unwrap();
        assert!(!sum.is_integer());
        pretty_assertions::assert_eq!(sum.as_f64(), 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn exponent_above_ceiling_saturates_to_infinity() {
        let power = Operator::Exponentiate
            .apply(Number::Integer(1), Number::Integer(MAX_EXPONENT + 1))
            .unwrap();
        pretty_assertions::assert_eq!(power, Number::Float(f64::INFINITY))
    }

    #[test]
    fn exponent_at_ceiling_is_computed() {
        let power = Operator::Exponentiate
            .apply(Number::Integer(1), Number::Integer(MAX_EXPONENT))
            .unwrap();
        pretty_assertions::assert_eq!(power, Number::Integer(1))
    }

    #[test]
    fn negative_exponent_beyond_ceiling_also_saturates() {
        let power = Operator::Exponentiate
            .apply(Number::Integer(2), Number::Integer(-MAX_EXPONENT - 1))
            .unwrap();
        pretty_assertions::assert_eq!(power, Number::Float(f64::INFINITY))
    }

    #[test]
    fn zero_raised_to_negative_power_fails() {
        let error = Operator::Exponentiate
            .apply(Number::Integer(0), Number::Integer(-1))
            .unwrap_err();
        pretty_assertions::assert_eq!(error.kind(), ErrorKind::DivisionByZero)
    }

    #[test]
    fn smallest_integer_floor_divided_by_minus_one_promotes_to_float() {
        let quotient = Operator::FloorDivide
            .apply(Number::Integer(i64::MIN), Number::Integer(-1))
            .unwrap();
        assert!(!quotient.is_integer())
    }

    #[parameterized(
    symbol = {"+", "-", "*", "/", "//", "%", "**"},
    expected = {
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::FloorDivide,
    Operator::Modulo,
    Operator::Exponentiate,
    }
    )]
    fn symbol_parses_into_operator(symbol: &str, expected: Operator) {
        let operator: Operator = symbol.parse().unwrap();

        pretty_assertions::assert_eq!(operator, expected);
        pretty_assertions::assert_eq!(operator.to_string(), symbol);
    }

    #[parameterized(symbol = {"&", "^", "***", "x"})]
    fn unknown_symbol_is_rejected(symbol: &str) {
        pretty_assertions::assert_eq!(
            symbol.parse::<Operator>(),
            Err(CalculatorError::UnknownToken(symbol.to_string()))
        )
    }
}
