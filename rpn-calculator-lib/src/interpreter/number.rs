use crate::interpreter::error::CalculatorError;
use std::fmt;
use std::fmt::Formatter;
use std::num::IntErrorKind;
use std::ops::Neg;

/// Lower bound (inclusive) and upper bound (exclusive) of the values an `i64` can hold, as floats.
const INTEGER_RANGE: (f64, f64) = (-9_223_372_036_854_775_808.0, 9_223_372_036_854_775_808.0);

/// The value of a literal or of an evaluated sub-expression.
///
/// Values that are mathematically integral are always kept as [`Number::Integer`],
/// see [`Number::normalize`].
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Collapses a float into an integer when it holds an exact integral value.
    ///
    /// Infinities, NaN and integral values outside the `i64` range stay floats.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn_calculator::interpreter::number::Number;
    ///
    /// assert!(Number::normalize(3.0).is_integer());
    /// assert!(!Number::normalize(3.5).is_integer());
    /// assert!(!Number::normalize(f64::INFINITY).is_integer());
    /// ```
    pub fn normalize(value: f64) -> Number {
        let (lower, upper) = INTEGER_RANGE;
        if value.is_finite() && value.fract() == 0.0 && value >= lower && value < upper {
            Number::Integer(value as i64)
        } else {
            Number::Float(value)
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

/// Whether the given text is a numeric literal.
///
/// Text containing `.`, `e` or `E` must parse as a float, anything else as an integer.
/// Text that fails to parse is not a number, unless it contains a digit: then it is
/// a malformed number (e.g. `3..4` or `--3`) and an error is returned.
pub fn is_number(text: &str) -> Result<bool, CalculatorError> {
    match parse(text) {
        Some(_) => Ok(true),
        None if text.chars().any(|c| c.is_ascii_digit()) => {
            Err(CalculatorError::MalformedNumber(text.to_string()))
        }
        None => Ok(false),
    }
}

/// Converts the given numeric literal into a normalized [`Number`].
pub fn to_number(text: &str) -> Result<Number, CalculatorError> {
    parse(text).ok_or_else(|| CalculatorError::MalformedNumber(text.to_string()))
}

fn parse(text: &str) -> Option<Number> {
    if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        return text.parse::<f64>().ok().map(Number::normalize);
    }
    match text.parse::<i64>() {
        Ok(value) => Some(Number::Integer(value)),
        // Integer literals too large for 64 bits degrade to double precision.
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                text.parse::<f64>().ok().map(Number::normalize)
            }
            _ => None,
        },
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::normalize(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        match self {
            Number::Integer(value) => match value.checked_neg() {
                Some(negated) => Number::Integer(negated),
                None => Number::Float(-(value as f64)),
            },
            Number::Float(value) => Number::normalize(-value),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(value) => write!(f, "{}", value),
            Number::Float(value) if value.is_nan() => write!(f, "nan"),
            Number::Float(value) if value.is_infinite() => {
                write!(f, "{}", if value > 0.0 { "inf" } else { "-inf" })
            }
            Number::Float(value) => {
                let magnitude = value.abs();
                if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
                    write!(f, "{:e}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
        }
    }
}
