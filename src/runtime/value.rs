use std::fmt;

use num::{rational::Ratio, ToPrimitive, Zero};

use crate::error::{ErrorKind, PResult};

pub type Rational = Ratio<i64>;

/// A numeric value. Literals decide which kind they produce; operators decide
/// the kind of their result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Rational(Rational),
    Float(f64),
}

impl Number {
    /// Builds the exact quotient `numer / denom`, collapsing to `Int` when the
    /// denominator reduces to one.
    pub fn ratio(numer: i64, denom: i64) -> PResult<Self> {
        if denom == 0 {
            return Err(ErrorKind::DivisionByZero);
        }
        // Ratio::new negates both parts when the denominator is negative.
        if denom == i64::MIN || (numer == i64::MIN && denom < 0) {
            return Err(ErrorKind::Overflow("/".into()));
        }
        Ok(Self::from(Rational::new(numer, denom)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Rational(_) => "rational",
            Self::Float(_) => "float",
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::Rational(v) => v.is_zero(),
            Self::Float(v) => *v == 0.0,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Int(v) => *v as f64,
            Self::Rational(v) => v.to_f64().unwrap_or(f64::NAN),
            Self::Float(v) => *v,
        }
    }

    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::Int(v) => Some(Rational::from_integer(*v)),
            Self::Rational(v) => Some(*v),
            Self::Float(_) => None,
        }
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        if value.is_integer() {
            return Self::Int(value.to_integer());
        }
        Self::Rational(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Rational(v) => write!(f, "{}/{}", v.numer(), v.denom()),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Number, Rational};
    use crate::error::ErrorKind;

    #[test]
    fn ratio_is_reduced() {
        assert_eq!(
            Number::ratio(6, 8).unwrap(),
            Number::Rational(Rational::new(3, 4))
        );
        assert_eq!(Number::ratio(8, 4).unwrap(), Number::Int(2));
        assert_eq!(Number::ratio(4, 0), Err(ErrorKind::DivisionByZero));
    }

    #[test]
    fn display() {
        assert_eq!(Number::Int(-16).to_string(), "-16");
        assert_eq!(Number::ratio(-3, 4).unwrap().to_string(), "-3/4");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }
}
