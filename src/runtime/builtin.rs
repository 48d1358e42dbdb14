use super::{env::Environment, value::Number};

impl Environment {
    /// Scalar arithmetic for every operator symbol, plus a few common
    /// functions and constants.
    pub fn standard() -> Self {
        let mut env = Self::new();

        env.define_operator("+", native::add);
        env.define_operator("-", native::sub);
        env.define_operator("*", native::mul);
        env.define_operator("/", native::div);
        env.define_operator("÷", native::int_div);
        env.define_operator("%", native::rem);
        env.define_operator("**", native::pow);
        env.define_operator("<<", native::shl);
        env.define_operator(">>", native::shr);
        env.define_operator(">>>", native::ushr);
        env.define_operator("|", native::bit_or);
        env.define_operator("&", native::bit_and);

        env.define_function("abs", native::unary("abs", native::abs));
        env.define_function("sqrt", native::unary("sqrt", native::sqrt));
        env.define_function("floor", native::unary("floor", native::floor));
        env.define_function("ceil", native::unary("ceil", native::ceil));
        env.define_function("min", native::fold("min", std::cmp::Ordering::Less));
        env.define_function("max", native::fold("max", std::cmp::Ordering::Greater));

        env.define_number("pi", std::f64::consts::PI);
        env.define_number("e", std::f64::consts::E);

        env
    }
}

pub(super) mod native {
    use std::cmp::Ordering;

    use num::{
        integer::Roots, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Integer, Signed,
    };

    use crate::{
        error::{ErrorKind, PResult},
        runtime::value::{Number, Rational},
    };

    /// Both operands converted to the wider of their two kinds.
    enum Pair {
        Ints(i64, i64),
        Rationals(Rational, Rational),
        Floats(f64, f64),
    }

    fn promote(a: Number, b: Number) -> Pair {
        match (a, b) {
            (Number::Int(a), Number::Int(b)) => Pair::Ints(a, b),
            (Number::Float(_), _) | (_, Number::Float(_)) => Pair::Floats(a.to_f64(), b.to_f64()),
            _ => match (a.to_rational(), b.to_rational()) {
                (Some(a), Some(b)) => Pair::Rationals(a, b),
                _ => Pair::Floats(a.to_f64(), b.to_f64()),
            },
        }
    }

    fn overflow(op: &str) -> ErrorKind {
        ErrorKind::Overflow(op.to_string())
    }

    fn unsupported(op: &str, operand: Number) -> ErrorKind {
        ErrorKind::UnsupportedOperand {
            op: op.to_string(),
            operand: operand.kind().to_string(),
        }
    }

    fn checked<T>(op: &str, value: Option<T>) -> PResult<T> {
        value.ok_or_else(|| overflow(op))
    }

    fn nonzero(b: Number) -> PResult<()> {
        if b.is_zero() {
            return Err(ErrorKind::DivisionByZero);
        }
        Ok(())
    }

    pub fn add(a: Number, b: Number) -> PResult<Number> {
        Ok(match promote(a, b) {
            Pair::Ints(a, b) => Number::Int(checked("+", a.checked_add(b))?),
            Pair::Rationals(a, b) => checked("+", a.checked_add(&b))?.into(),
            Pair::Floats(a, b) => Number::Float(a + b),
        })
    }

    pub fn sub(a: Number, b: Number) -> PResult<Number> {
        Ok(match promote(a, b) {
            Pair::Ints(a, b) => Number::Int(checked("-", a.checked_sub(b))?),
            Pair::Rationals(a, b) => checked("-", a.checked_sub(&b))?.into(),
            Pair::Floats(a, b) => Number::Float(a - b),
        })
    }

    pub fn mul(a: Number, b: Number) -> PResult<Number> {
        Ok(match promote(a, b) {
            Pair::Ints(a, b) => Number::Int(checked("*", a.checked_mul(b))?),
            Pair::Rationals(a, b) => checked("*", a.checked_mul(&b))?.into(),
            Pair::Floats(a, b) => Number::Float(a * b),
        })
    }

    /// Exact division: two integers give a rational unless the quotient is
    /// whole.
    pub fn div(a: Number, b: Number) -> PResult<Number> {
        nonzero(b)?;
        match promote(a, b) {
            Pair::Ints(a, b) => Number::ratio(a, b),
            Pair::Rationals(a, b) => Ok(checked("/", a.checked_div(&b))?.into()),
            Pair::Floats(a, b) => Ok(Number::Float(a / b)),
        }
    }

    /// Quotient truncated toward zero.
    pub fn int_div(a: Number, b: Number) -> PResult<Number> {
        nonzero(b)?;
        Ok(match promote(a, b) {
            Pair::Ints(a, b) => Number::Int(checked("÷", a.checked_div(b))?),
            Pair::Rationals(a, b) => Number::Int(checked("÷", a.checked_div(&b))?.to_integer()),
            Pair::Floats(a, b) => Number::Float((a / b).trunc()),
        })
    }

    /// Remainder with the sign of the dividend.
    pub fn rem(a: Number, b: Number) -> PResult<Number> {
        nonzero(b)?;
        match promote(a, b) {
            Pair::Ints(a, b) => Ok(Number::Int(checked("%", a.checked_rem(b))?)),
            Pair::Rationals(a, b) => {
                let quotient = Rational::from_integer(checked("%", a.checked_div(&b))?.to_integer());
                let whole = checked("%", b.checked_mul(&quotient))?;
                Ok(checked("%", a.checked_sub(&whole))?.into())
            }
            Pair::Floats(a, b) => Ok(Number::Float(a % b)),
        }
    }

    pub fn pow(a: Number, b: Number) -> PResult<Number> {
        match promote(a, b) {
            Pair::Ints(base, exp) => int_pow(Rational::from_integer(base), exp),
            Pair::Rationals(base, exp) if exp.is_integer() => int_pow(base, exp.to_integer()),
            _ => Ok(Number::Float(a.to_f64().powf(b.to_f64()))),
        }
    }

    fn int_pow(base: Rational, exp: i64) -> PResult<Number> {
        let e = checked("**", u32::try_from(exp.unsigned_abs()).ok())?;
        let numer = checked("**", base.numer().checked_pow(e))?;
        let denom = checked("**", base.denom().checked_pow(e))?;

        if exp < 0 {
            return Number::ratio(denom, numer);
        }
        Number::ratio(numer, denom)
    }

    fn int_operands(op: &str, a: Number, b: Number) -> PResult<(i64, i64)> {
        match (a, b) {
            (Number::Int(a), Number::Int(b)) => Ok((a, b)),
            (Number::Int(_), other) | (other, _) => Err(unsupported(op, other)),
        }
    }

    fn shift_amount(op: &str, n: i64) -> PResult<u32> {
        match u32::try_from(n) {
            Ok(n) if n < i64::BITS => Ok(n),
            _ => Err(overflow(op)),
        }
    }

    pub fn shl(a: Number, b: Number) -> PResult<Number> {
        let (a, b) = int_operands("<<", a, b)?;
        Ok(Number::Int(a << shift_amount("<<", b)?))
    }

    pub fn shr(a: Number, b: Number) -> PResult<Number> {
        let (a, b) = int_operands(">>", a, b)?;
        Ok(Number::Int(a >> shift_amount(">>", b)?))
    }

    /// Logical shift: the vacated high bits are always zero.
    pub fn ushr(a: Number, b: Number) -> PResult<Number> {
        let (a, b) = int_operands(">>>", a, b)?;
        Ok(Number::Int(((a as u64) >> shift_amount(">>>", b)?) as i64))
    }

    pub fn bit_or(a: Number, b: Number) -> PResult<Number> {
        let (a, b) = int_operands("|", a, b)?;
        Ok(Number::Int(a | b))
    }

    pub fn bit_and(a: Number, b: Number) -> PResult<Number> {
        let (a, b) = int_operands("&", a, b)?;
        Ok(Number::Int(a & b))
    }

    pub fn abs(x: Number) -> PResult<Number> {
        Ok(match x {
            Number::Int(v) => Number::Int(checked("abs", v.checked_abs())?),
            Number::Rational(v) => {
                checked("abs", v.numer().checked_abs())?;
                Number::Rational(v.abs())
            }
            Number::Float(v) => Number::Float(v.abs()),
        })
    }

    /// Exact for perfect squares, otherwise a float.
    pub fn sqrt(x: Number) -> PResult<Number> {
        if let Number::Int(v) = x {
            if v >= 0 && v.sqrt() * v.sqrt() == v {
                return Ok(Number::Int(v.sqrt()));
            }
        }
        Ok(Number::Float(x.to_f64().sqrt()))
    }

    // `Ratio::floor`/`ceil` overflow near the i64 limits; dividing the parts
    // cannot, since the denominator is always positive.
    pub fn floor(x: Number) -> PResult<Number> {
        Ok(match x {
            Number::Int(_) => x,
            Number::Rational(v) => Number::Int(Integer::div_floor(v.numer(), v.denom())),
            Number::Float(v) => Number::Float(v.floor()),
        })
    }

    pub fn ceil(x: Number) -> PResult<Number> {
        Ok(match x {
            Number::Int(_) => x,
            Number::Rational(v) => Number::Int(Integer::div_ceil(v.numer(), v.denom())),
            Number::Float(v) => Number::Float(v.ceil()),
        })
    }

    pub fn compare(a: Number, b: Number) -> Option<Ordering> {
        match promote(a, b) {
            Pair::Ints(a, b) => Some(a.cmp(&b)),
            Pair::Rationals(a, b) => Some(a.cmp(&b)),
            Pair::Floats(a, b) => a.partial_cmp(&b),
        }
    }

    pub fn unary(
        name: &'static str,
        func: fn(Number) -> PResult<Number>,
    ) -> impl Fn(&[Number]) -> PResult<Number> {
        move |args| match args {
            [x] => func(*x),
            _ => Err(ErrorKind::Arity {
                name: name.to_string(),
                expected: "1".to_string(),
                found: args.len(),
            }),
        }
    }

    /// Picks the argument that compares as `keep` against every other one.
    /// Unordered comparisons (NaN) leave the current pick in place.
    pub fn fold(name: &'static str, keep: Ordering) -> impl Fn(&[Number]) -> PResult<Number> {
        move |args| {
            let (first, rest) = args.split_first().ok_or_else(|| ErrorKind::Arity {
                name: name.to_string(),
                expected: "at least 1".to_string(),
                found: 0,
            })?;

            Ok(rest.iter().fold(*first, |best, &x| {
                if compare(x, best) == Some(keep) {
                    x
                } else {
                    best
                }
            }))
        }
    }

}
