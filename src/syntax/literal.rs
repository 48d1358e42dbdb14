use crate::{
    error::{ErrorKind, PResult},
    runtime::value::Number,
};

use super::{lexer::Lexer, Parser};

impl<'src> Parser<'src> {
    /// Tries each literal notation, longest first: hex, binary, decimal,
    /// rational, integer.
    pub(super) fn parse_number(&mut self) -> PResult<Option<Number>> {
        if let Some(v) = self.attempt(|p| p.parse_radix_literal(&["0x", "#"], 16))? {
            return Ok(Some(v));
        }
        if let Some(v) = self.attempt(|p| p.parse_radix_literal(&["0b"], 2))? {
            return Ok(Some(v));
        }
        if let Some(v) = self.attempt_opt(Self::parse_decimal) {
            return Ok(Some(v));
        }
        if let Some(v) = self.attempt(Self::parse_rational)? {
            return Ok(Some(v));
        }
        self.attempt(|p| {
            let Some(text) = p.signed_digits() else {
                return Ok(None);
            };
            Ok(Some(Number::Int(to_i64(text, text, 10)?)))
        })
    }

    /// `-`? prefix digit+, where the digits are interpreted in `radix`.
    fn parse_radix_literal(&mut self, prefixes: &[&str], radix: u32) -> PResult<Option<Number>> {
        let start = self.lexer.rest();
        let negative = self.lexer.eat_char('-');

        if !prefixes.iter().any(|prefix| self.lexer.eat_str(prefix)) {
            return Ok(None);
        }
        let Some(digits) = self.lexer.slice_while(|c| c.is_digit(radix)) else {
            return Ok(None);
        };

        let text = &start[..start.len() - self.lexer.rest().len()];
        let magnitude = to_i128(digits, text, radix)?;
        let value = if negative { -magnitude } else { magnitude };

        i64::try_from(value)
            .map(|v| Some(Number::Int(v)))
            .map_err(|_| ErrorKind::Overflow(text.to_string()))
    }

    fn parse_decimal(&mut self) -> Option<Number> {
        let start = self.lexer.rest();
        self.signed_digits()?;
        if !self.lexer.eat_char('.') {
            return None;
        }
        self.lexer.digits()?;

        let text = &start[..start.len() - self.lexer.rest().len()];
        text.parse::<f64>().ok().map(Number::Float)
    }

    /// integer `/` digit+. A zero divisor does not match, so `4/0` falls back
    /// to a division of two integers.
    fn parse_rational(&mut self) -> PResult<Option<Number>> {
        let Some(numer) = self.signed_digits() else {
            return Ok(None);
        };
        if !self.lexer.eat_char('/') {
            return Ok(None);
        }
        let Some(denom) = self.lexer.digits() else {
            return Ok(None);
        };

        // `1/2.5` is a division by a decimal, not a rational.
        if self.lexer.peek() == Some('.') && self.lexer.peek_nth(1).is_some_and(Lexer::is_digit) {
            return Ok(None);
        }

        let numer = to_i64(numer, numer, 10)?;
        let denom = to_i64(denom, denom, 10)?;
        if denom == 0 {
            return Ok(None);
        }
        Number::ratio(numer, denom).map(Some)
    }

    /// `-`? digit+, returned as written.
    fn signed_digits(&mut self) -> Option<&'src str> {
        let start = self.lexer.rest();
        self.lexer.eat_char('-');
        self.lexer.digits()?;

        Some(&start[..start.len() - self.lexer.rest().len()])
    }
}

fn to_i128(digits: &str, text: &str, radix: u32) -> PResult<i128> {
    i128::from_str_radix(digits, radix).map_err(|_| ErrorKind::Overflow(text.to_string()))
}

fn to_i64(digits: &str, text: &str, radix: u32) -> PResult<i64> {
    i64::from_str_radix(digits, radix).map_err(|_| ErrorKind::Overflow(text.to_string()))
}
