use crate::{
    error::{ErrorKind, PResult},
    syntax::{lexer::Lexer, ExprParser, Expression},
};

/// Deepest factor nesting accepted, counting parentheses and call arguments.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser with backtracking alternation.
///
/// Alternatives report "no match" with `Ok(None)` and leave the cursor where
/// they found it. `Err` is reserved for input that matched but cannot be
/// represented, such as an integer literal outside the 64-bit range.
pub struct Parser<'src> {
    pub(super) lexer: Lexer<'src>,
    pub(super) depth: usize,
    furthest: usize,
    expected: Vec<&'static str>,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            lexer: Lexer::new(src),
            depth: 0,
            furthest: 0,
            expected: vec![],
        }
    }

    /// Parses the whole input as a single expression.
    pub fn parse(mut self) -> PResult<Box<Expression<'src>>> {
        self.lexer.skip_whitespace();
        let expr = self.parse_expr()?;
        self.lexer.skip_whitespace();

        match expr {
            Some(expr) if self.lexer.is_eof() => {
                log::debug!("parsed {} node(s)", expr.size());
                Ok(expr)
            }
            Some(_) => {
                self.expected("operator or end of input");
                Err(self.error())
            }
            None => Err(self.error()),
        }
    }

    /// Records that `what` was expected at the current position. Only the
    /// furthest position reached is reported on failure.
    pub(super) fn expected(&mut self, what: &'static str) {
        let pos = self.lexer.pos();
        if pos > self.furthest {
            self.furthest = pos;
            self.expected.clear();
        }
        if pos == self.furthest && !self.expected.contains(&what) {
            self.expected.push(what);
        }
    }

    /// Runs `alternative`, rewinding the cursor if it does not match.
    pub(super) fn attempt<T, F>(&mut self, alternative: F) -> PResult<Option<T>>
    where
        F: FnOnce(&mut Self) -> PResult<Option<T>>,
    {
        let start = self.lexer.pos();
        let result = alternative(self)?;
        if result.is_none() {
            self.lexer.reset(start);
        }
        Ok(result)
    }

    /// Like `attempt`, for alternatives that cannot fail hard.
    pub(super) fn attempt_opt<T, F>(&mut self, alternative: F) -> Option<T>
    where
        F: FnOnce(&mut Self) -> Option<T>,
    {
        let start = self.lexer.pos();
        let result = alternative(self);
        if result.is_none() {
            self.lexer.reset(start);
        }
        result
    }

    pub(super) fn expect_char(&mut self, c: char, what: &'static str) -> Option<()> {
        if self.lexer.eat_char(c) {
            return Some(());
        }
        self.expected(what);
        None
    }

    fn error(&self) -> ErrorKind {
        let expected = match self.expected.as_slice() {
            [] => "expression".to_string(),
            alternatives => alternatives.join(" or "),
        };
        ErrorKind::Parse {
            pos: self.furthest,
            expected,
        }
    }
}

/// Parses `src` into an expression tree without consulting any environment.
pub fn parse(src: &str) -> PResult<Box<Expression<'_>>> {
    Parser::new(src).parse()
}

#[cfg(test)]
mod test {
    use super::{parse, MAX_DEPTH};
    use crate::error::ErrorKind;

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse("  1 + 2\n").is_ok());
    }

    #[test]
    fn trailing_input_is_rejected() {
        match parse("1 + 2 )") {
            Err(ErrorKind::Parse { pos, expected }) => {
                assert_eq!(pos, 6);
                assert!(expected.contains("end of input"), "{expected}");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn reports_furthest_failure() {
        match parse("(1 + 2") {
            Err(ErrorKind::Parse { pos, expected }) => {
                assert_eq!(pos, 6);
                assert!(expected.contains("`)`"), "{expected}");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn nesting_is_limited() {
        let nested = |depth: usize| format!("{}1{}", "(1+".repeat(depth), ")".repeat(depth));

        assert!(parse(&nested(MAX_DEPTH - 1)).is_ok());
        match parse(&nested(MAX_DEPTH + 100)) {
            Err(ErrorKind::Parse { pos, expected }) => {
                // The first factor past the limit is the `1` inside the deepest group.
                assert_eq!(pos, 3 * MAX_DEPTH - 2);
                assert_eq!(expected, "shallower nesting");
            }
            other => panic!("unexpected result {other:?}"),
        }

        let calls = format!("{}1", "f ".repeat(MAX_DEPTH + 1));
        assert!(matches!(parse(&calls), Err(ErrorKind::Parse { .. })));
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            parse("   "),
            Err(ErrorKind::Parse {
                pos: 3,
                expected: "expression".into()
            })
        );
    }
}
