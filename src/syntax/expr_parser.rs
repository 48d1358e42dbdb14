use crate::error::{ErrorKind, PResult};

use super::{
    lexer::Lexer,
    parser::MAX_DEPTH,
    token::{Assoc, Precedence, ADDITIVE},
    ExprParser, Expression, Operator, Parser,
};

impl<'src> ExprParser<'src> for Parser<'src> {
    fn parse_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>> {
        self.parse_expr_with_precedence(ADDITIVE)
    }

    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> PResult<Option<Box<Expression<'src>>>> {
        let mut lhs = match self.parse_factor()? {
            None => return Ok(None),
            Some(expr) => expr,
        };

        loop {
            let before_op = self.lexer.pos();
            self.lexer.skip_whitespace();

            let op = match self.parse_operator() {
                Some(op) => op,
                None => {
                    self.lexer.reset(before_op);
                    break;
                }
            };
            let (prec, assoc) = op.get();

            if prec < min_prec {
                self.lexer.reset(before_op);
                break;
            }
            self.lexer.skip_whitespace();

            let new_min_prec = if assoc == Assoc::Left { prec + 1 } else { prec };

            // A dangling operator ends the repetition; whatever follows is
            // left for the enclosing rule.
            let rhs = match self.parse_expr_with_precedence(new_min_prec)? {
                None => {
                    self.lexer.reset(before_op);
                    break;
                }
                Some(expr) => expr,
            };

            log::trace!("reduce `{op}` at offset {before_op}");
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(Some(lhs))
    }

    fn parse_factor(&mut self) -> PResult<Option<Box<Expression<'src>>>> {
        if self.depth >= MAX_DEPTH {
            return Err(ErrorKind::Parse {
                pos: self.lexer.pos(),
                expected: "shallower nesting".into(),
            });
        }

        self.depth += 1;
        let factor = self.parse_factor_alternatives();
        self.depth -= 1;
        factor
    }

    fn parse_grouping_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>> {
        self.attempt(|p| {
            if !p.lexer.eat_char('(') {
                return Ok(None);
            }
            p.lexer.skip_whitespace();

            let expr = match p.parse_expr()? {
                Some(expr) => expr,
                None => return Ok(None),
            };
            p.lexer.skip_whitespace();

            Ok(p.expect_char(')', "`)`").map(|_| expr))
        })
    }

    fn parse_call_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>> {
        self.attempt(|p| {
            let id = match p.parse_ref() {
                Some(id) => id,
                None => return Ok(None),
            };

            // `f x`: exactly one argument, no parentheses, separated by spaces.
            let bare = p.attempt(|p| {
                if p.lexer.skip_spaces() == 0 {
                    return Ok(None);
                }
                p.parse_expr()
            })?;
            if let Some(arg) = bare {
                return Ok(Some(Box::new(Expression::Call {
                    id,
                    args: vec![*arg],
                })));
            }

            // `f(x, y, ...)`: any number of arguments.
            if !p.lexer.eat_char('(') {
                return Ok(None);
            }
            p.lexer.skip_whitespace();

            let mut args = vec![];
            if let Some(first) = p.parse_expr()? {
                args.push(*first);

                loop {
                    let before_comma = p.lexer.pos();
                    p.lexer.skip_whitespace();
                    if !p.lexer.eat_char(',') {
                        p.lexer.reset(before_comma);
                        break;
                    }
                    p.lexer.skip_whitespace();

                    match p.parse_expr()? {
                        Some(arg) => args.push(*arg),
                        None => return Ok(None),
                    }
                }
            }
            p.lexer.skip_whitespace();

            if p.expect_char(')', "`,` or `)`").is_none() {
                return Ok(None);
            }
            Ok(Some(Box::new(Expression::Call { id, args })))
        })
    }

    fn parse_operator(&mut self) -> Option<Operator> {
        let rest = self.lexer.rest();
        let op = Operator::LONGEST_FIRST
            .into_iter()
            .find(|op| rest.starts_with(op.symbol()))?;

        self.lexer.eat_str(op.symbol());
        Some(op)
    }

    fn parse_ref(&mut self) -> Option<&'src str> {
        let start = self.lexer.rest();
        self.lexer.eat_if(Lexer::is_letter)?;
        let tail = self.lexer.slice_while(Lexer::is_id_part).map_or(0, str::len);

        Some(&start[..1 + tail])
    }
}

impl<'src> Parser<'src> {
    fn parse_factor_alternatives(&mut self) -> PResult<Option<Box<Expression<'src>>>> {
        if let Some(expr) = self.parse_grouping_expr()? {
            return Ok(Some(expr));
        }
        if let Some(expr) = self.parse_call_expr()? {
            return Ok(Some(expr));
        }
        if let Some(number) = self.parse_number()? {
            return Ok(Some(Box::new(Expression::Literal(number))));
        }
        if let Some(id) = self.parse_ref() {
            return Ok(Some(Box::new(Expression::Ref(id))));
        }

        self.expected("expression");
        Ok(None)
    }
}
