mod expr;
mod expr_parser;
mod lexer;
mod literal;
mod parser;
mod token;

pub use expr::Expression;
pub use parser::{parse, Parser};
pub use token::Operator;

use crate::error::PResult;

pub(crate) trait ExprParser<'src> {
    fn parse_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>>;
    fn parse_expr_with_precedence(
        &mut self,
        min_prec: token::Precedence,
    ) -> PResult<Option<Box<Expression<'src>>>>;
    fn parse_factor(&mut self) -> PResult<Option<Box<Expression<'src>>>>;
    fn parse_grouping_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>>;
    fn parse_call_expr(&mut self) -> PResult<Option<Box<Expression<'src>>>>;
    fn parse_operator(&mut self) -> Option<Operator>;
    fn parse_ref(&mut self) -> Option<&'src str>;
}
