use super::token::Operator;
use crate::runtime::value::Number;

/// A parsed expression. Names are kept as written and resolved only when the
/// tree is evaluated.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression<'src> {
    Literal(Number),
    Ref(&'src str),
    Binary {
        lhs: Box<Expression<'src>>,
        op: Operator,
        rhs: Box<Expression<'src>>,
    },
    Call {
        id: &'src str,
        args: Vec<Expression<'src>>,
    },
}

impl<'src> Expression<'src> {
    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;

        while let Some(expr) = pending.pop() {
            count += 1;
            match expr {
                Self::Binary { lhs, rhs, .. } => {
                    pending.push(lhs);
                    pending.push(rhs);
                }
                Self::Call { args, .. } => pending.extend(args),
                Self::Literal(_) | Self::Ref(_) => (),
            }
        }
        count
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::Ref(_))
    }

    /// Moves every non-leaf child into `out`.
    fn take_children(&mut self, out: &mut Vec<Expression<'src>>) {
        match self {
            Self::Binary { lhs, rhs, .. } => {
                for child in [lhs, rhs] {
                    if !child.is_leaf() {
                        out.push(std::mem::replace(&mut **child, Self::Ref("")));
                    }
                }
            }
            Self::Call { args, .. } => out.extend(args.drain(..).filter(|arg| !arg.is_leaf())),
            Self::Literal(_) | Self::Ref(_) => (),
        }
    }
}

// Operator chains nest to the left as deep as they are long, so the tree is
// torn down with an explicit stack.
impl Drop for Expression<'_> {
    fn drop(&mut self) {
        let mut pending = vec![];
        self.take_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}
