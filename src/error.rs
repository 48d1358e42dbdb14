use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ErrorKind {
    /// The input does not match the grammar. `pos` is the byte offset of the
    /// furthest point any alternative reached.
    #[error("parse error at offset {pos}: expected {expected}")]
    Parse { pos: usize, expected: String },

    #[error("unbound reference `{0}`")]
    UnboundReference(String),

    #[error("`{name}` is bound to {found}, expected {expected}")]
    BindingMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{name}` expects {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: String,
        found: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{0}`")]
    Overflow(String),

    #[error("`{op}` is not defined for {operand}")]
    UnsupportedOperand { op: String, operand: String },
}

pub type PResult<T> = Result<T, ErrorKind>;
