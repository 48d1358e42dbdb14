//! Infix arithmetic expressions with late-bound names.
//!
//! Parsing turns text into an [`Expression`] tree without looking anything up.
//! Variables, operator symbols and function names are resolved only when the
//! tree is evaluated, so one tree can be evaluated against many environments:
//!
//! ```
//! use calx::{evaluate, parse, Environment, Number};
//!
//! let expr = parse("1 + 2 * x").unwrap();
//! let mut env = Environment::standard();
//! env.define_number("x", 3i64);
//! assert_eq!(evaluate(&expr, &env), Ok(Number::Int(7)));
//! ```

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{ErrorKind, PResult};
pub use runtime::{
    env::{Binding, Bindings, Environment},
    eval::{evaluate, Interpreter},
    value::{Number, Rational},
};
pub use syntax::{parse, Expression, Operator};
