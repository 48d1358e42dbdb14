pub mod builtin;
pub mod env;
pub mod eval;
pub mod value;
