use super::{
    env::{Binding, Bindings, Environment},
    value::Number,
};
use crate::{
    error::{ErrorKind, PResult},
    syntax::{parse, Expression},
};

/// Evaluates `expr` against `env`. Every name in the tree is looked up here,
/// never during parsing.
pub fn evaluate<B>(expr: &Expression, env: &B) -> PResult<Number>
where
    B: Bindings + ?Sized,
{
    match expr {
        Expression::Literal(v) => Ok(*v),
        Expression::Ref(id) => {
            let binding = lookup(env, id)?;
            binding
                .resolve_var()
                .ok_or_else(|| mismatch(id, "a number", binding))
        }
        Expression::Binary { .. } => {
            // Chains like `1 + 2 + 3` nest down the left side. Resolve every
            // operator on that spine first, then fold the operands left to
            // right.
            let mut spine = vec![];
            let mut node = expr;
            while let Expression::Binary { lhs, op, rhs } = node {
                let key = op.symbol();
                let func = match lookup(env, key)? {
                    Binding::Operator(func) => func,
                    other => return Err(mismatch(key, "an operator", other)),
                };
                spine.push((key, func, rhs));
                node = &**lhs;
            }

            let mut acc = evaluate(node, env)?;
            for (key, func, rhs) in spine.into_iter().rev() {
                let rhs = evaluate(rhs, env)?;
                log::trace!("{acc} {key} {rhs}");
                acc = func(acc, rhs)?;
            }
            Ok(acc)
        }
        Expression::Call { id, args } => {
            let func = match lookup(env, id)? {
                Binding::Function(func) => func,
                other => return Err(mismatch(id, "a function", other)),
            };

            let args = args
                .iter()
                .map(|arg| evaluate(arg, env))
                .collect::<PResult<Vec<_>>>()?;
            log::trace!("call {id} with {} argument(s)", args.len());
            func(&args)
        }
    }
}

fn lookup<'env, B>(env: &'env B, name: &str) -> PResult<&'env Binding>
where
    B: Bindings + ?Sized,
{
    env.get(name)
        .ok_or_else(|| ErrorKind::UnboundReference(name.to_string()))
}

fn mismatch(name: &str, expected: &'static str, found: &Binding) -> ErrorKind {
    ErrorKind::BindingMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Parses and evaluates source text against an environment it owns.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_env(Environment::standard())
    }

    pub fn with_env(env: Environment) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn eval(&self, src: &str) -> PResult<Number> {
        let expr = parse(src)?;
        evaluate(&expr, &self.env)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
