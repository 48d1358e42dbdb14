use std::{cell::Cell, collections::HashMap, fmt, rc::Rc};

use super::value::Number;
use crate::error::PResult;

pub type OperatorFn = dyn Fn(Number, Number) -> PResult<Number>;
pub type Function = dyn Fn(&[Number]) -> PResult<Number>;

/// A value bound to a name in an environment.
#[derive(Clone)]
pub enum Binding {
    Number(Number),
    /// An indirect container. Operands always read its current content.
    Cell(Rc<Cell<Number>>),
    Operator(Rc<OperatorFn>),
    Function(Rc<Function>),
}

impl Binding {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Cell(_) => "a variable",
            Self::Operator(_) => "an operator",
            Self::Function(_) => "a function",
        }
    }

    /// The numeric value behind this binding, if it has one.
    pub fn resolve_var(&self) -> Option<Number> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Cell(cell) => Some(cell.get()),
            Self::Operator(_) | Self::Function(_) => None,
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Self::Cell(cell) => f.debug_tuple("Cell").field(&cell.get()).finish(),
            Self::Operator(_) => f.write_str("Operator(..)"),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// The lookup contract the evaluator relies on.
pub trait Bindings {
    fn get(&self, name: &str) -> Option<&Binding>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Environment {
    entries: HashMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, binding: Binding) -> Option<Binding> {
        self.entries.insert(name.into(), binding)
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.entries.remove(name)
    }

    pub fn define_number(&mut self, name: impl Into<String>, value: impl Into<Number>) {
        let _ = self.insert(name, Binding::Number(value.into()));
    }

    /// Binds `name` to a shared cell and returns the handle, so the caller can
    /// update the value between evaluations.
    pub fn define_cell(&mut self, name: impl Into<String>, value: Number) -> Rc<Cell<Number>> {
        let cell = Rc::new(Cell::new(value));
        let _ = self.insert(name, Binding::Cell(Rc::clone(&cell)));
        cell
    }

    pub fn define_operator<F>(&mut self, symbol: impl Into<String>, op: F)
    where
        F: Fn(Number, Number) -> PResult<Number> + 'static,
    {
        let _ = self.insert(symbol, Binding::Operator(Rc::new(op)));
    }

    pub fn define_function<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&[Number]) -> PResult<Number> + 'static,
    {
        let _ = self.insert(name, Binding::Function(Rc::new(func)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Bindings for Environment {
    fn get(&self, name: &str) -> Option<&Binding> {
        self.entries.get(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Bindings for HashMap<String, Binding> {
    fn get(&self, name: &str) -> Option<&Binding> {
        HashMap::get(self, name)
    }
}
