use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expression::{Column, FieldType, Literal, ResolveError, Schema};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Column(Column),
    ScalarFunction(ScalarFunction),
    Constant(Constant),
}

/// A function call; `func_name` and `ret_type` identify the function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarFunction {
    pub func_name: String,
    pub ret_type: FieldType,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub value: Literal,
    pub ret_type: FieldType,
}

impl Expr {
    pub fn column(col: Column) -> Self {
        Expr::Column(col)
    }

    pub fn constant(value: Literal) -> Self {
        let ret_type = value.field_type();
        Expr::Constant(Constant { value, ret_type })
    }

    pub fn function(func_name: impl Into<String>, ret_type: FieldType, args: Vec<Expr>) -> Self {
        Expr::ScalarFunction(ScalarFunction::new(func_name, ret_type, args))
    }

    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Expr::Column(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_column_mut(&mut self) -> Option<&mut Column> {
        match self {
            Expr::Column(c) => Some(c),
            _ => None,
        }
    }

    /// Every column leaf, left to right.
    pub fn columns(&self) -> Vec<&Column> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a Column>) {
        match self {
            Expr::Column(c) => out.push(c),
            Expr::ScalarFunction(f) => f.args.iter().for_each(|a| a.collect_columns(out)),
            Expr::Constant(_) => {}
        }
    }

    /// Returns an expression of the same shape whose column leaves point at
    /// their position in `schema`.
    pub fn resolve_indices(&self, schema: &Schema) -> Result<Expr, ResolveError> {
        match self {
            Expr::Column(c) => Ok(Expr::Column(c.resolve_indices(schema)?)),
            Expr::ScalarFunction(f) => Ok(Expr::ScalarFunction(f.resolve_indices(schema)?)),
            Expr::Constant(_) => Ok(self.clone()),
        }
    }

    /// Resolves a whole list, stopping at the first failure.
    pub fn resolve_all(exprs: &[Expr], schema: &Schema) -> Result<Vec<Expr>, ResolveError> {
        exprs.iter().map(|e| e.resolve_indices(schema)).collect()
    }
}

impl ScalarFunction {
    pub fn new(func_name: impl Into<String>, ret_type: FieldType, args: Vec<Expr>) -> Self {
        Self { func_name: func_name.into(), ret_type, args }
    }

    pub fn resolve_indices(&self, schema: &Schema) -> Result<ScalarFunction, ResolveError> {
        let mut args = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            args.push(arg.resolve_indices(schema)?);
        }
        Ok(ScalarFunction::new(self.func_name.clone(), self.ret_type, args))
    }
}

impl From<Column> for Expr {
    fn from(col: Column) -> Self {
        Expr::Column(col)
    }
}

impl fmt::Display for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.func_name, args.join(", "))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(c) => write!(f, "{}", c),
            Expr::ScalarFunction(fun) => write!(f, "{}", fun),
            Expr::Constant(c) => write!(f, "{}", c.value),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(c) => write!(f, "Column({}@{})", c, c.index),
            Expr::ScalarFunction(fun) => write!(f, "Function({:?})", fun),
            Expr::Constant(c) => write!(f, "Constant({:?})", c.value),
        }
    }
}
