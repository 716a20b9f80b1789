use std::fmt::{self, Display};

/// Failure raised while rewriting column references into row offsets.
///
/// Every variant points at a plan built wrong upstream (stale identity,
/// swapped children, a malformed join key); none of them depend on data.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A column identity is absent from the schema it was resolved against.
    ColumnNotFound { column: String, schema: String },
    /// A node lacks a child its kind requires.
    MissingChild { plan: &'static str, index: usize },
    /// A hash-join equal condition that is not a binary function.
    MalformedEqualCondition { func_name: String, args: usize },
    /// One side of a hash-join equal condition did not resolve to a bare column.
    JoinKeyNotColumn { expr: String },
}

impl ResolveError {
    pub fn err<T>(self) -> Result<T, ResolveError> {
        Err(self)
    }
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::ColumnNotFound { column, schema } => {
                write!(f, "ResolveError: can't find column {} in schema {}", column, schema)
            }
            ResolveError::MissingChild { plan, index } => {
                write!(f, "ResolveError: {} has no child at position {}", plan, index)
            }
            ResolveError::MalformedEqualCondition { func_name, args } => {
                write!(f, "ResolveError: equal condition {} expects 2 arguments, got {}", func_name, args)
            }
            ResolveError::JoinKeyNotColumn { expr } => {
                write!(f, "ResolveError: join key {} is not a column", expr)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
