use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse result type carried by columns, functions and constants.
///
/// The resolution pass never inspects it; it only travels along so rebuilt
/// expressions keep the type the upstream builder assigned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Untyped NULL
    #[default]
    Null,
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Floating-point number
    Float,
    /// Character string
    String,
    /// Fixed-point decimal
    Decimal,
    /// Date or timestamp
    DateTime,
    /// Raw bytes
    Blob,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Null => "null",
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Decimal => "decimal",
            FieldType::DateTime => "datetime",
            FieldType::Blob => "blob",
        };
        f.write_str(name)
    }
}
