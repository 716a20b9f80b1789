use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expression::{FieldType, ResolveError, Schema};

/// A column reference.
///
/// `unique_id` is the stable identity handed out by the plan builder and never
/// changes. `index` is the slot of the value in the row the owning expression
/// will be evaluated against; it is only meaningful after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub unique_id: i64,
    #[serde(default)]
    pub index: usize,
    /// Only used in diagnostics.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ret_type: FieldType,
}

impl Column {
    pub fn new(unique_id: i64, name: impl Into<String>, ret_type: FieldType) -> Self {
        Self { unique_id, index: 0, name: name.into(), ret_type }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns a copy of this column pointing at its position in `schema`.
    pub fn resolve_indices(&self, schema: &Schema) -> Result<Column, ResolveError> {
        let index = schema.column_index(self).ok_or_else(|| ResolveError::ColumnNotFound {
            column: self.to_string(),
            schema: schema.to_string(),
        })?;

        Ok(Column { index, ..self.clone() })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "Column#{}", self.unique_id)
        } else {
            write!(f, "{}#{}", self.name, self.unique_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_of(ids: &[i64]) -> Schema {
        Schema::new(ids.iter().map(|id| Column::new(*id, format!("c{id}"), FieldType::Int)).collect())
    }

    #[test]
    fn resolve_finds_position_by_identity() {
        let schema = schema_of(&[7, 3, 9]);
        let col = Column::new(9, "c9", FieldType::Int).with_index(42);

        let resolved = col.resolve_indices(&schema).expect("resolve");
        assert_eq!(resolved.index, 2);
        assert_eq!(resolved.unique_id, 9);
        assert_eq!(resolved.name, "c9");
        // input column untouched
        assert_eq!(col.index, 42);
    }

    #[test]
    fn resolve_ignores_name_and_uses_identity() {
        let schema = schema_of(&[1, 2]);
        let col = Column::new(2, "other_name", FieldType::String);
        assert_eq!(col.resolve_indices(&schema).unwrap().index, 1);
    }

    #[test]
    fn resolve_fails_when_identity_is_absent() {
        let schema = schema_of(&[1, 2]);
        let col = Column::new(5, "ghost", FieldType::Int);

        match col.resolve_indices(&schema) {
            Err(ResolveError::ColumnNotFound { column, schema }) => {
                assert_eq!(column, "ghost#5");
                assert!(schema.contains("c1#1"), "unexpected schema text: {schema}");
            }
            other => panic!("expected ColumnNotFound, got {other:?}"),
        }
    }

    #[test]
    fn display_falls_back_to_identity() {
        assert_eq!(Column::new(4, "", FieldType::Int).to_string(), "Column#4");
    }
}
