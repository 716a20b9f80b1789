use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expression::Column;

/// Ordered output row shape of a plan node.
///
/// Position `i` in `columns` is the slot `i` of every row the node produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the first column sharing `col`'s identity.
    pub fn column_index(&self, col: &Column) -> Option<usize> {
        self.columns.iter().position(|c| c.unique_id == col.unique_id)
    }

    pub fn contains(&self, col: &Column) -> bool {
        self.column_index(col).is_some()
    }

    pub fn append(&mut self, col: Column) {
        self.columns.push(col);
    }

    /// Row layout of a join: left columns at `[0, left.len())`, right columns
    /// right after them.
    pub fn merge(left: &Schema, right: &Schema) -> Schema {
        let mut columns = Vec::with_capacity(left.len() + right.len());
        columns.extend(left.columns.iter().cloned());
        columns.extend(right.columns.iter().cloned());
        Schema { columns }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.columns.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", names.join(","))
    }
}
