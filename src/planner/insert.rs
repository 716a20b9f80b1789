use serde::{Deserialize, Serialize};

use crate::{
    expression::{Column, Expr, ResolveError, Schema},
    planner::{PlanConfig, ResolveIndices},
};

/// `col = expr` from an `INSERT ... SET` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub col: Column,
    pub expr: Expr,
}

impl Assignment {
    pub fn new(col: Column, expr: Expr) -> Self {
        Self { col, expr }
    }
}

/// Writes rows into one table. Both sides of every assignment live in the
/// target table's row, so `SET b = a + 1` can read `a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalInsert {
    pub table: String,
    pub table_schema: Schema,
    #[serde(default)]
    pub set_list: Vec<Assignment>,
    /// Always empty: an insert returns no rows.
    #[serde(default)]
    pub schema: Schema,
}

impl PhysicalInsert {
    pub fn new(table: impl Into<String>, table_schema: Schema, set_list: Vec<Assignment>) -> Self {
        Self { table: table.into(), table_schema, set_list, schema: Schema::default() }
    }
}

impl ResolveIndices for PhysicalInsert {
    fn resolve_indices(&mut self, _config: &PlanConfig) -> Result<(), ResolveError> {
        let mut set_list = Vec::with_capacity(self.set_list.len());
        for set in &self.set_list {
            let col = set.col.resolve_indices(&self.table_schema)?;
            let expr = set.expr.resolve_indices(&self.table_schema)?;
            set_list.push(Assignment { col, expr });
        }
        self.set_list = set_list;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{FieldType, Literal};

    fn col(id: i64) -> Column {
        Column::new(id, format!("c{id}"), FieldType::Int)
    }
    fn table() -> Schema {
        Schema::new(vec![col(1), col(2), col(3)])
    }

    #[test]
    fn set_list_resolves_against_target_table() {
        // SET c3 = c1 + 1, c2 = 7
        let mut insert = PhysicalInsert::new(
            "t",
            table(),
            vec![
                Assignment::new(
                    col(3),
                    Expr::function("plus", FieldType::Int, vec![col(1).into(), Expr::constant(Literal::Int(1))]),
                ),
                Assignment::new(col(2), Expr::constant(Literal::Int(7))),
            ],
        );
        insert.resolve_indices(&PlanConfig::default()).expect("resolve");

        assert_eq!(insert.set_list[0].col.index, 2);
        assert_eq!(insert.set_list[0].expr.columns()[0].index, 0);
        assert_eq!(insert.set_list[1].col.index, 1);
        assert!(insert.schema.is_empty());
    }

    #[test]
    fn first_failing_assignment_stops_the_list() {
        // second assignment fails; the third is never resolved
        let mut insert = PhysicalInsert::new(
            "t",
            table(),
            vec![
                Assignment::new(col(1), Expr::constant(Literal::Int(0))),
                Assignment::new(col(2), col(9).into()),
                Assignment::new(col(8), col(1).into()),
            ],
        );

        match insert.resolve_indices(&PlanConfig::default()) {
            Err(ResolveError::ColumnNotFound { column, .. }) => assert_eq!(column, "c9#9"),
            other => panic!("expected failure on c9, got {other:?}"),
        }
    }

    #[test]
    fn target_column_outside_table_fails() {
        let mut insert = PhysicalInsert::new("t", table(), vec![Assignment::new(col(4), col(1).into())]);
        match insert.resolve_indices(&PlanConfig::default()) {
            Err(ResolveError::ColumnNotFound { column, .. }) => assert_eq!(column, "c4#4"),
            other => panic!("expected failure on c4, got {other:?}"),
        }
    }
}
