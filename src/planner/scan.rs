use serde::{Deserialize, Serialize};

use crate::{
    expression::{ResolveError, Schema},
    planner::{PlanConfig, ResolveIndices},
};

/// Full scan of a table's rows; leaf of a table reader's sub-plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTableScan {
    pub table: String,
    pub schema: Schema,
}

/// Range scan over one index of a table; leaf of an index reader's sub-plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalIndexScan {
    pub table: String,
    pub index: String,
    pub schema: Schema,
}

/// Produces `row_count` rows without reading storage (`SELECT 1`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTableDual {
    #[serde(default)]
    pub row_count: usize,
    pub schema: Schema,
}

impl PhysicalTableScan {
    pub fn new(table: impl Into<String>, schema: Schema) -> Self {
        Self { table: table.into(), schema }
    }
}

impl PhysicalIndexScan {
    pub fn new(table: impl Into<String>, index: impl Into<String>, schema: Schema) -> Self {
        Self { table: table.into(), index: index.into(), schema }
    }
}

impl PhysicalTableDual {
    pub fn new(row_count: usize, schema: Schema) -> Self {
        Self { row_count, schema }
    }
}

// Leaves own their schema as built upstream and reference nothing.

impl ResolveIndices for PhysicalTableScan {
    fn resolve_indices(&mut self, _config: &PlanConfig) -> Result<(), ResolveError> {
        Ok(())
    }
}

impl ResolveIndices for PhysicalIndexScan {
    fn resolve_indices(&mut self, _config: &PlanConfig) -> Result<(), ResolveError> {
        Ok(())
    }
}

impl ResolveIndices for PhysicalTableDual {
    fn resolve_indices(&mut self, _config: &PlanConfig) -> Result<(), ResolveError> {
        Ok(())
    }
}
