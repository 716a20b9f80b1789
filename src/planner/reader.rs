use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    expression::{Column, Expr, ResolveError, Schema},
    planner::{BasePlan, PhysicalPlan, PlanConfig, ResolveIndices, SchemaProducer},
};

/// Reads table rows through an access sub-plan (scan plus anything pushed
/// down to storage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTableReader {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    pub table_plan: Box<PhysicalPlan>,
}

/// Reads index entries through an index access sub-plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalIndexReader {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    pub index_plan: Box<PhysicalPlan>,
    /// Columns handed upward, located in the index sub-plan's row.
    pub output_columns: Vec<Column>,
}

/// Two-phase read: index entries first, then the table rows they point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalIndexLookUpReader {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    pub index_plan: Box<PhysicalPlan>,
    pub table_plan: Box<PhysicalPlan>,
    /// Handle column added to the table side when the query did not select it.
    #[serde(default)]
    pub extra_handle_col: Option<Column>,
}

/// Merges uncommitted transaction writes over a committed-data read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalUnionScan {
    #[serde(flatten)]
    pub base: BasePlan,
    #[serde(default)]
    pub conditions: Vec<Expr>,
    /// Row identity used to hide committed rows shadowed by local writes.
    pub handle_col: Column,
}

impl PhysicalTableReader {
    pub fn new(table_plan: PhysicalPlan) -> Self {
        let schema = table_plan.schema().clone();
        Self { producer: SchemaProducer::new(vec![], schema), table_plan: Box::new(table_plan) }
    }
}

impl PhysicalIndexReader {
    pub fn new(index_plan: PhysicalPlan, output_columns: Vec<Column>) -> Self {
        let schema = Schema::new(output_columns.clone());
        Self {
            producer: SchemaProducer::new(vec![], schema),
            index_plan: Box::new(index_plan),
            output_columns,
        }
    }
}

impl PhysicalIndexLookUpReader {
    pub fn new(index_plan: PhysicalPlan, table_plan: PhysicalPlan, extra_handle_col: Option<Column>) -> Self {
        let schema = table_plan.schema().clone();
        Self {
            producer: SchemaProducer::new(vec![], schema),
            index_plan: Box::new(index_plan),
            table_plan: Box::new(table_plan),
            extra_handle_col,
        }
    }
}

impl PhysicalUnionScan {
    pub fn new(child: PhysicalPlan, conditions: Vec<Expr>, handle_col: Column) -> Self {
        Self { base: BasePlan::new(vec![child]), conditions, handle_col }
    }
}

impl ResolveIndices for PhysicalTableReader {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.table_plan.resolve_indices(config)
    }
}

impl ResolveIndices for PhysicalIndexReader {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.producer.resolve_indices(config)?;
        self.index_plan.resolve_indices(config)?;

        let index_schema = self.index_plan.schema();
        let mut output_columns = Vec::with_capacity(self.output_columns.len());
        for col in &self.output_columns {
            output_columns.push(col.resolve_indices(index_schema)?);
        }
        self.output_columns = output_columns;
        Ok(())
    }
}

impl ResolveIndices for PhysicalIndexLookUpReader {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.table_plan.resolve_indices(config)?;
        self.index_plan.resolve_indices(config)?;

        if let Some(handle) = &self.extra_handle_col {
            let resolved = handle.resolve_indices(self.table_plan.schema())?;
            trace!(handle = %resolved, index = resolved.index, "resolved extra handle column");
            self.extra_handle_col = Some(resolved);
        }
        Ok(())
    }
}

impl ResolveIndices for PhysicalUnionScan {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.base.resolve_indices(config)?;

        let schema = self.base.child_schema(0, "UnionScan")?;
        self.conditions = Expr::resolve_all(&self.conditions, schema)?;
        self.handle_col = self.handle_col.resolve_indices(schema)?;
        Ok(())
    }
}
