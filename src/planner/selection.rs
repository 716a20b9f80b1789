use serde::{Deserialize, Serialize};

use crate::{
    expression::{Expr, ResolveError, Schema},
    planner::{BasePlan, PhysicalPlan, PlanConfig, ResolveIndices, SchemaProducer},
};

/// Row filter; all conditions must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSelection {
    #[serde(flatten)]
    pub base: BasePlan,
    pub conditions: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalLimit {
    #[serde(flatten)]
    pub base: BasePlan,
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Concatenates the rows of all children; every child yields the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalUnionAll {
    #[serde(flatten)]
    pub producer: SchemaProducer,
}

impl PhysicalSelection {
    pub fn new(child: PhysicalPlan, conditions: Vec<Expr>) -> Self {
        Self { base: BasePlan::new(vec![child]), conditions }
    }
}

impl PhysicalLimit {
    pub fn new(child: PhysicalPlan, count: u64, offset: u64) -> Self {
        Self { base: BasePlan::new(vec![child]), count, offset }
    }
}

impl PhysicalUnionAll {
    pub fn new(children: Vec<PhysicalPlan>, schema: Schema) -> Self {
        Self { producer: SchemaProducer::new(children, schema) }
    }
}

impl ResolveIndices for PhysicalSelection {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.base.resolve_indices(config)?;

        let schema = self.base.child_schema(0, "Selection")?;
        self.conditions = Expr::resolve_all(&self.conditions, schema)?;
        Ok(())
    }
}

impl ResolveIndices for PhysicalLimit {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.base.resolve_indices(config)
    }
}

impl ResolveIndices for PhysicalUnionAll {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.producer.resolve_indices(config)
    }
}
