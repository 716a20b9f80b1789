use serde::{Deserialize, Serialize};

use crate::{
    expression::{ResolveError, Schema},
    planner::{PhysicalPlan, PlanConfig, ResolveIndices},
};

/// Children shared by every node that has any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasePlan {
    #[serde(default)]
    pub children: Vec<PhysicalPlan>,
}

impl BasePlan {
    pub fn new(children: Vec<PhysicalPlan>) -> Self {
        Self { children }
    }

    pub fn child(&self, index: usize, plan: &'static str) -> Result<&PhysicalPlan, ResolveError> {
        self.children.get(index).ok_or(ResolveError::MissingChild { plan, index })
    }

    pub fn child_schema(&self, index: usize, plan: &'static str) -> Result<&Schema, ResolveError> {
        Ok(self.child(index, plan)?.schema())
    }
}

impl ResolveIndices for BasePlan {
    /// Resolves children left to right; the first failure stops the walk.
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        for child in &mut self.children {
            child.resolve_indices(config)?;
        }
        Ok(())
    }
}

/// A node that owns its output schema instead of forwarding its child's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaProducer {
    #[serde(flatten)]
    pub base: BasePlan,
    pub schema: Schema,
}

impl SchemaProducer {
    pub fn new(children: Vec<PhysicalPlan>, schema: Schema) -> Self {
        Self { base: BasePlan::new(children), schema }
    }
}

impl ResolveIndices for SchemaProducer {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.base.resolve_indices(config)
    }
}
