use tracing::debug;

use crate::{
    expression::ResolveError,
    planner::{PhysicalPlan, PlanConfig, ResolveIndices},
};

/// Final planning pass: points every column reference in the tree at its
/// slot in the row it will be evaluated against.
///
/// Either the whole tree resolves or the first error is returned; a failed
/// tree must not reach execution.
#[derive(Debug, Clone, Default)]
pub struct IndexResolver {
    config: PlanConfig,
}

impl IndexResolver {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn resolve(&self, plan: &mut PhysicalPlan) -> Result<(), ResolveError> {
        let root = plan.name();
        debug!(root, "resolving column indices");
        plan.resolve_indices(&self.config)
            .inspect_err(|err| debug!(root, error = %err, "column index resolution failed"))?;
        debug!(root, "column indices resolved");
        Ok(())
    }
}

/// Resolves `plan` with the default configuration.
pub fn resolve_plan(plan: &mut PhysicalPlan) -> Result<(), ResolveError> {
    IndexResolver::default().resolve(plan)
}
