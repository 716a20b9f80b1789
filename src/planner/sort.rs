use serde::{Deserialize, Serialize};

use crate::{
    expression::{Expr, ResolveError, Schema},
    planner::{BasePlan, PhysicalPlan, PlanConfig, ResolveIndices},
};

/// One `ORDER BY` item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByItem {
    pub expr: Expr,
    #[serde(default)]
    pub desc: bool,
    #[serde(default)]
    pub nulls_first: bool,
}

impl ByItem {
    pub fn asc(expr: Expr) -> Self {
        Self { expr, desc: false, nulls_first: false }
    }

    pub fn desc(expr: Expr) -> Self {
        Self { expr, desc: true, nulls_first: false }
    }

    /// Item order and ordering flags are kept.
    fn resolve_all(items: &[ByItem], schema: &Schema) -> Result<Vec<ByItem>, ResolveError> {
        items
            .iter()
            .map(|item| {
                Ok(ByItem {
                    expr: item.expr.resolve_indices(schema)?,
                    desc: item.desc,
                    nulls_first: item.nulls_first,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSort {
    #[serde(flatten)]
    pub base: BasePlan,
    pub by_items: Vec<ByItem>,
}

/// Sort that keeps only rows `offset..offset + count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTopN {
    #[serde(flatten)]
    pub base: BasePlan,
    pub by_items: Vec<ByItem>,
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
}

impl PhysicalSort {
    pub fn new(child: PhysicalPlan, by_items: Vec<ByItem>) -> Self {
        Self { base: BasePlan::new(vec![child]), by_items }
    }
}

impl PhysicalTopN {
    pub fn new(child: PhysicalPlan, by_items: Vec<ByItem>, count: u64, offset: u64) -> Self {
        Self { base: BasePlan::new(vec![child]), by_items, count, offset }
    }
}

impl ResolveIndices for PhysicalSort {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.base.resolve_indices(config)?;

        let schema = self.base.child_schema(0, "Sort")?;
        self.by_items = ByItem::resolve_all(&self.by_items, schema)?;
        Ok(())
    }
}

impl ResolveIndices for PhysicalTopN {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.base.resolve_indices(config)?;

        let schema = self.base.child_schema(0, "TopN")?;
        self.by_items = ByItem::resolve_all(&self.by_items, schema)?;
        Ok(())
    }
}
