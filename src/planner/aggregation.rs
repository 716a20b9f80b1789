use serde::{Deserialize, Serialize};

use crate::{
    expression::{Expr, FieldType, ResolveError, Schema},
    planner::{PhysicalPlan, PlanConfig, ResolveIndices, SchemaProducer},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationKind {
    /// Groups through a hash table; input order is irrelevant.
    #[default]
    Hash,
    /// Input arrives sorted on the group keys.
    Stream,
}

/// One aggregate call, e.g. `sum(distinct a + 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggFuncDesc {
    pub name: String,
    pub args: Vec<Expr>,
    #[serde(default)]
    pub has_distinct: bool,
    #[serde(default)]
    pub ret_type: FieldType,
}

impl AggFuncDesc {
    pub fn new(name: impl Into<String>, args: Vec<Expr>, has_distinct: bool, ret_type: FieldType) -> Self {
        Self { name: name.into(), args, has_distinct, ret_type }
    }
}

/// Output is the group keys followed by one column per aggregate; that schema
/// is built upstream and nothing here points into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalAggregation {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    #[serde(default)]
    pub kind: AggregationKind,
    pub agg_funcs: Vec<AggFuncDesc>,
    #[serde(default)]
    pub group_by_items: Vec<Expr>,
}

impl PhysicalAggregation {
    pub fn new(
        child: PhysicalPlan,
        kind: AggregationKind,
        agg_funcs: Vec<AggFuncDesc>,
        group_by_items: Vec<Expr>,
        schema: Schema,
    ) -> Self {
        Self { producer: SchemaProducer::new(vec![child], schema), kind, agg_funcs, group_by_items }
    }
}

impl ResolveIndices for PhysicalAggregation {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.producer.resolve_indices(config)?;

        let schema = self.producer.base.child_schema(0, "Aggregation")?;
        for agg in &mut self.agg_funcs {
            agg.args = Expr::resolve_all(&agg.args, schema)?;
        }
        self.group_by_items = Expr::resolve_all(&self.group_by_items, schema)?;
        Ok(())
    }
}
