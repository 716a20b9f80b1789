use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    expression::{Column, Expr, ResolveError, ScalarFunction, Schema},
    planner::{PhysicalPlan, PlanConfig, ResolveIndices, SchemaProducer},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    #[default]
    Inner,
    LeftOuter,
    RightOuter,
    Semi,
    AntiSemi,
}

/// Filters shared by both join algorithms.
///
/// `left_conditions` and `right_conditions` see a single side's row;
/// `other_conditions` see the joined row, left columns first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinConditions {
    #[serde(default)]
    pub left_conditions: Vec<Expr>,
    #[serde(default)]
    pub right_conditions: Vec<Expr>,
    #[serde(default)]
    pub other_conditions: Vec<Expr>,
}

impl JoinConditions {
    fn resolve(&mut self, left: &Schema, right: &Schema) -> Result<(), ResolveError> {
        self.left_conditions = Expr::resolve_all(&self.left_conditions, left)?;
        self.right_conditions = Expr::resolve_all(&self.right_conditions, right)?;
        if !self.other_conditions.is_empty() {
            let joined = Schema::merge(left, right);
            self.other_conditions = Expr::resolve_all(&self.other_conditions, &joined)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalHashJoin {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    #[serde(default)]
    pub join_type: JoinType,
    /// `eq(left_col, right_col)` pairs driving the hash table.
    pub equal_conditions: Vec<ScalarFunction>,
    /// Filled in by resolution, paired with `equal_conditions` by position.
    #[serde(default)]
    pub left_join_keys: Vec<Column>,
    #[serde(default)]
    pub right_join_keys: Vec<Column>,
    #[serde(flatten)]
    pub conditions: JoinConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalMergeJoin {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    #[serde(default)]
    pub join_type: JoinType,
    pub left_join_keys: Vec<Column>,
    pub right_join_keys: Vec<Column>,
    #[serde(flatten)]
    pub conditions: JoinConditions,
}

impl PhysicalHashJoin {
    pub fn new(
        left: PhysicalPlan,
        right: PhysicalPlan,
        join_type: JoinType,
        equal_conditions: Vec<ScalarFunction>,
        conditions: JoinConditions,
    ) -> Self {
        let schema = Schema::merge(left.schema(), right.schema());
        Self {
            producer: SchemaProducer::new(vec![left, right], schema),
            join_type,
            equal_conditions,
            left_join_keys: vec![],
            right_join_keys: vec![],
            conditions,
        }
    }

    fn join_key(expr: &Expr) -> Result<Column, ResolveError> {
        match expr {
            Expr::Column(c) => Ok(c.clone()),
            other => ResolveError::JoinKeyNotColumn { expr: other.to_string() }.err(),
        }
    }
}

impl PhysicalMergeJoin {
    pub fn new(
        left: PhysicalPlan,
        right: PhysicalPlan,
        join_type: JoinType,
        left_join_keys: Vec<Column>,
        right_join_keys: Vec<Column>,
        conditions: JoinConditions,
    ) -> Self {
        let schema = Schema::merge(left.schema(), right.schema());
        Self {
            producer: SchemaProducer::new(vec![left, right], schema),
            join_type,
            left_join_keys,
            right_join_keys,
            conditions,
        }
    }
}

impl ResolveIndices for PhysicalHashJoin {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.producer.resolve_indices(config)?;

        let left = self.producer.base.child_schema(0, "HashJoin")?;
        let right = self.producer.base.child_schema(1, "HashJoin")?;

        let n = self.equal_conditions.len();
        let mut equal_conditions = Vec::with_capacity(n);
        let mut left_join_keys = Vec::with_capacity(n);
        let mut right_join_keys = Vec::with_capacity(n);
        for cond in &self.equal_conditions {
            let [l_arg, r_arg] = cond.args.as_slice() else {
                return ResolveError::MalformedEqualCondition {
                    func_name: cond.func_name.clone(),
                    args: cond.args.len(),
                }
                .err();
            };
            let l_arg = l_arg.resolve_indices(left)?;
            left_join_keys.push(Self::join_key(&l_arg)?);
            let r_arg = r_arg.resolve_indices(right)?;
            right_join_keys.push(Self::join_key(&r_arg)?);

            equal_conditions.push(ScalarFunction::new(cond.func_name.clone(), cond.ret_type, vec![l_arg, r_arg]));
        }
        trace!(keys = n, left = left.len(), right = right.len(), "resolved hash join keys");

        self.equal_conditions = equal_conditions;
        self.left_join_keys = left_join_keys;
        self.right_join_keys = right_join_keys;
        self.conditions.resolve(left, right)
    }
}

impl ResolveIndices for PhysicalMergeJoin {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.producer.resolve_indices(config)?;

        let left = self.producer.base.child_schema(0, "MergeJoin")?;
        let right = self.producer.base.child_schema(1, "MergeJoin")?;

        self.left_join_keys = self
            .left_join_keys
            .iter()
            .map(|c| c.resolve_indices(left))
            .collect::<Result<_, _>>()?;
        self.right_join_keys = self
            .right_join_keys
            .iter()
            .map(|c| c.resolve_indices(right))
            .collect::<Result<_, _>>()?;
        self.conditions.resolve(left, right)
    }
}
