use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    expression::{ResolveError, Schema},
    planner::{
        PhysicalAggregation, PhysicalHashJoin, PhysicalIndexLookUpReader, PhysicalIndexReader,
        PhysicalIndexScan, PhysicalInsert, PhysicalLimit, PhysicalMergeJoin, PhysicalProjection,
        PhysicalSelection, PhysicalSort, PhysicalTableDual, PhysicalTableReader, PhysicalTableScan,
        PhysicalTopN, PhysicalUnionAll, PhysicalUnionScan, PlanConfig,
    },
};

static EMPTY_SCHEMA: Schema = Schema { columns: Vec::new() };

/// Rewrites every column reference a node owns into its row offset.
///
/// Implementations resolve their children first, then their own fields
/// against the children's final schemas.
pub trait ResolveIndices {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError>;
}

/// A node of the physical plan tree. Children are owned; the tree never
/// shares subplans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PhysicalPlan {
    TableScan(PhysicalTableScan),
    IndexScan(PhysicalIndexScan),
    TableDual(PhysicalTableDual),
    TableReader(PhysicalTableReader),
    IndexReader(PhysicalIndexReader),
    IndexLookUpReader(PhysicalIndexLookUpReader),
    UnionScan(PhysicalUnionScan),
    Selection(PhysicalSelection),
    Projection(PhysicalProjection),
    HashJoin(PhysicalHashJoin),
    MergeJoin(PhysicalMergeJoin),
    Aggregation(PhysicalAggregation),
    Sort(PhysicalSort),
    TopN(PhysicalTopN),
    Limit(PhysicalLimit),
    UnionAll(PhysicalUnionAll),
    Insert(PhysicalInsert),
}

impl PhysicalPlan {
    pub fn from_json(text: &str) -> Result<PhysicalPlan, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhysicalPlan::TableScan(_) => "TableScan",
            PhysicalPlan::IndexScan(_) => "IndexScan",
            PhysicalPlan::TableDual(_) => "TableDual",
            PhysicalPlan::TableReader(_) => "TableReader",
            PhysicalPlan::IndexReader(_) => "IndexReader",
            PhysicalPlan::IndexLookUpReader(_) => "IndexLookUpReader",
            PhysicalPlan::UnionScan(_) => "UnionScan",
            PhysicalPlan::Selection(_) => "Selection",
            PhysicalPlan::Projection(_) => "Projection",
            PhysicalPlan::HashJoin(_) => "HashJoin",
            PhysicalPlan::MergeJoin(_) => "MergeJoin",
            PhysicalPlan::Aggregation(_) => "Aggregation",
            PhysicalPlan::Sort(_) => "Sort",
            PhysicalPlan::TopN(_) => "TopN",
            PhysicalPlan::Limit(_) => "Limit",
            PhysicalPlan::UnionAll(_) => "UnionAll",
            PhysicalPlan::Insert(_) => "Insert",
        }
    }

    /// Output row shape. Nodes that only filter or reorder rows report their
    /// first child's schema.
    pub fn schema(&self) -> &Schema {
        match self {
            PhysicalPlan::TableScan(p) => &p.schema,
            PhysicalPlan::IndexScan(p) => &p.schema,
            PhysicalPlan::TableDual(p) => &p.schema,
            PhysicalPlan::TableReader(p) => &p.producer.schema,
            PhysicalPlan::IndexReader(p) => &p.producer.schema,
            PhysicalPlan::IndexLookUpReader(p) => &p.producer.schema,
            PhysicalPlan::Projection(p) => &p.producer.schema,
            PhysicalPlan::HashJoin(p) => &p.producer.schema,
            PhysicalPlan::MergeJoin(p) => &p.producer.schema,
            PhysicalPlan::Aggregation(p) => &p.producer.schema,
            PhysicalPlan::UnionAll(p) => &p.producer.schema,
            PhysicalPlan::Insert(p) => &p.schema,
            PhysicalPlan::UnionScan(_)
            | PhysicalPlan::Selection(_)
            | PhysicalPlan::Sort(_)
            | PhysicalPlan::TopN(_)
            | PhysicalPlan::Limit(_) => self
                .children()
                .first()
                .map(PhysicalPlan::schema)
                .unwrap_or(&EMPTY_SCHEMA),
        }
    }

    /// Direct children in the tree. Reader sub-plans are not children.
    pub fn children(&self) -> &[PhysicalPlan] {
        match self {
            PhysicalPlan::TableScan(_)
            | PhysicalPlan::IndexScan(_)
            | PhysicalPlan::TableDual(_)
            | PhysicalPlan::Insert(_) => &[],
            PhysicalPlan::TableReader(p) => &p.producer.base.children,
            PhysicalPlan::IndexReader(p) => &p.producer.base.children,
            PhysicalPlan::IndexLookUpReader(p) => &p.producer.base.children,
            PhysicalPlan::Projection(p) => &p.producer.base.children,
            PhysicalPlan::HashJoin(p) => &p.producer.base.children,
            PhysicalPlan::MergeJoin(p) => &p.producer.base.children,
            PhysicalPlan::Aggregation(p) => &p.producer.base.children,
            PhysicalPlan::UnionAll(p) => &p.producer.base.children,
            PhysicalPlan::UnionScan(p) => &p.base.children,
            PhysicalPlan::Selection(p) => &p.base.children,
            PhysicalPlan::Sort(p) => &p.base.children,
            PhysicalPlan::TopN(p) => &p.base.children,
            PhysicalPlan::Limit(p) => &p.base.children,
        }
    }
}

impl ResolveIndices for PhysicalPlan {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        trace!(plan = self.name(), "resolving indices");
        match self {
            PhysicalPlan::TableScan(p) => p.resolve_indices(config),
            PhysicalPlan::IndexScan(p) => p.resolve_indices(config),
            PhysicalPlan::TableDual(p) => p.resolve_indices(config),
            PhysicalPlan::TableReader(p) => p.resolve_indices(config),
            PhysicalPlan::IndexReader(p) => p.resolve_indices(config),
            PhysicalPlan::IndexLookUpReader(p) => p.resolve_indices(config),
            PhysicalPlan::UnionScan(p) => p.resolve_indices(config),
            PhysicalPlan::Selection(p) => p.resolve_indices(config),
            PhysicalPlan::Projection(p) => p.resolve_indices(config),
            PhysicalPlan::HashJoin(p) => p.resolve_indices(config),
            PhysicalPlan::MergeJoin(p) => p.resolve_indices(config),
            PhysicalPlan::Aggregation(p) => p.resolve_indices(config),
            PhysicalPlan::Sort(p) => p.resolve_indices(config),
            PhysicalPlan::TopN(p) => p.resolve_indices(config),
            PhysicalPlan::Limit(p) => p.resolve_indices(config),
            PhysicalPlan::UnionAll(p) => p.resolve_indices(config),
            PhysicalPlan::Insert(p) => p.resolve_indices(config),
        }
    }
}
