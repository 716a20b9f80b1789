use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    expression::{Expr, ResolveError, Schema},
    planner::{PhysicalPlan, PlanConfig, ResolveIndices, SchemaProducer},
    util::IntSet,
};

/// Computes one output column per expression, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProjection {
    #[serde(flatten)]
    pub producer: SchemaProducer,
    pub exprs: Vec<Expr>,
}

impl PhysicalProjection {
    pub fn new(child: PhysicalPlan, exprs: Vec<Expr>, schema: Schema) -> Self {
        Self { producer: SchemaProducer::new(vec![child], schema), exprs }
    }

    /// Canonicalizes the bare column references in `exprs` (already resolved
    /// against `child`) so that outputs of `child` passing the same input
    /// through collapse onto one position.
    fn refine_for_neighbour_projection(exprs: &mut [Expr], child: &PhysicalProjection) {
        // input position -> child output positions that are a bare copy of it
        let mut input_to_outputs: IndexMap<usize, Vec<usize>> = IndexMap::new();
        for (output, expr) in child.exprs.iter().enumerate() {
            if let Some(col) = expr.as_column() {
                input_to_outputs.entry(col.index).or_default().push(output);
            }
        }

        let mut union_set = IntSet::new(child.producer.schema.len());
        for outputs in input_to_outputs.values() {
            if let [first, rest @ ..] = outputs.as_slice() {
                for other in rest {
                    union_set.union(*first, *other);
                }
            }
        }

        for expr in exprs.iter_mut() {
            if let Some(col) = expr.as_column_mut() {
                let root = union_set.find_root(col.index);
                if root != col.index {
                    trace!(column = %col, from = col.index, to = root, "refined projection column");
                    col.index = root;
                }
            }
        }
    }
}

impl ResolveIndices for PhysicalProjection {
    fn resolve_indices(&mut self, config: &PlanConfig) -> Result<(), ResolveError> {
        self.producer.resolve_indices(config)?;

        let child = self.producer.base.child(0, "Projection")?;
        self.exprs = Expr::resolve_all(&self.exprs, child.schema())?;

        // only projection directly over projection is refined; joins over
        // projections are left as resolved
        if config.refine_neighbor_projections {
            if let PhysicalPlan::Projection(child_proj) = child {
                Self::refine_for_neighbour_projection(&mut self.exprs, child_proj);
            }
        }
        Ok(())
    }
}
