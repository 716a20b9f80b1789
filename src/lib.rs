pub mod expression;
pub use expression::{Column, Expr, FieldType, Literal, ResolveError, ScalarFunction, Schema};

pub mod util;

pub mod planner;
pub use planner::{IndexResolver, PhysicalPlan, PlanConfig, ResolveIndices, resolve_plan};
