pub mod disjoint_set;
pub use disjoint_set::*;
