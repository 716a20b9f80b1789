pub mod plan_config;
pub use plan_config::*;

pub mod base_plan;
pub use base_plan::*;

pub mod physical_plan;
pub use physical_plan::*;

pub mod scan;
pub use scan::*;

pub mod reader;
pub use reader::*;

pub mod selection;
pub use selection::*;

pub mod projection;
pub use projection::*;

pub mod join;
pub use join::*;

pub mod aggregation;
pub use aggregation::*;

pub mod sort;
pub use sort::*;

pub mod insert;
pub use insert::*;

pub mod index_resolver;
pub use index_resolver::*;
