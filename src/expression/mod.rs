pub mod field_type;
pub use field_type::*;

pub mod literal;
pub use literal::*;

pub mod resolve_error;
pub use resolve_error::*;

pub mod column;
pub use column::*;

pub mod schema;
pub use schema::*;

pub mod expr;
pub use expr::*;
