//! Query parameters and their editable rows

mod query;
mod row;

pub use query::{QueryParam, QueryParams};
pub use row::{Placement, Row, Rows};
