//! `table` implements a columnar table whose columns are row-major
//! tensors. The outermost axis of every column is the row axis and all
//! columns share the row count held by the table.

pub mod error;
pub mod schema;
#[allow(clippy::module_inception)]
pub mod table;
