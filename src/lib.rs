//! `dtable` is a minimal columnar table layered over tensors.
//!
//! Every column of a `Table` is a row-major tensor whose outermost axis
//! is the row axis, and all columns share the row count held by the
//! table. A table is either built from a `Schema`, which allocates one
//! tensor per column, or filled one column at a time with `add_column`.
//! The table only manages shapes and column bookkeeping; element values
//! are left to the tensors.


pub mod prelude;
pub mod table;
pub mod tensor;

pub use table::error::{Error, Result};
pub use table::schema::{ColumnDescriptor, Schema};
pub use table::table::Table;
