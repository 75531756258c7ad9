pub use crate::table::error::{Error, Result};
pub use crate::table::schema::{ColumnDescriptor, Schema};
pub use crate::table::table::Table;
pub use crate::tensor::prelude::*;
