//! `schema` describes the columns of a table independently of any data.
//!
//! A `Schema` is plain data: no validation happens until it is consumed
//! by `Table::from_schema`.

use crate::tensor::element::ElementType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Description of one column: its name, element type and the shape of
/// a single cell, i.e. the tensor shape without the row axis.
///
/// `dim_names` must hold one name per `cell_shape` entry.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnDescriptor {
    pub name: String,
    pub element_type: ElementType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cell_shape: Vec<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dim_names: Vec<String>,
}

impl ColumnDescriptor {
    pub fn new<N, D>(name: N, element_type: ElementType, cell_shape: Vec<usize>, dim_names: D) -> Self
    where
        N: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        ColumnDescriptor {
            name: name.into(),
            element_type,
            cell_shape,
            dim_names: dim_names.into_iter().map(Into::into).collect(),
        }
    }

    /// One value per row.
    pub fn scalar(name: impl Into<String>, element_type: ElementType) -> Self {
        ColumnDescriptor {
            name: name.into(),
            element_type,
            cell_shape: Vec::new(),
            dim_names: Vec::new(),
        }
    }
}

/// Ordered column descriptors. Order defines column order in a table.
/// Names are not required to be unique, but a table only resolves
/// the last column of a given name.
pub type Schema = Vec<ColumnDescriptor>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let x = ColumnDescriptor::scalar("x", ElementType::Float32);
        assert!(x.cell_shape.is_empty());
        assert!(x.dim_names.is_empty());

        let y = ColumnDescriptor::new("y", ElementType::Float32, vec![3], vec!["feat"]);
        assert_eq!(y.name, "y");
        assert_eq!(y.cell_shape, vec![3]);
        assert_eq!(y.dim_names, vec!["feat".to_string()]);
    }
}
