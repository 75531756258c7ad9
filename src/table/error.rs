//! Error types for table and tensor operations.

use crate::tensor::element::ElementType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("column named {name:?} not found")]
    ColumnNotFound { name: String },

    #[error("column {name:?} must be a row-major tensor")]
    NotRowMajor { name: String },

    #[error("column {name:?} has no outer dimension to hold rows")]
    NoRowAxis { name: String },

    #[error("column {name:?} holds {actual} elements, not {expected}")]
    ColumnTypeMismatch {
        name: String,
        expected: ElementType,
        actual: ElementType,
    },

    #[error("got {len} elements for tensor of shape {shape:?}")]
    ShapeMismatch { len: usize, shape: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, Error>;
