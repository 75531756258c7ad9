pub use super::allocation_policy::{AllocationPolicy, DefaultPolicy};
pub use super::element::{Element, ElementType};
pub use super::layout::{Alloc, Column, Layout, LayoutMut};
pub use super::tensor::Tensor;
