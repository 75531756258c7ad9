use super::element::{Element, ElementType};
use super::layout::{Alloc, Column};
use super::tensor::Tensor;

/// Policy used whenever a column has to be allocated from a runtime
/// element type tag, such as when a table is built from a schema.
///
/// The policy decides which concrete container backs each element type.
pub trait AllocationPolicy {
    fn alloc(element_type: ElementType, shape: Vec<usize>, dim_names: Vec<String>) -> Box<dyn Column>;
}

/// Allocates `Tensor<T>` with `T` the Rust scalar type matching the tag.
#[derive(Debug, PartialEq, Clone)]
pub struct DefaultPolicy;

fn boxed<T>(shape: Vec<usize>, dim_names: Vec<String>) -> Box<dyn Column>
where
    T: Element,
{
    Box::new(<Tensor<T> as Alloc>::alloc(shape, dim_names))
}

impl AllocationPolicy for DefaultPolicy {
    fn alloc(element_type: ElementType, shape: Vec<usize>, dim_names: Vec<String>) -> Box<dyn Column> {
        match element_type {
            ElementType::Bool => boxed::<bool>(shape, dim_names),
            ElementType::Uint8 => boxed::<u8>(shape, dim_names),
            ElementType::Int32 => boxed::<i32>(shape, dim_names),
            ElementType::Int64 => boxed::<i64>(shape, dim_names),
            ElementType::Float32 => boxed::<f32>(shape, dim_names),
            ElementType::Float64 => boxed::<f64>(shape, dim_names),
            ElementType::String => boxed::<String>(shape, dim_names),
        }
    }
}
