//! `tensor` provides the multidimensional containers that back table
//! columns. It defines the capabilities a column container must offer
//! (`Layout`, `LayoutMut`, `Column`), a dense `Vec`-backed `Tensor`
//! implementing them, and the allocation policies that turn a runtime
//! element type tag into a concrete container.
//!
//! Contrary to general purpose ndarray crates, this module only cares
//! about shapes: the element values are never inspected, and the only
//! mutation offered at the capability level is resizing the outermost
//! axis of row-major containers.

pub mod allocation_policy;
pub mod element;
pub mod layout;
pub mod prelude;
pub mod shape;
pub mod tensor;
