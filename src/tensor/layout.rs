use super::element::ElementType;
use super::shape;
use std::any::Any;

/// This trait defines the read-only behavior of any tensor layout.
///
/// It provides utility methods to access basic information about the
/// data such as its element type, shape, strides and axis names.
/// The first axis is always the outermost one, which tables use as
/// the row axis.
pub trait Layout {
    fn element_type(&self) -> ElementType;
    fn shape(&self) -> &[usize];
    fn strides(&self) -> &[usize];
    fn dim_names(&self) -> &[String];

    #[inline]
    fn num_elements(&self) -> usize {
        shape::num_elements(self.shape())
    }

    #[inline]
    fn is_row_major(&self) -> bool {
        shape::is_row_major(self.shape(), self.strides())
    }
}

/// Resizing along the outermost axis. Implementors may assume the layout
/// is row-major; inner axes are never touched.
pub trait LayoutMut {
    /// Absolute resize of the outermost axis to `count`, which must be at least 1.
    fn set_outer_dim(&mut self, count: usize);

    /// Relative grow of the outermost axis by `delta`.
    fn grow_outer_dim(&mut self, delta: usize);
}

pub trait Alloc {
    fn alloc(shape: Vec<usize>, dim_names: Vec<String>) -> Self;
}

/// Object-safe capability set of a table column.
///
/// It is implemented for every `Layout + LayoutMut` type so any tensor
/// backend can be stored in a table, and it exposes `Any` to recover the
/// concrete type.
pub trait Column: Layout + LayoutMut + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<L> Column for L
where
    L: Layout + LayoutMut + Any + Send + Sync,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
