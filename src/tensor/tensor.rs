use super::element::{Element, ElementType};
use super::layout::{Alloc, Layout, LayoutMut};
use super::shape::{intrinsic_strides_in_place, num_elements, outer_stride};
use crate::table::error::{Error, Result};
use std::ops::{Deref, DerefMut};

fn assert_no_null_dim(shape: &[usize]) {
    assert!(
        shape.iter().all(|dim| *dim > 0),
        "Tensor dimensions cannot be 0, got shape {:?}.",
        shape,
    );
}

fn default_dim_names(shape: &[usize], dim_names: Vec<String>) -> Vec<String> {
    if dim_names.is_empty() {
        return vec![String::new(); shape.len()];
    }
    assert_eq!(
        shape.len(),
        dim_names.len(),
        "Tensor of shape {:?} needs one name per dimension, got {:?}.",
        shape,
        dim_names,
    );
    dim_names
}

/// The concrete tensor container used as table column.
///
/// `Tensor` is a `Vec`-backed dense n-dimensional array of `T`.
/// Along with the data it stores:
/// * the shape, outermost axis first,
/// * the strides, which are the intrinsic row-major strides unless
///   the tensor has been transposed,
/// * one name per axis, empty names are allowed.
///
/// Dimensions are never 0: a tensor always holds at least one element.
/// Only row-major tensors can be resized along their outermost axis,
/// which is how tables add or remove rows.
#[derive(Debug, PartialEq, Clone)]
pub struct Tensor<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
    dim_names: Vec<String>,
}

impl<T> Tensor<T>
where
    T: Element,
{
    pub fn fill(value: T, shape: Vec<usize>) -> Self {
        assert_no_null_dim(&shape);
        let dim_names = default_dim_names(&shape, Vec::new());
        Tensor {
            data: vec![value; num_elements(&shape)],
            strides: intrinsic_strides_in_place(shape.clone()),
            shape,
            dim_names,
        }
    }

    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        assert_no_null_dim(&shape);
        if data.len() != num_elements(&shape) {
            return Err(Error::ShapeMismatch {
                len: data.len(),
                shape,
            });
        }

        let dim_names = default_dim_names(&shape, Vec::new());
        Ok(Tensor {
            data,
            strides: intrinsic_strides_in_place(shape.clone()),
            shape,
            dim_names,
        })
    }

    pub fn with_dim_names(mut self, dim_names: Vec<String>) -> Self {
        self.dim_names = default_dim_names(&self.shape, dim_names);
        self
    }

    /// Reverses the axes without moving any data. The result of
    /// transposing a tensor with two or more non-unit axes is not
    /// row-major and will be rejected by tables.
    pub fn transpose(mut self) -> Self {
        self.shape.reverse();
        self.strides.reverse();
        self.dim_names.reverse();
        self
    }

    fn linear_index(&self, position: &[usize]) -> usize {
        assert_eq!(
            position.len(),
            self.shape.len(),
            "Position {:?} does not match tensor of shape {:?}.",
            position,
            self.shape,
        );
        position
            .iter()
            .zip(self.shape.iter())
            .zip(self.strides.iter())
            .fold(0, |acc, ((x, dim), stride)| {
                assert!(x < dim, "Position {:?} out of bounds for shape {:?}.", position, self.shape);
                acc + x * stride
            })
    }

    pub fn get(&self, position: &[usize]) -> &T {
        &self.data[self.linear_index(position)]
    }

    pub fn get_mut(&mut self, position: &[usize]) -> &mut T {
        let index = self.linear_index(position);
        &mut self.data[index]
    }

    fn assert_resizable(&self) {
        assert!(!self.shape.is_empty(), "Cannot resize the outer dimension of a tensor of order 0.");
        assert!(
            self.is_row_major(),
            "Cannot resize tensor of shape {:?} and strides {:?}, only row-major tensors can change their outer dimension.",
            self.shape,
            self.strides,
        );
    }

    fn row_range(&self, index: usize) -> std::ops::Range<usize> {
        self.assert_resizable();
        assert!(
            index < self.shape[0],
            "Row {} out of bounds for tensor of shape {:?}.",
            index,
            self.shape,
        );
        let len = outer_stride(&self.shape);
        index * len..(index + 1) * len
    }

    /// Contiguous cell of row `index`. Requires a row-major tensor.
    pub fn row(&self, index: usize) -> &[T] {
        let range = self.row_range(index);
        &self.data[range]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut [T] {
        let range = self.row_range(index);
        &mut self.data[range]
    }
}

impl<T> Alloc for Tensor<T>
where
    T: Element,
{
    fn alloc(shape: Vec<usize>, dim_names: Vec<String>) -> Self {
        Tensor::fill(T::default(), shape).with_dim_names(dim_names)
    }
}

impl<T> Layout for Tensor<T>
where
    T: Element,
{
    #[inline]
    fn element_type(&self) -> ElementType {
        T::TYPE
    }

    #[inline]
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn strides(&self) -> &[usize] {
        &self.strides
    }

    #[inline]
    fn dim_names(&self) -> &[String] {
        &self.dim_names
    }
}

impl<T> LayoutMut for Tensor<T>
where
    T: Element,
{
    fn set_outer_dim(&mut self, count: usize) {
        self.assert_resizable();
        assert!(
            count > 0,
            "Cannot set the outer dimension of tensor of shape {:?} to 0.",
            self.shape,
        );

        // row-major storage: rows are whole contiguous blocks at the tail
        self.data.resize(count * outer_stride(&self.shape), T::default());
        self.shape[0] = count;
        self.strides = intrinsic_strides_in_place(self.shape.clone());
    }

    fn grow_outer_dim(&mut self, delta: usize) {
        self.assert_resizable();
        let count = self.shape[0] + delta;
        self.set_outer_dim(count);
    }
}

impl<T> Deref for Tensor<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.data.as_slice()
    }
}

impl<T> DerefMut for Tensor<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc() {
        let a: Tensor<f32> = Tensor::alloc(vec![4, 3], vec!["row".into(), "feat".into()]);
        assert_eq!(a.shape(), &[4, 3]);
        assert_eq!(a.strides(), &[3, 1]);
        assert_eq!(a.dim_names(), &["row".to_string(), "feat".to_string()]);
        assert_eq!(a.element_type(), ElementType::Float32);
        assert!(a.iter().all(|x| *x == 0.0));
        assert!(a.is_row_major());
    }

    #[test]
    fn unnamed_dims() {
        let a: Tensor<i32> = Tensor::alloc(vec![2, 2], Vec::new());
        assert_eq!(a.dim_names(), &[String::new(), String::new()]);
    }

    #[test]
    #[should_panic(expected = "needs one name per dimension")]
    fn alloc_dim_names_mismatch() {
        let _a: Tensor<i32> = Tensor::alloc(vec![2, 2], vec!["row".into()]);
    }

    #[test]
    #[should_panic(expected = "Tensor dimensions cannot be 0")]
    fn alloc_null_dim() {
        let _a: Tensor<i32> = Tensor::alloc(vec![0, 2], Vec::new());
    }

    #[test]
    fn from_vec_shape_mismatch() {
        let err = Tensor::from_vec(vec![1, 2, 3], vec![2, 2]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { len: 3, .. }));
    }

    #[test]
    fn transpose() {
        let a = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![2, 3])
            .unwrap()
            .with_dim_names(vec!["row".into(), "col".into()]);
        let b = a.transpose();

        assert_eq!(b.shape(), &[3, 2]);
        assert_eq!(b.strides(), &[1, 3]);
        assert_eq!(b.dim_names(), &["col".to_string(), "row".to_string()]);
        assert_eq!(*b.get(&[2, 1]), 6);
        assert_eq!(*b.get(&[0, 1]), 4);
        assert!(!b.is_row_major());
    }

    #[test]
    fn grow_and_shrink() {
        let mut a = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![3, 2]).unwrap();
        a.set_outer_dim(2);
        assert_eq!(a.shape(), &[2, 2]);
        assert_eq!(&a[..], &[1, 2, 3, 4]);

        a.grow_outer_dim(2);
        assert_eq!(a.shape(), &[4, 2]);
        assert_eq!(a.row(1), &[3, 4]);
        assert_eq!(a.row(3), &[0, 0]);

        a.row_mut(3).copy_from_slice(&[7, 8]);
        assert_eq!(*a.get(&[3, 1]), 8);
    }

    #[test]
    fn grow_by_zero() {
        let mut a: Tensor<String> = Tensor::alloc(vec![2], Vec::new());
        a.grow_outer_dim(0);
        assert_eq!(a.shape(), &[2]);
    }

    #[test]
    #[should_panic(expected = "only row-major tensors")]
    fn resize_transposed() {
        let mut a: Tensor<f64> = Tensor::alloc(vec![2, 3], Vec::new()).transpose();
        a.set_outer_dim(4);
    }

    #[test]
    #[should_panic(expected = "to 0")]
    fn resize_to_zero() {
        let mut a: Tensor<f64> = Tensor::alloc(vec![2, 3], Vec::new());
        a.set_outer_dim(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn row_out_of_bounds() {
        let a: Tensor<u8> = Tensor::alloc(vec![2, 3], Vec::new());
        let _ = a.row(2);
    }
}
