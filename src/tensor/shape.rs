//! `shape` contains the runtime shape arithmetics used by tensors:
//! intrinsic strides, element counts and layout order detection.
//!
//! All shapes are row-major by convention: the first axis is the
//! outermost one and varies slowest. For table columns the first axis
//! is the row axis.

/// Replaces every dimension of `shape` by its intrinsic row-major stride,
/// i.e. the product of all the dimensions that follow it.
pub fn intrinsic_strides_in_place(mut shape: Vec<usize>) -> Vec<usize> {
    let mut product = 1;
    for stride in shape.iter_mut().rev() {
        let tmp = product;
        product *= *stride;
        *stride = tmp;
    }

    shape
}

#[inline]
pub fn num_elements(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Number of elements in one step along the outermost axis.
#[inline]
pub fn outer_stride(shape: &[usize]) -> usize {
    shape.iter().skip(1).product()
}

/// Checks that `strides` describe a contiguous row-major traversal of `shape`.
///
/// Axes of length one are skipped: their stride is never used to
/// compute an offset so any value is compatible.
pub fn is_row_major(shape: &[usize], strides: &[usize]) -> bool {
    if shape.len() != strides.len() {
        return false;
    }

    let intrinsic = intrinsic_strides_in_place(shape.to_vec());
    shape
        .iter()
        .zip(strides.iter().zip(intrinsic.iter()))
        .all(|(dim, (stride, expected))| *dim == 1 || stride == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides() {
        assert_eq!(intrinsic_strides_in_place(vec![3, 2]), vec![2, 1]);
        assert_eq!(intrinsic_strides_in_place(vec![4, 3, 2]), vec![6, 2, 1]);
        assert_eq!(intrinsic_strides_in_place(vec![5]), vec![1]);
        assert_eq!(intrinsic_strides_in_place(Vec::new()), Vec::<usize>::new());
    }

    #[test]
    fn counts() {
        assert_eq!(num_elements(&[4, 3]), 12);
        assert_eq!(outer_stride(&[4, 3, 2]), 6);
        assert_eq!(outer_stride(&[4]), 1);
    }

    #[test]
    fn row_major_detection() {
        assert!(is_row_major(&[4, 3], &[3, 1]));
        assert!(!is_row_major(&[3, 4], &[1, 3]));
        // unit axes accept any stride
        assert!(is_row_major(&[1, 3], &[7, 1]));
        assert!(!is_row_major(&[4, 3], &[3]));
    }
}
