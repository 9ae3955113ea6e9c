use std::fmt;

use crate::{Error, Result};

/// The extent of a tensor along each axis.
///
/// A `Shape` always has at least one dimension and every dimension is
/// positive; both are checked by [`Shape::new`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: &[usize]) -> Result<Self> {
        let dims = dims.to_vec();
        if dims.is_empty() {
            return Err(Error::InvalidShape {
                shape: dims,
                reason: "shape must have at least one dimension".to_string(),
            }
            .bt());
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(Error::InvalidShape {
                shape: dims,
                reason: format!("dimension {axis} is zero, all dimensions must be > 0"),
            }
            .bt());
        }
        if dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d)).is_none() {
            return Err(Error::InvalidShape {
                shape: dims,
                reason: "element count overflows usize".to_string(),
            }
            .bt());
        }
        Ok(Self(dims))
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements, recomputed from the dimensions. Cannot
    /// overflow: [`Shape::new`] rejects shapes whose product does not fit.
    pub fn element_count(&self) -> usize {
        self.0.iter().product()
    }

    /// Row-major strides: the last axis varies fastest.
    pub fn contiguous_strides(&self) -> Vec<usize> {
        contiguous_strides(&self.0)
    }

    /// Map a multi-index to a flat offset using `strides`.
    ///
    /// Fails if `index` does not have one entry per axis or if any entry is
    /// outside `[0, dim)`. There is no clamping or wraparound.
    pub fn offset(&self, strides: &[usize], index: &[usize]) -> Result<usize> {
        debug_assert_eq!(strides.len(), self.ndim());
        if index.len() != self.ndim() {
            return Err(Error::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.0.clone(),
                reason: format!(
                    "index has {} dims but tensor has {}",
                    index.len(),
                    self.ndim()
                ),
            }
            .bt());
        }
        let mut offset = 0;
        for (axis, ((&i, &dim), &stride)) in index.iter().zip(&self.0).zip(strides).enumerate() {
            if i >= dim {
                return Err(Error::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.0.clone(),
                    reason: format!("index {i} out of bounds for axis {axis} (size {dim})"),
                }
                .bt());
            }
            offset += i * stride;
        }
        Ok(offset)
    }

    /// Inverse of [`Shape::offset`] for contiguous strides.
    pub fn unravel(&self, offset: usize) -> Result<Vec<usize>> {
        let count = self.element_count();
        if offset >= count {
            return Err(Error::IndexOutOfBounds {
                index: vec![offset],
                shape: self.0.clone(),
                reason: format!("flat offset {offset} out of bounds (size {count})"),
            }
            .bt());
        }
        let mut rem = offset;
        let mut index = vec![0; self.ndim()];
        for (axis, &dim) in self.0.iter().enumerate().rev() {
            index[axis] = rem % dim;
            rem /= dim;
        }
        Ok(index)
    }

    /// Every valid multi-index, in row-major order.
    pub fn indices(&self) -> Indices<'_> {
        Indices {
            dims: &self.0,
            next: Some(vec![0; self.0.len()]),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = Error;

    fn try_from(dims: Vec<usize>) -> Result<Self> {
        Self::new(&dims)
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = Error;

    fn try_from(dims: &[usize]) -> Result<Self> {
        Self::new(dims)
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Shape {
    type Error = Error;

    fn try_from(dims: [usize; N]) -> Result<Self> {
        Self::new(&dims)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Compute default (contiguous) strides for a tensor of given shape.
pub(crate) fn contiguous_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut acc = 1;
    // Iterate dims in reverse to accumulate products
    for dim in shape.iter().rev() {
        strides.push(acc);
        acc *= *dim;
    }
    strides.reverse();
    strides
}

/// Row-major iterator over the multi-indices of a [`Shape`].
pub struct Indices<'a> {
    dims: &'a [usize],
    next: Option<Vec<usize>>,
}

impl Iterator for Indices<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut succ = current.clone();
        // Odometer increment, last axis first.
        for axis in (0..self.dims.len()).rev() {
            succ[axis] += 1;
            if succ[axis] < self.dims[axis] {
                self.next = Some(succ);
                break;
            }
            succ[axis] = 0;
        }
        Some(current)
    }
}
