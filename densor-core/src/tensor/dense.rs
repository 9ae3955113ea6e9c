use std::ops::{Add, Div, Mul, Sub};

use tracing::debug;

use crate::{
    cpu_storage::{launch_gemm, CpuStorage},
    op::BinaryOpType,
    Error, Result, Shape,
};

/// A dense, row-major, n-dimensional array of `f32`.
///
/// The tensor exclusively owns its buffer. Every element access is bounds
/// checked, and operations that can fail return [`Result`].
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    shape: Shape,
    strides: Vec<usize>,
    storage: CpuStorage,
}

impl Tensor {
    /// Create a zero-filled tensor with the given shape.
    pub fn new(shape: &[usize]) -> Result<Self> {
        Self::zeros(shape)
    }

    /// Materialize a tensor filled with some value.
    pub fn full(shape: &[usize], v: f32) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = CpuStorage::full(shape.element_count(), v);
        Ok(Self::from_parts(shape, storage))
    }

    /// Materialize a tensor filled with zeros.
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = CpuStorage::zeros(shape.element_count());
        Ok(Self::from_parts(shape, storage))
    }

    /// Materialize a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(shape, 1.0)
    }

    /// Build a tensor from row-major values.
    pub fn from_vec(shape: &[usize], data: Vec<f32>) -> Result<Self> {
        let shape = Shape::new(shape)?;
        if data.len() != shape.element_count() {
            return Err(Error::InvalidShape {
                shape: shape.dims().to_vec(),
                reason: format!(
                    "expected {} values, got {}",
                    shape.element_count(),
                    data.len()
                ),
            }
            .bt());
        }
        Ok(Self::from_parts(shape, CpuStorage::from(data)))
    }

    /// A tensor whose value at flat offset `k` is `k`.
    pub fn arange(shape: &[usize]) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let data = (0..shape.element_count()).map(|k| k as f32).collect();
        Ok(Self::from_parts(shape, CpuStorage(data)))
    }

    pub(crate) fn from_parts(shape: Shape, storage: CpuStorage) -> Self {
        debug_assert_eq!(shape.element_count(), storage.len());
        let strides = shape.contiguous_strides();
        Self {
            shape,
            strides,
            storage,
        }
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.shape.element_count()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The flat row-major buffer.
    pub fn data(&self) -> &[f32] {
        self.storage.as_slice()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.storage.0
    }

    /// Flat offset of a multi-index.
    pub fn offset(&self, index: &[usize]) -> Result<usize> {
        self.shape.offset(&self.strides, index)
    }

    pub fn get(&self, index: &[usize]) -> Result<f32> {
        let off = self.offset(index)?;
        Ok(self.storage.as_slice()[off])
    }

    pub fn set(&mut self, index: &[usize], value: f32) -> Result<()> {
        let off = self.offset(index)?;
        self.storage.as_mut_slice()[off] = value;
        Ok(())
    }

    /// Reinterpret the buffer under a new shape with the same element count.
    ///
    /// Values keep their flat offsets. On failure the tensor is unchanged.
    pub fn reshape(&mut self, new_shape: &[usize]) -> Result<()> {
        let new_shape = Shape::new(new_shape)?;
        if new_shape.element_count() != self.size() {
            return Err(Error::InvalidShape {
                shape: new_shape.dims().to_vec(),
                reason: format!(
                    "cannot reshape {} elements into {} elements",
                    self.size(),
                    new_shape.element_count()
                ),
            }
            .bt());
        }
        debug!(from = %self.shape, to = %new_shape, "reshape");
        self.strides = new_shape.contiguous_strides();
        self.shape = new_shape;
        Ok(())
    }

    fn binary_op(&self, rhs: &Self, op: BinaryOpType) -> Result<Self> {
        if self.shape != rhs.shape {
            return Err(Error::ShapeMismatch {
                op: op.name(),
                lhs: self.dims().to_vec(),
                rhs: rhs.dims().to_vec(),
            }
            .bt());
        }
        let storage = self.storage.binary_op(&rhs.storage, op);
        Ok(Self::from_parts(self.shape.clone(), storage))
    }

    /// Elementwise sum. Shapes must match exactly.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Add)
    }

    /// Elementwise product. Shapes must match exactly.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Mul)
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Sub)
    }

    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.binary_op(rhs, BinaryOpType::Div)
    }

    fn require_rank_2(&self, op: &'static str) -> Result<(usize, usize)> {
        match self.dims() {
            &[rows, cols] => Ok((rows, cols)),
            dims => Err(Error::UnsupportedRank {
                op,
                expected: 2,
                got: dims.len(),
            }
            .bt()),
        }
    }

    /// Swap the two axes of a matrix: `out[j][i] == self[i][j]`.
    pub fn transpose_2d(&self) -> Result<Self> {
        let (rows, cols) = self.require_rank_2("transpose_2d")?;
        let storage = self.storage.transpose_2d(rows, cols);
        Ok(Self::from_parts(Shape::new(&[cols, rows])?, storage))
    }

    /// Matrix product of two rank 2 tensors: `[m, k] x [k, n] -> [m, n]`.
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        let (m, k) = self.require_rank_2("matmul")?;
        let (k2, n) = rhs.require_rank_2("matmul")?;
        if k != k2 {
            return Err(Error::ShapeMismatch {
                op: "matmul",
                lhs: self.dims().to_vec(),
                rhs: rhs.dims().to_vec(),
            }
            .bt());
        }
        debug!(m, n, k, "matmul");
        let mut out = CpuStorage::zeros(m * n);
        launch_gemm(
            self.storage.as_slice(),
            rhs.storage.as_slice(),
            m,
            n,
            k,
            out.as_mut_slice(),
        );
        Ok(Self::from_parts(Shape::new(&[m, n])?, out))
    }
}

macro_rules! binary_op {
    ($trait:ident, $fn:ident, $op:ident) => {
        impl $trait for &Tensor {
            type Output = Result<Tensor>;
            fn $fn(self, rhs: Self) -> Self::Output {
                self.binary_op(rhs, BinaryOpType::$op)
            }
        }
    };
}

binary_op!(Add, add, Add);
binary_op!(Mul, mul, Mul);
binary_op!(Sub, sub, Sub);
binary_op!(Div, div, Div);
