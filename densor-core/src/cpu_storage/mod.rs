use tracing::trace;

use crate::op::BinaryOpType;

mod gemm;

pub(crate) use gemm::launch_gemm;

/// Flat, contiguous row-major buffer backing a tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuStorage(pub(crate) Vec<f32>);

impl CpuStorage {
    pub(crate) fn full(len: usize, v: f32) -> Self {
        trace!(len, "allocating tensor buffer");
        Self(vec![v; len])
    }

    pub(crate) fn zeros(len: usize) -> Self {
        Self::full(len, 0.0)
    }

    pub(crate) fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Apply `op` at every flat offset. Callers guarantee equal lengths.
    pub(crate) fn binary_op(&self, rhs: &Self, op: BinaryOpType) -> Self {
        debug_assert_eq!(self.len(), rhs.len());
        let f = op.as_closure();
        Self(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(&l, &r)| f(l, r))
                .collect(),
        )
    }

    /// Transpose a row-major `rows x cols` matrix into a `cols x rows` one.
    pub(crate) fn transpose_2d(&self, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(self.len(), rows * cols);
        let mut out = Vec::with_capacity(self.len());
        for j in 0..cols {
            for i in 0..rows {
                out.push(self.0[i * cols + j]);
            }
        }
        Self(out)
    }
}

impl From<Vec<f32>> for CpuStorage {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}
