//! Densor is a small dense tensor of `f32` values.
//!
//! A [`Tensor`] owns a [`Shape`], the row-major strides derived from it and a flat
//! contiguous buffer. Every element access goes through a strict multi-index to
//! flat-offset mapping: wrong arity or any out of range axis is an error, never a
//! clamp or a wraparound.
//!
//! Errors come in two kinds, see [`ErrorKind`]: invalid arguments (bad shapes,
//! mismatched operands, wrong rank) and out of range indices.
//!
//! ## A quick guide
//! - Create a tensor with [`Tensor::new`], [`Tensor::from_vec`] or one of the fill constructors.
//! - Read and write elements with [`Tensor::get`] and [`Tensor::set`].
//! - Reinterpret the buffer with [`Tensor::reshape`].
//! - Combine equally shaped tensors with [`Tensor::add`] and [`Tensor::multiply`],
//!   and matrices with [`Tensor::transpose_2d`] and [`Tensor::matmul`].
//!
//! ```
//! use densor_core::Tensor;
//!
//! let mut t = Tensor::new(&[2, 3]).unwrap();
//! for (k, idx) in t.shape().clone().indices().enumerate() {
//!     t.set(&idx, (k + 1) as f32).unwrap();
//! }
//! assert_eq!(t.get(&[1, 2]).unwrap(), 6.0);
//!
//! t.reshape(&[3, 2]).unwrap();
//! assert_eq!(t.get(&[1, 0]).unwrap(), 3.0);
//!
//! let tt = t.transpose_2d().unwrap();
//! assert_eq!(tt.dims(), &[2, 3]);
//! assert_eq!(
//!     tt.to_string(),
//!     "Tensor shape: [2, 3]\n[ 1, 3, 5 ]\n[ 2, 4, 6 ]\n"
//! );
//! ```

mod cpu_storage;
mod error;
mod op;
mod shape;
mod tensor;

pub use error::{Error, ErrorKind, Result};
pub use op::BinaryOpType;
pub use shape::{Indices, Shape};
pub use tensor::Tensor;
