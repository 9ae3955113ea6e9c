use rand::Rng;
use rand_distr::{Distribution, Normal, Standard};

use super::Tensor;
use crate::{cpu_storage::CpuStorage, Error, Result, Shape};

impl Tensor {
    /// Uniform samples in `[0, 1)` from the thread-local generator.
    pub fn rand(shape: &[usize]) -> Result<Self> {
        Self::rand_with(shape, &mut rand::thread_rng())
    }

    /// Uniform samples in `[0, 1)` drawn from `rng`.
    pub fn rand_with<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let data: Vec<f32> = (0..shape.element_count())
            .map(|_| Standard.sample(&mut *rng))
            .collect();
        Ok(Self::from_parts(shape, CpuStorage(data)))
    }

    /// Normal samples from the thread-local generator.
    pub fn randn(shape: &[usize], mean: f32, std: f32) -> Result<Self> {
        Self::randn_with(shape, mean, std, &mut rand::thread_rng())
    }

    /// Normal samples drawn from `rng`. `std` must be non-negative (NaN is
    /// rejected as well).
    pub fn randn_with<R: Rng + ?Sized>(
        shape: &[usize],
        mean: f32,
        std: f32,
        rng: &mut R,
    ) -> Result<Self> {
        let shape = Shape::new(shape)?;
        if std.is_nan() || std < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "normal({mean}, {std}): std must be non-negative"
            ))
            .bt());
        }
        let normal = Normal::new(mean, std)
            .map_err(|e| Error::InvalidArgument(format!("normal({mean}, {std}): {e}")).bt())?;
        let data: Vec<f32> = (0..shape.element_count())
            .map(|_| normal.sample(&mut *rng))
            .collect();
        Ok(Self::from_parts(shape, CpuStorage(data)))
    }
}
