mod dense;
mod display;
#[cfg(feature = "rand")]
mod random;

pub use dense::Tensor;
