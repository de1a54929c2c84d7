//! Floating-point precision used by the render kernels.
//!
//! Every kernel is generic over [`RenderFloat`] so the `f32` and `f64`
//! instantiations are monomorphized separately and the hot loops never
//! dispatch on precision at runtime.

use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{AddAssign, MulAssign};

use num_traits::Float;

/// A floating-point type the renderer can accumulate into.
pub trait RenderFloat:
    Float + AddAssign + MulAssign + Sum + Debug + Default + Send + Sync + 'static
{
    /// `1/sqrt(2)`
    const FRAC_1_SQRT_2: Self;

    /// The error function.
    fn erf(self) -> Self;

    /// Convert a pixel count or index.
    fn from_usize(n: usize) -> Self;

    /// Convert a configuration value.
    fn from_f64(v: f64) -> Self;
}

impl RenderFloat for f32 {
    const FRAC_1_SQRT_2: Self = std::f32::consts::FRAC_1_SQRT_2;

    #[inline]
    fn erf(self) -> Self {
        libm::erff(self)
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl RenderFloat for f64 {
    const FRAC_1_SQRT_2: Self = std::f64::consts::FRAC_1_SQRT_2;

    #[inline]
    fn erf(self) -> Self {
        libm::erf(self)
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}
