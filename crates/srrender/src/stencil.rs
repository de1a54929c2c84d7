//! 1D Gaussian pixel-integral stencils.
//!
//! A 2D axis-aligned Gaussian factors into the product of two 1D Gaussians,
//! so its integral over a pixel is the product of two 1D integrals. The
//! stencil holds those 1D integrals for a run of consecutive pixels and is
//! reused for both axes.

use srrender_common::RenderFloat;

/// Fill `stencil` with the mass of a 1D Gaussian falling in each unit pixel.
///
/// The Gaussian has standard deviation `sigma` and is centered at `x`,
/// measured from the left edge of `stencil[0]`. Pixel `i` receives
/// `0.5 * (erf(norm*(i+1-x)) - erf(norm*(i-x)))` with `norm = 1/(sigma*sqrt(2))`.
/// The right edge of each pixel is the left edge of the next, so the whole
/// stencil costs `stencil.len() + 1` error-function evaluations.
///
/// The values are not renormalized: a stencil that crops the Gaussian sums to
/// less than one.
pub fn fill_stencil<F: RenderFloat>(x: F, sigma: F, stencil: &mut [F]) {
    let half = F::from_f64(0.5);
    let norm = F::FRAC_1_SQRT_2 / sigma;
    let mut derf = (-norm * x).erf();
    let mut edge = F::zero();
    for value in stencil.iter_mut() {
        edge += F::one();
        let last_derf = derf;
        derf = (norm * (edge - x)).erf();
        *value = half * (derf - last_derf);
    }
}
