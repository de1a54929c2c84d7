//! Gaussian rendering: each point is splatted as a separable 2D Gaussian.
//!
//! Per point, the center and sigmas are mapped into pixel units and a box of
//! half-width `floor(0.5 + sigma_accuracy * sigma_px)` is clipped to the grid
//! on each axis. The X and Y stencils over that box are the exact pixel
//! integrals of the 1D Gaussians; their outer product, scaled by intensity, is
//! the exact pixel integral of the 2D Gaussian. Mass outside the box (and
//! outside the grid) is discarded.

use srrender_common::{columns, Image, PointTable, RenderFloat, Roi};
use tracing::debug;

use crate::mapper::PixelMapper;
use crate::parallel::{accumulate_private, reduce_into};
use crate::stencil::fill_stencil;
use crate::strategy::Strategy;

/// Clear `image` and render `points` into it, picking the strategy from the workload.
pub fn render_gauss<F: RenderFloat>(
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
    sigma_accuracy: F,
) {
    let strategy = Strategy::select(points.len(), image.len());
    render_gauss_with(strategy, points, roi, image, sigma_accuracy);
}

/// Clear `image` and render `points` into it with an explicit strategy.
pub fn render_gauss_with<F: RenderFloat>(
    strategy: Strategy,
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
    sigma_accuracy: F,
) {
    debug!(
        points = points.len(),
        pixels = image.len(),
        ?strategy,
        sigma_accuracy = ?sigma_accuracy,
        "Rendering gaussians"
    );
    match strategy {
        Strategy::Sequential => render_gauss_sequential(points, roi, image, sigma_accuracy),
        Strategy::Parallel => render_gauss_parallel(points, roi, image, sigma_accuracy),
    }
}

/// Single-threaded Gaussian render. Clears `image` first.
pub fn render_gauss_sequential<F: RenderFloat>(
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
    sigma_accuracy: F,
) {
    let mapper = PixelMapper::for_image(roi, image);
    image.fill(F::zero());
    let mut scratch = StencilScratch::for_mapper(&mapper);
    for point in points.rows() {
        splat_point(point, &mapper, sigma_accuracy, &mut scratch, image.as_mut_slice());
    }
}

/// Gaussian render with one private image and stencil scratch per worker,
/// summed into `image` afterwards. Clears `image` first.
pub fn render_gauss_parallel<F: RenderFloat>(
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
    sigma_accuracy: F,
) {
    let mapper = PixelMapper::for_image(roi, image);
    image.fill(F::zero());
    let partials = accumulate_private(points, image.len(), |part, buffer| {
        let mut scratch = StencilScratch::for_mapper(&mapper);
        for point in part.rows() {
            splat_point(point, &mapper, sigma_accuracy, &mut scratch, buffer);
        }
    });
    debug!(workers = partials.len(), "Reducing private gaussian images");
    let cols = image.cols();
    reduce_into(&partials, image.as_mut_slice(), cols);
}

/// Reusable stencil buffers, sized for a full row and a full column.
#[derive(Debug, Clone)]
pub(crate) struct StencilScratch<F> {
    x: Vec<F>,
    y: Vec<F>,
}

impl<F: RenderFloat> StencilScratch<F> {
    pub(crate) fn for_mapper(mapper: &PixelMapper<F>) -> Self {
        Self {
            x: vec![F::zero(); mapper.pixels_x()],
            y: vec![F::zero(); mapper.pixels_y()],
        }
    }
}

/// The clipped render box of one point along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisSpan<F> {
    /// First pixel of the box.
    pub start: usize,
    /// Number of pixels in the box (at least 1).
    pub len: usize,
    /// Center relative to the left edge of `start`, in pixels.
    pub offset: F,
}

/// Clip the box around `center` (pixel units) to `[0, pixels)`.
///
/// Returns `None` when the box misses the grid entirely or the inputs are not
/// finite.
pub(crate) fn axis_span<F: RenderFloat>(
    center: F,
    sigma: F,
    sigma_accuracy: F,
    pixels: usize,
) -> Option<AxisSpan<F>> {
    let p = center.to_isize()?;
    let half_width = (F::from_f64(0.5) + sigma_accuracy * sigma).to_isize()?;
    let lo = p.saturating_sub(half_width).max(0);
    let hi = p
        .saturating_add(half_width)
        .min((pixels as isize).saturating_sub(1));
    if hi < lo {
        return None;
    }
    let start = lo as usize;
    Some(AxisSpan {
        start,
        len: (hi - lo) as usize + 1,
        offset: center - F::from_usize(start),
    })
}

/// Splat one `[I, x, y, sigmaX, sigmaY, ..]` point into a row-major `target`
/// laid out like the mapper's grid. Returns false when the point was skipped.
pub(crate) fn splat_point<F: RenderFloat>(
    point: &[F],
    mapper: &PixelMapper<F>,
    sigma_accuracy: F,
    scratch: &mut StencilScratch<F>,
    target: &mut [F],
) -> bool {
    let x_center = mapper.map_x(point[columns::X]);
    let x_sigma = point[columns::SIGMA_X] * mapper.size_ratio_x();
    let Some(xs) = axis_span(x_center, x_sigma, sigma_accuracy, mapper.pixels_x()) else {
        return false;
    };

    let y_center = mapper.map_y(point[columns::Y]);
    let y_sigma = point[columns::SIGMA_Y] * mapper.size_ratio_y();
    let Some(ys) = axis_span(y_center, y_sigma, sigma_accuracy, mapper.pixels_y()) else {
        return false;
    };

    let x_stencil = &mut scratch.x[..xs.len];
    let y_stencil = &mut scratch.y[..ys.len];
    fill_stencil(xs.offset, x_sigma, x_stencil);
    fill_stencil(ys.offset, y_sigma, y_stencil);

    let intensity = point[columns::INTENSITY];
    for v in x_stencil.iter_mut() {
        *v *= intensity;
    }

    let cols = mapper.pixels_x();
    for (dy, &wy) in y_stencil.iter().enumerate() {
        let row_start = (ys.start + dy) * cols + xs.start;
        let row = &mut target[row_start..row_start + xs.len];
        for (px, &wx) in row.iter_mut().zip(x_stencil.iter()) {
            *px += wx * wy;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_span_interior() {
        let span = axis_span(10.25f64, 1.0, 3.0, 100).unwrap();
        // hw = floor(0.5 + 3) = 3
        assert_eq!(span.start, 7);
        assert_eq!(span.len, 7);
        assert!((span.offset - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_axis_span_clipped_left_and_right() {
        let span = axis_span(1.5f64, 1.0, 5.0, 4).unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.len, 4);
        assert!((span.offset - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_axis_span_off_grid() {
        // Center far right of a 10 pixel axis with a small box.
        assert!(axis_span(20.0f64, 0.5, 2.0, 10).is_none());
        // Center left of the grid but close enough for the tail to land.
        let span = axis_span(-1.5f64, 1.0, 3.0, 10).unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.len, 3);
        assert!(axis_span(f64::NAN, 1.0, 3.0, 10).is_none());
        assert!(axis_span(2.0f64, 1.0, 3.0, 0).is_none());
    }

    #[test]
    fn test_unclipped_point_conserves_intensity() {
        let data = [7.0f64, 16.3, 15.8, 1.2, 0.9];
        let table = PointTable::new(&data, 5).unwrap();
        let roi = Roi::new(0.0, 32.0, 0.0, 32.0);
        let mut image = Image::zeros(32, 32);
        render_gauss_sequential(&table, &roi, &mut image, 5.0);
        assert!((image.sum() - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_render_gauss_clears_image() {
        let data = [1.0f64, 5.0, 5.0, 0.5, 0.5];
        let table = PointTable::new(&data, 5).unwrap();
        let roi = Roi::new(0.0, 10.0, 0.0, 10.0);
        for strategy in [Strategy::Sequential, Strategy::Parallel] {
            let mut image = Image::from_vec(10, 10, vec![3.0; 100]).unwrap();
            render_gauss_with(strategy, &table, &roi, &mut image, 5.0);
            assert!((image.sum() - 1.0).abs() < 1e-6);
            assert_eq!(image.get(0, 0), 0.0);
        }
    }

    #[test]
    fn test_peak_at_center_pixel() {
        let data = [1.0f64, 4.5, 6.5, 0.8, 0.8];
        let table = PointTable::new(&data, 5).unwrap();
        let roi = Roi::new(0.0, 10.0, 0.0, 10.0);
        let mut image = Image::zeros(10, 10);
        render_gauss_sequential(&table, &roi, &mut image, 5.0);
        let peak = image.get(6, 4);
        assert!(image.as_slice().iter().all(|&v| v <= peak));
        assert!((image.get(6, 3) - image.get(6, 5)).abs() < 1e-12);
    }
}
