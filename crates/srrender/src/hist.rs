//! Histogram rendering: each point's intensity lands in the pixel containing it.
//!
//! Pixel indices are the truncated pixel-space coordinates; points that map
//! outside the grid are dropped without error. Results accumulate into the
//! image's existing contents.

use srrender_common::{columns, Image, PointTable, RenderFloat, Roi};
use tracing::debug;

use crate::mapper::PixelMapper;
use crate::parallel::{accumulate_private, reduce_into};
use crate::strategy::Strategy;

/// Bin `points` into `image`, picking the strategy from the workload.
pub fn render_hist<F: RenderFloat>(points: &PointTable<'_, F>, roi: &Roi<F>, image: &mut Image<F>) {
    let strategy = Strategy::select(points.len(), image.len());
    render_hist_with(strategy, points, roi, image);
}

/// Bin `points` into `image` with an explicit strategy.
pub fn render_hist_with<F: RenderFloat>(
    strategy: Strategy,
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
) {
    debug!(
        points = points.len(),
        pixels = image.len(),
        ?strategy,
        "Rendering histogram"
    );
    match strategy {
        Strategy::Sequential => render_hist_sequential(points, roi, image),
        Strategy::Parallel => render_hist_parallel(points, roi, image),
    }
}

/// Single-threaded histogram.
pub fn render_hist_sequential<F: RenderFloat>(
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
) {
    let mapper = PixelMapper::for_image(roi, image);
    bin_points(points, &mapper, image.as_mut_slice());
}

/// Histogram with one private image per worker, summed into `image` afterwards.
pub fn render_hist_parallel<F: RenderFloat>(
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    image: &mut Image<F>,
) {
    let mapper = PixelMapper::for_image(roi, image);
    let partials = accumulate_private(points, image.len(), |part, buffer| {
        bin_points(part, &mapper, buffer)
    });
    debug!(workers = partials.len(), "Reducing private histograms");
    let cols = image.cols();
    reduce_into(&partials, image.as_mut_slice(), cols);
}

/// Add each point's intensity at its pixel in a row-major `target`.
pub(crate) fn bin_point<F: RenderFloat>(point: &[F], mapper: &PixelMapper<F>, target: &mut [F]) {
    if let Some(offset) = mapper.pixel_offset(point[columns::X], point[columns::Y]) {
        target[offset] += point[columns::INTENSITY];
    }
}

fn bin_points<F: RenderFloat>(points: &PointTable<'_, F>, mapper: &PixelMapper<F>, target: &mut [F]) {
    for point in points.rows() {
        bin_point(point, mapper, target);
    }
}
