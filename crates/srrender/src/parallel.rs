//! Private-buffer accumulation and reduction for single-image renders.
//!
//! Each worker owns a zeroed image-sized buffer for the lifetime of its task
//! and hands it back when it finishes. The reduction only starts after every
//! worker has joined, so no buffer is ever shared while being written.

use rayon::prelude::*;
use srrender_common::{PointTable, RenderFloat};

/// Rows per worker so that `len` rows spread evenly over `workers`.
pub(crate) fn rows_per_worker(len: usize, workers: usize) -> usize {
    let workers = workers.max(1);
    ((len + workers - 1) / workers).max(1)
}

/// Split `points` across the current pool's workers and run `accumulate` on
/// each part with its own zeroed buffer of `buffer_len` values.
///
/// Returns one buffer per part actually processed, which may be fewer than
/// the pool's thread count.
pub(crate) fn accumulate_private<F, A>(
    points: &PointTable<'_, F>,
    buffer_len: usize,
    accumulate: A,
) -> Vec<Vec<F>>
where
    F: RenderFloat,
    A: Fn(&PointTable<'_, F>, &mut [F]) + Sync,
{
    let workers = rayon::current_num_threads();
    let parts: Vec<PointTable<'_, F>> = points
        .chunks(rows_per_worker(points.len(), workers))
        .collect();

    parts
        .into_par_iter()
        .map(|part| {
            let mut buffer = vec![F::zero(); buffer_len];
            accumulate(&part, &mut buffer);
            buffer
        })
        .collect()
}

/// Add the pixel-wise sum of `partials` into `target`, parallel over rows of
/// `cols` pixels.
pub(crate) fn reduce_into<F: RenderFloat>(partials: &[Vec<F>], target: &mut [F], cols: usize) {
    if target.is_empty() || partials.is_empty() {
        return;
    }

    target
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, out)| {
            let start = row * cols;
            for (i, px) in out.iter_mut().enumerate() {
                let sum: F = partials.iter().map(|p| p[start + i]).sum();
                *px += sum;
            }
        });
}
