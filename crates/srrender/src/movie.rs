//! Movie rendering: one image per frame, partitioned across workers by frame.
//!
//! Before any worker starts, the stack is split into its frame slices and
//! frame `f` is handed to worker `f % workers`. Each worker then scans the
//! whole point table and renders only the points of the frames it owns,
//! writing straight into those slices. No two workers can hold the same
//! frame, so there are no private buffers and no reduction.
//!
//! Frame indices are read from column 5 and truncated toward zero. Points
//! whose frame is negative, not finite, or not below the stack's frame count
//! are dropped; the count is logged at debug level.
//!
//! Neither variant clears the stack.

use rayon::prelude::*;
use srrender_common::{columns, Movie, PointTable, RenderFloat, Roi};
use tracing::debug;

use crate::gauss::{splat_point, StencilScratch};
use crate::hist::bin_point;
use crate::mapper::PixelMapper;

/// Histogram of each frame's points into that frame of `movie`.
pub fn render_hist_movie<F: RenderFloat>(points: &PointTable<'_, F>, roi: &Roi<F>, movie: &mut Movie<F>) {
    let mapper = PixelMapper::for_movie(roi, movie);
    render_frames(
        points,
        movie,
        || (),
        |_, point, frame| bin_point(point, &mapper, frame),
    );
}

/// Gaussian render of each frame's points into that frame of `movie`.
pub fn render_gauss_movie<F: RenderFloat>(
    points: &PointTable<'_, F>,
    roi: &Roi<F>,
    movie: &mut Movie<F>,
    sigma_accuracy: F,
) {
    let mapper = PixelMapper::for_movie(roi, movie);
    render_frames(
        points,
        movie,
        || StencilScratch::for_mapper(&mapper),
        |scratch, point, frame| {
            splat_point(point, &mapper, sigma_accuracy, scratch, frame);
        },
    );
}

/// Frame index stored in `value`, if it addresses one of `frames` frames.
fn frame_index<F: RenderFloat>(value: F, frames: usize) -> Option<usize> {
    value.to_usize().filter(|&f| f < frames)
}

/// Split the stack round-robin: worker `t` owns every frame `f` with
/// `f % workers == t`, stored at position `f / workers` of its list.
fn partition_frames<F: RenderFloat>(movie: &mut Movie<F>, workers: usize) -> Vec<Vec<&mut [F]>> {
    let mut owned: Vec<Vec<&mut [F]>> = (0..workers).map(|_| Vec::new()).collect();
    for (f, frame) in movie.frames_mut().enumerate() {
        owned[f % workers].push(frame);
    }
    owned
}

/// Run `render` for every point with a valid frame, on the worker owning that
/// frame. `init` builds per-worker scratch state.
fn render_frames<F, S, I, R>(points: &PointTable<'_, F>, movie: &mut Movie<F>, init: I, render: R)
where
    F: RenderFloat,
    I: Fn() -> S + Sync,
    R: Fn(&mut S, &[F], &mut [F]) + Sync,
{
    let frames = movie.frames();
    if points.is_empty() || frames == 0 || movie.frame_len() == 0 {
        return;
    }

    let workers = rayon::current_num_threads().max(1);
    let owned = partition_frames(movie, workers);

    let dropped: usize = owned
        .into_par_iter()
        .enumerate()
        .map(|(worker, mut frames_owned)| {
            let mut scratch = init();
            let mut dropped = 0;
            for point in points.rows() {
                let Some(frame) = frame_index(point[columns::FRAME], frames) else {
                    // Invalid frames belong to nobody; count them once.
                    if worker == 0 {
                        dropped += 1;
                    }
                    continue;
                };
                if frame % workers != worker {
                    continue;
                }
                render(&mut scratch, point, &mut *frames_owned[frame / workers]);
            }
            dropped
        })
        .sum();

    debug!(
        points = points.len(),
        frames,
        workers,
        dropped,
        "Rendered movie"
    );
}
