//! Output buffers: a single image and a frame-indexed image stack (movie).
//!
//! Both are dense and row-major: pixel `(row, col)` of an image lives at
//! `row * cols + col`. Rows run along y, columns along x. A movie stores its
//! frames back to back so each frame is one contiguous slice, which is what
//! lets the movie renderers hand whole frames to different workers.

use std::slice::ChunksExactMut;

use crate::error::{RenderError, RenderResult};
use crate::float::RenderFloat;

/// A 2D accumulator image of `rows x cols` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<F> {
    rows: usize,
    cols: usize,
    data: Vec<F>,
}

impl<F: RenderFloat> Image<F> {
    /// Zero-filled image.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![F::zero(); rows * cols],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<F>) -> RenderResult<Self> {
        if data.len() != rows * cols {
            return Err(RenderError::ShapeMismatch {
                len: data.len(),
                shape: vec![rows, cols],
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows (pixels along y).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (pixels along x).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> F {
        self.data[row * self.cols + col]
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<F> {
        self.data
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: F) {
        self.data.fill(value);
    }

    /// Sum of all pixels.
    pub fn sum(&self) -> F {
        self.data.iter().copied().sum()
    }
}

/// A stack of `frames` images, each `rows x cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie<F> {
    rows: usize,
    cols: usize,
    frames: usize,
    data: Vec<F>,
}

impl<F: RenderFloat> Movie<F> {
    /// Zero-filled stack.
    pub fn zeros(rows: usize, cols: usize, frames: usize) -> Self {
        Self {
            rows,
            cols,
            frames,
            data: vec![F::zero(); rows * cols * frames],
        }
    }

    /// Wrap an existing frame-major buffer.
    pub fn from_vec(rows: usize, cols: usize, frames: usize, data: Vec<F>) -> RenderResult<Self> {
        if data.len() != rows * cols * frames {
            return Err(RenderError::ShapeMismatch {
                len: data.len(),
                shape: vec![rows, cols, frames],
            });
        }
        Ok(Self {
            rows,
            cols,
            frames,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of frames in the stack.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Pixels per frame.
    pub fn frame_len(&self) -> usize {
        self.rows * self.cols
    }

    /// Pixel value at `(row, col)` of `frame`.
    pub fn get(&self, row: usize, col: usize, frame: usize) -> F {
        self.data[frame * self.frame_len() + row * self.cols + col]
    }

    /// Frame `frame` as a row-major slice.
    pub fn frame(&self, frame: usize) -> &[F] {
        let len = self.frame_len();
        &self.data[frame * len..(frame + 1) * len]
    }

    pub fn frame_mut(&mut self, frame: usize) -> &mut [F] {
        let len = self.frame_len();
        &mut self.data[frame * len..(frame + 1) * len]
    }

    /// Mutable frames in index order.
    ///
    /// Yields nothing when frames are empty (zero rows or columns).
    pub fn frames_mut(&mut self) -> ChunksExactMut<'_, F> {
        let len = self.frame_len().max(1);
        let used = if self.frame_len() == 0 { 0 } else { self.data.len() };
        self.data[..used].chunks_exact_mut(len)
    }

    /// Sum of all pixels of one frame.
    pub fn frame_sum(&self, frame: usize) -> F {
        self.frame(frame).iter().copied().sum()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut self.data
    }

    pub fn fill(&mut self, value: F) {
        self.data.fill(value);
    }

    pub fn sum(&self) -> F {
        self.data.iter().copied().sum()
    }
}
