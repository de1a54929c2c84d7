//! Synthetic localization generators.
//!
//! All generators produce row-major tables with the full six-column layout
//! `[I, x, y, sigmaX, sigmaY, frame]`, so the same data can feed every render
//! operation. Generation is seeded and reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Columns in every generated table.
pub const GENERATED_COLUMNS: usize = 6;

/// Builder for random localization tables.
///
/// # Example
///
/// ```
/// use test_utils::LocalizationGenerator;
///
/// let points = LocalizationGenerator::new([0.0, 10.0, 0.0, 10.0])
///     .with_frames(4)
///     .with_seed(7)
///     .generate(100);
/// assert_eq!(points.len(), 600);
/// ```
#[derive(Debug, Clone)]
pub struct LocalizationGenerator {
    roi: [f64; 4],
    margin: f64,
    intensity: (f64, f64),
    sigma: (f64, f64),
    frames: usize,
    seed: u64,
}

impl LocalizationGenerator {
    /// Points uniformly inside `roi` (`[xmin, xmax, ymin, ymax]`).
    pub fn new(roi: [f64; 4]) -> Self {
        Self {
            roi,
            margin: 0.0,
            intensity: (50.0, 500.0),
            sigma: (0.05, 0.3),
            frames: 1,
            seed: 0x5eed,
        }
    }

    /// Extend the sampling region beyond the ROI by `margin` times its size on
    /// every side, so some points fall off the grid.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Intensity range (half-open).
    pub fn with_intensity(mut self, min: f64, max: f64) -> Self {
        self.intensity = (min, max);
        self
    }

    /// Sigma range in world units (half-open), drawn independently per axis.
    pub fn with_sigma(mut self, min: f64, max: f64) -> Self {
        self.sigma = (min, max);
        self
    }

    /// Frame indices are drawn uniformly from `0..frames`.
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate `n` localizations.
    pub fn generate(&self, n: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let [xmin, xmax, ymin, ymax] = self.roi;
        let dx = (xmax - xmin) * self.margin;
        let dy = (ymax - ymin) * self.margin;

        let mut data = Vec::with_capacity(n * GENERATED_COLUMNS);
        for _ in 0..n {
            data.push(sample(&mut rng, self.intensity));
            data.push(rng.gen_range(xmin - dx..xmax + dx));
            data.push(rng.gen_range(ymin - dy..ymax + dy));
            data.push(sample(&mut rng, self.sigma));
            data.push(sample(&mut rng, self.sigma));
            data.push(rng.gen_range(0..self.frames) as f64);
        }
        data
    }

    /// Generate `n` localizations in single precision.
    pub fn generate_f32(&self, n: usize) -> Vec<f32> {
        self.generate(n).into_iter().map(|v| v as f32).collect()
    }
}

fn sample(rng: &mut StdRng, (min, max): (f64, f64)) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Rows of a six-column table whose frame column equals `frame`.
pub fn points_in_frame(data: &[f64], frame: usize) -> Vec<f64> {
    data.chunks_exact(GENERATED_COLUMNS)
        .filter(|row| row[5] as usize == frame)
        .flatten()
        .copied()
        .collect()
}

/// One unit-intensity point at the center of every pixel of a
/// `cols x rows` grid spanning `roi`, all in frame 0.
pub fn pixel_center_points(cols: usize, rows: usize, roi: [f64; 4], sigma: f64) -> Vec<f64> {
    let [xmin, xmax, ymin, ymax] = roi;
    let px = (xmax - xmin) / cols as f64;
    let py = (ymax - ymin) / rows as f64;

    let mut data = Vec::with_capacity(cols * rows * GENERATED_COLUMNS);
    for row in 0..rows {
        for col in 0..cols {
            data.extend_from_slice(&[
                1.0,
                xmin + (col as f64 + 0.5) * px,
                ymin + (row as f64 + 0.5) * py,
                sigma,
                sigma,
                0.0,
            ]);
        }
    }
    data
}
